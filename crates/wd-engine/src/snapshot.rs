//! Read-only view of a game for presentation layers.

use serde::Serialize;

use crate::encounter::Monster;
use crate::game::{Game, Phase};
use crate::geometry::Position;
use crate::grid::{Cell, Grid};
use crate::log::Message;
use crate::player::Player;
use crate::vision::RevealedSet;

/// What a renderer should draw in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile<'a> {
    /// Not yet seen.
    Fog,
    /// The player.
    Player,
    /// The way down.
    Stairs,
    /// A monster.
    Monster(&'a Monster),
    /// Solid rock.
    Wall,
    /// Empty ground.
    Floor,
}

/// The encounter part of a snapshot. The expected answer is deliberately
/// absent.
#[derive(Debug, Clone, Serialize)]
pub struct CombatView<'a> {
    /// The monster being fought.
    pub monster: &'a Monster,
    /// The prompt to answer.
    pub prompt: &'a str,
    /// Damage multiplier from the current streak.
    pub streak_multiplier: f64,
}

/// Everything a presentation layer needs after a transition.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    /// Current floor.
    pub floor: u32,
    /// Chapter prompts come from.
    pub chapter: &'a str,
    /// The floor's cells.
    pub grid: &'a Grid,
    /// Cells the player has seen.
    #[serde(serialize_with = "serialize_revealed")]
    pub revealed: &'a RevealedSet,
    /// Player stats and position.
    pub player: &'a Player,
    /// Experience needed for the next level.
    pub xp_for_next_level: u32,
    /// Remaining monsters.
    pub monsters: &'a [Monster],
    /// The exit.
    pub stairs: Position,
    /// Consecutive correct answers.
    pub streak: u32,
    /// Recent messages, newest first.
    pub messages: Vec<&'a Message>,
    /// The active encounter, if any.
    pub combat: Option<CombatView<'a>>,
    /// Whether the run has ended.
    pub game_over: bool,
}

fn serialize_revealed<S>(revealed: &&RevealedSet, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(revealed.iter())
}

impl<'a> Snapshot<'a> {
    pub(crate) fn of(game: &'a Game) -> Self {
        let combat = match game.phase() {
            Phase::Encounter(session) => {
                game.monsters()
                    .get(session.monster)
                    .map(|monster| CombatView {
                        monster,
                        prompt: &session.card.prompt,
                        streak_multiplier: game.streak_multiplier(),
                    })
            }
            _ => None,
        };

        Self {
            floor: game.floor(),
            chapter: game.chapter(),
            grid: game.grid(),
            revealed: game.revealed(),
            player: game.player(),
            xp_for_next_level: game.player().xp_for_next_level(),
            monsters: game.monsters(),
            stairs: game.stairs(),
            streak: game.streak(),
            messages: game.messages().collect(),
            combat,
            game_over: game.is_defeated(),
        }
    }

    /// The tile at a position, hidden by fog unless revealed.
    pub fn tile(&self, pos: Position) -> Tile<'a> {
        if !self.revealed.contains(pos) {
            return Tile::Fog;
        }
        self.tile_unfogged(pos)
    }

    /// The tile at a position as if the whole floor were revealed.
    pub fn tile_unfogged(&self, pos: Position) -> Tile<'a> {
        if pos == self.player.position {
            return Tile::Player;
        }
        if pos == self.stairs {
            return Tile::Stairs;
        }
        if let Some(monster) = self.monsters.iter().find(|m| m.position == pos) {
            return Tile::Monster(monster);
        }
        match self.grid.get(pos) {
            Some(Cell::Floor) => Tile::Floor,
            _ => Tile::Wall,
        }
    }
}
