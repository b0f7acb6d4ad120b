//! Player movement and collision.

use crate::combat;
use crate::game::{Game, Phase};
use crate::geometry::Direction;
use crate::log::MessageCategory;

/// What happened after a move was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed: a wall, the grid edge, an active encounter, or a
    /// finished run was in the way.
    Blocked,
    /// The player stepped onto an empty floor cell.
    Moved {
        /// Cells revealed by this step.
        revealed: usize,
    },
    /// The destination held a monster; the player stays put and an
    /// encounter begins.
    Encounter {
        /// Name of the monster engaged.
        monster: String,
    },
    /// The player took the stairs and a new floor was generated.
    Descended {
        /// The new floor number.
        floor: u32,
    },
}

/// Try to move the player one cell.
pub fn attempt_move(game: &mut Game, direction: Direction) -> MoveOutcome {
    if game.phase != Phase::Exploring {
        return MoveOutcome::Blocked;
    }

    let destination = game.player.position.step(direction);
    if !game.grid.is_floor(destination) {
        return MoveOutcome::Blocked;
    }

    if let Some(index) = game.monster_index_at(destination) {
        let monster = game.monsters[index].name.clone();
        combat::start_encounter(game, index);
        return MoveOutcome::Encounter { monster };
    }

    game.player.position = destination;

    if destination == game.stairs {
        game.floor += 1;
        game.log.push(
            MessageCategory::Info,
            format!("Descending to Floor {}...", game.floor),
        );
        game.enter_floor();
        return MoveOutcome::Descended { floor: game.floor };
    }

    let revealed = game
        .revealed
        .reveal_around(destination, game.config.vision_radius);
    MoveOutcome::Moved { revealed }
}
