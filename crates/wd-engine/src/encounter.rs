//! Monster archetypes and per-floor population.
//!
//! Deeper floors unlock tougher archetypes one at a time and scale hit
//! points and damage by 20% per floor past the first.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// Base stats for a kind of monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    /// Display name.
    pub name: &'static str,
    /// Emoji shown by graphical frontends.
    pub glyph: &'static str,
    /// Base hit points.
    pub hp: u32,
    /// Base damage per hit.
    pub damage: u32,
    /// Experience awarded on defeat.
    pub xp: u32,
    /// Gold awarded on defeat.
    pub gold: u32,
}

/// Archetypes from weakest to strongest. Floor `F` draws from the first
/// `min(F, len - 1) + 1` entries.
pub const ARCHETYPES: [Archetype; 6] = [
    Archetype {
        name: "Slime",
        glyph: "🟢",
        hp: 30,
        damage: 5,
        xp: 15,
        gold: 5,
    },
    Archetype {
        name: "Goblin",
        glyph: "👺",
        hp: 40,
        damage: 8,
        xp: 25,
        gold: 10,
    },
    Archetype {
        name: "Skeleton",
        glyph: "💀",
        hp: 50,
        damage: 10,
        xp: 35,
        gold: 15,
    },
    Archetype {
        name: "Ghost",
        glyph: "👻",
        hp: 35,
        damage: 12,
        xp: 40,
        gold: 20,
    },
    Archetype {
        name: "Orc",
        glyph: "👹",
        hp: 70,
        damage: 15,
        xp: 50,
        gold: 25,
    },
    Archetype {
        name: "Dragon",
        glyph: "🐉",
        hp: 100,
        damage: 20,
        xp: 100,
        gold: 50,
    },
];

/// A monster on the current floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Where it stands. Monsters never move.
    pub position: Position,
    /// Display name.
    pub name: String,
    /// Emoji label.
    pub glyph: String,
    /// Remaining hit points.
    pub hp: u32,
    /// Hit points at spawn.
    pub max_hp: u32,
    /// Damage dealt per wrong answer.
    pub damage: u32,
    /// Experience awarded on defeat.
    pub xp_reward: u32,
    /// Gold awarded on defeat.
    pub gold_reward: u32,
}

impl Monster {
    /// Spawn an archetype at a position, scaled for a floor.
    pub fn spawn(archetype: &Archetype, position: Position, floor: u32) -> Self {
        let hp = scale_for_floor(archetype.hp, floor);
        Self {
            position,
            name: archetype.name.to_string(),
            glyph: archetype.glyph.to_string(),
            hp,
            max_hp: hp,
            damage: scale_for_floor(archetype.damage, floor),
            xp_reward: archetype.xp,
            gold_reward: archetype.gold,
        }
    }

    /// Whether the monster has no hit points left.
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

/// `floor(base * (1 + (floor - 1) * 0.2))`, computed exactly as
/// `base * (floor + 4) / 5`.
pub fn scale_for_floor(base: u32, floor: u32) -> u32 {
    let floor = floor.max(1);
    base.saturating_mul(floor + 4) / 5
}

/// How many archetypes a floor may draw from.
pub fn unlocked_archetypes(floor: u32) -> usize {
    (floor as usize).min(ARCHETYPES.len() - 1) + 1
}

/// How many monsters a floor wants before space limits apply.
pub fn monster_count(floor: u32) -> usize {
    3 + floor as usize
}

/// Populate a floor, drawing positions from `available` without replacement.
///
/// `available` must already exclude the player and the stairs. Fewer than
/// [`monster_count`] monsters are placed when there is not enough room.
pub fn populate(floor: u32, mut available: Vec<Position>, rng: &mut StdRng) -> Vec<Monster> {
    let count = monster_count(floor).min(available.len());
    let unlocked = unlocked_archetypes(floor);
    let mut monsters = Vec::with_capacity(count);

    for _ in 0..count {
        let position = available.swap_remove(rng.random_range(0..available.len()));
        let archetype = &ARCHETYPES[rng.random_range(0..unlocked)];
        monsters.push(Monster::spawn(archetype, position, floor));
    }

    tracing::debug!(floor, count = monsters.len(), "populated floor");
    monsters
}
