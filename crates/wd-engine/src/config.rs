//! Configuration for a game.

use std::ops::RangeInclusive;

use crate::error::{EngineError, EngineResult};

/// Largest grid side accepted by [`EngineConfig::validate`].
pub const MAX_GRID_SIZE: i32 = 1024;

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible dungeons, monsters and card draws.
    pub seed: u64,
    /// Side length of the square dungeon grid.
    pub grid_size: i32,
    /// Fog-of-war reveal radius around the player.
    pub vision_radius: i32,
    /// How many room placements are attempted per floor.
    pub room_count: RangeInclusive<u32>,
    /// Width and height range of a room.
    pub room_size: RangeInclusive<i32>,
    /// Capacity of the message log.
    pub max_messages: usize,
    /// Player hit points at the start of a run.
    pub starting_hp: u32,
    /// Max hit points gained per level.
    pub hp_per_level: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_size: 15,
            vision_radius: 3,
            room_count: 4..=6,
            room_size: 3..=6,
            max_messages: 20,
            starting_hp: 100,
            hp_per_level: 20,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the grid side length.
    pub fn with_grid_size(mut self, size: i32) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the vision radius.
    pub fn with_vision_radius(mut self, radius: i32) -> Self {
        self.vision_radius = radius;
        self
    }

    /// Set the range of room placement attempts per floor.
    pub fn with_room_count(mut self, count: RangeInclusive<u32>) -> Self {
        self.room_count = count;
        self
    }

    /// Set the room width/height range.
    pub fn with_room_size(mut self, size: RangeInclusive<i32>) -> Self {
        self.room_size = size;
        self
    }

    /// Set the message log capacity.
    pub fn with_max_messages(mut self, max: usize) -> Self {
        self.max_messages = max;
        self
    }

    /// Set the starting hit points.
    pub fn with_starting_hp(mut self, hp: u32) -> Self {
        self.starting_hp = hp;
        self
    }

    /// Set the max hit points gained per level.
    pub fn with_hp_per_level(mut self, hp: u32) -> Self {
        self.hp_per_level = hp;
        self
    }

    /// Check that the configuration can generate a playable floor.
    ///
    /// The grid must fit the largest room inside a one-cell margin on every
    /// side, since room origins are drawn from `1..=size-width-2`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.room_size.is_empty() {
            return Err(EngineError::InvalidConfig(format!(
                "room size range {:?} is empty",
                self.room_size
            )));
        }
        if *self.room_size.start() < 2 {
            return Err(EngineError::InvalidConfig(
                "rooms must be at least 2 cells wide".to_string(),
            ));
        }
        if self.room_count.is_empty() || *self.room_count.start() < 1 {
            return Err(EngineError::InvalidConfig(format!(
                "room count range {:?} is empty",
                self.room_count
            )));
        }
        let needed = *self.room_size.end() + 3;
        if self.grid_size < needed {
            return Err(EngineError::InvalidConfig(format!(
                "grid size {} too small for rooms up to {} cells (need at least {needed})",
                self.grid_size,
                self.room_size.end()
            )));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "grid size {} too large (at most {MAX_GRID_SIZE})",
                self.grid_size
            )));
        }
        if self.vision_radius < 1 {
            return Err(EngineError::InvalidConfig(
                "vision radius must be at least 1".to_string(),
            ));
        }
        if self.vision_radius > self.grid_size {
            return Err(EngineError::InvalidConfig(format!(
                "vision radius {} larger than the grid",
                self.vision_radius
            )));
        }
        if self.max_messages == 0 {
            return Err(EngineError::InvalidConfig(
                "message log capacity must be at least 1".to_string(),
            ));
        }
        if self.starting_hp == 0 {
            return Err(EngineError::InvalidConfig(
                "starting hp must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
