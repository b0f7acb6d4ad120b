//! The player character and the XP economy.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// Experience needed per level is `level * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 100;

/// The player's stats and position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Current cell.
    pub position: Position,
    /// Remaining hit points; 0 means the run is over.
    pub hp: u32,
    /// Hit point ceiling.
    pub max_hp: u32,
    /// Character level, starting at 1.
    pub level: u32,
    /// Experience toward the next level.
    pub xp: u32,
    /// Gold collected.
    pub gold: u32,
}

impl Player {
    /// A fresh level-1 player at full health.
    pub fn new(hp: u32) -> Self {
        Self {
            position: Position::new(1, 1),
            hp,
            max_hp: hp,
            level: 1,
            xp: 0,
            gold: 0,
        }
    }

    /// Experience required to reach the next level.
    pub fn xp_for_next_level(&self) -> u32 {
        self.level * XP_PER_LEVEL
    }

    /// Whether hit points have run out.
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Lose hit points, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Add experience and apply every level-up it pays for.
    ///
    /// Each level-up spends the current threshold, raises `max_hp` by
    /// `hp_per_level` and fully heals. Returns the levels reached, in order.
    pub fn gain_xp(&mut self, amount: u32, hp_per_level: u32) -> Vec<u32> {
        self.xp = self.xp.saturating_add(amount);
        let mut reached = Vec::new();
        while self.xp >= self.xp_for_next_level() {
            self.xp -= self.xp_for_next_level();
            self.level += 1;
            self.max_hp += hp_per_level;
            self.hp = self.max_hp;
            reached.push(self.level);
        }
        reached
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(100)
    }
}
