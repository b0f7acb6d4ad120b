//! The game aggregate.
//!
//! [`Game`] owns everything that changes during a run. It is mutated only
//! through four entry points: [`Game::attempt_move`], [`Game::submit_answer`],
//! [`Game::flee`] and [`Game::restart`]. Each completes its whole transition
//! before returning. Presentation code reads state through
//! [`Game::snapshot`] or the accessors.

use rand::SeedableRng;
use rand::rngs::StdRng;

use wd_content::{ContentStore, DEFAULT_CHAPTER};

use crate::combat::{self, AnswerOutcome, CombatSession, FleeOutcome};
use crate::config::EngineConfig;
use crate::dungeon;
use crate::encounter::{self, Monster};
use crate::error::EngineResult;
use crate::geometry::{Direction, Position};
use crate::grid::Grid;
use crate::log::{Message, MessageCategory, MessageLog};
use crate::movement::{self, MoveOutcome};
use crate::player::Player;
use crate::snapshot::Snapshot;
use crate::vision::RevealedSet;

/// Where the run currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Walking the floor.
    Exploring,
    /// Fighting a monster; movement is disabled.
    Encounter(CombatSession),
    /// Hit points ran out. Only [`Game::restart`] does anything now.
    Defeated,
}

/// A single-player run through the dungeon.
#[derive(Debug)]
pub struct Game {
    pub(crate) config: EngineConfig,
    pub(crate) content: ContentStore,
    pub(crate) rng: StdRng,
    pub(crate) player: Player,
    pub(crate) floor: u32,
    pub(crate) chapter: String,
    pub(crate) grid: Grid,
    pub(crate) monsters: Vec<Monster>,
    pub(crate) stairs: Position,
    pub(crate) revealed: RevealedSet,
    pub(crate) streak: u32,
    pub(crate) log: MessageLog,
    pub(crate) phase: Phase,
}

impl Game {
    /// Start a new run on floor 1.
    pub fn new(config: EngineConfig, content: ContentStore) -> EngineResult<Self> {
        config.validate()?;

        let mut game = Self {
            rng: StdRng::seed_from_u64(config.seed),
            player: Player::new(config.starting_hp),
            floor: 1,
            chapter: DEFAULT_CHAPTER.to_string(),
            grid: Grid::filled(config.grid_size),
            monsters: Vec::new(),
            stairs: Position::new(0, 0),
            revealed: RevealedSet::new(config.grid_size),
            streak: 0,
            log: MessageLog::new(config.max_messages),
            phase: Phase::Exploring,
            config,
            content,
        };
        game.start_run();
        game.log.push(
            MessageCategory::Info,
            "Welcome to the dungeon! Find the stairs to descend.",
        );
        Ok(game)
    }

    /// Try to step one cell. See [`movement::attempt_move`].
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        movement::attempt_move(self, direction)
    }

    /// Answer the current prompt. See [`combat::submit_answer`].
    pub fn submit_answer(&mut self, text: &str) -> AnswerOutcome {
        combat::submit_answer(self, text)
    }

    /// Run from the current encounter. See [`combat::flee`].
    pub fn flee(&mut self) -> FleeOutcome {
        combat::flee(self)
    }

    /// Throw away the run and start again on floor 1 with default stats.
    ///
    /// The log is cleared and only the floor entry is recorded. The RNG is
    /// not reseeded, so a restarted run gets a new dungeon.
    pub fn restart(&mut self) {
        tracing::info!(floor = self.floor, "restarting run");
        self.start_run();
    }

    fn start_run(&mut self) {
        self.player = Player::new(self.config.starting_hp);
        self.floor = 1;
        self.streak = 0;
        self.phase = Phase::Exploring;
        self.log.clear();
        self.enter_floor();
    }

    /// Build the current floor from scratch: layout, player and stairs
    /// placement, monsters, chapter, and a fresh revealed set.
    pub(crate) fn enter_floor(&mut self) {
        let layout = dungeon::generate(&self.config, &mut self.rng);
        let first = layout.rooms[0];
        let start = Position::new(first.x + 1, first.y + 1);

        let available: Vec<Position> = layout
            .grid
            .floor_cells()
            .into_iter()
            .filter(|&p| p != start)
            .collect();

        let stairs = match layout.rooms.last() {
            Some(last) if layout.rooms.len() > 1 => last.center(),
            _ => available.last().copied().unwrap_or(start),
        };

        let spawn_cells: Vec<Position> = available.into_iter().filter(|&p| p != stairs).collect();

        self.grid = layout.grid;
        self.player.position = start;
        self.stairs = stairs;
        self.monsters = encounter::populate(self.floor, spawn_cells, &mut self.rng);
        self.chapter = self
            .content
            .chapter_for_floor(self.floor)
            .unwrap_or(DEFAULT_CHAPTER)
            .to_string();

        self.revealed.clear(self.config.grid_size);
        self.revealed.reveal_around(start, self.config.vision_radius);

        tracing::info!(
            floor = self.floor,
            chapter = %self.chapter,
            monsters = self.monsters.len(),
            "entered floor"
        );
        self.log.push(
            MessageCategory::Info,
            format!("Entered Floor {} - Chapter: {}", self.floor, self.chapter),
        );
    }

    /// The configuration this game was created with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The flashcard content.
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Current floor, starting at 1.
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Chapter prompts are drawn from on this floor.
    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    /// The floor's cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Monsters still standing on this floor.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// The monster standing at a position, if any.
    pub fn monster_at(&self, pos: Position) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.position == pos)
    }

    pub(crate) fn monster_index_at(&self, pos: Position) -> Option<usize> {
        self.monsters.iter().position(|m| m.position == pos)
    }

    /// The exit to the next floor.
    pub fn stairs(&self) -> Position {
        self.stairs
    }

    /// Cells seen on this floor.
    pub fn revealed(&self) -> &RevealedSet {
        &self.revealed
    }

    /// Consecutive correct answers.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Damage multiplier the current streak is worth.
    pub fn streak_multiplier(&self) -> f64 {
        combat::streak_multiplier(self.streak)
    }

    /// Recent messages, newest first.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.log.iter()
    }

    /// The message log.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// The current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The active encounter, if any.
    pub fn combat(&self) -> Option<&CombatSession> {
        match &self.phase {
            Phase::Encounter(session) => Some(session),
            _ => None,
        }
    }

    /// The monster in the active encounter, if any.
    pub fn combat_monster(&self) -> Option<&Monster> {
        self.combat().and_then(|s| self.monsters.get(s.monster))
    }

    /// Whether an encounter is in progress.
    pub fn is_in_combat(&self) -> bool {
        matches!(self.phase, Phase::Encounter(_))
    }

    /// Whether the run has ended in defeat.
    pub fn is_defeated(&self) -> bool {
        self.phase == Phase::Defeated
    }

    /// A read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(self)
    }
}
