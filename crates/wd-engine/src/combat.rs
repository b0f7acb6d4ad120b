//! Flashcard combat.
//!
//! An encounter shows one prompt at a time. A correct answer strikes the
//! monster for damage that grows with level and the running streak; a wrong
//! answer costs the player the monster's damage and breaks the streak.
//! Fleeing costs half the monster's damage and also breaks the streak. The
//! streak otherwise carries over from one encounter to the next.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use wd_content::{ContentStore, Flashcard};

use crate::answer::check_answer;
use crate::game::{Game, Phase};
use crate::log::MessageCategory;

/// An encounter in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatSession {
    /// Index of the opposing monster in the floor's monster list.
    pub monster: usize,
    /// The prompt currently shown.
    pub card: Flashcard,
}

/// What happened after an answer was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// No encounter was active; nothing changed.
    NoEncounter,
    /// Correct, and the monster is still standing. A new prompt is up.
    Hit {
        /// Damage dealt.
        damage: u32,
        /// Monster hit points left.
        monster_hp: u32,
        /// Streak after this answer.
        streak: u32,
    },
    /// Correct, and the monster fell.
    Victory {
        /// Damage dealt.
        damage: u32,
        /// Name of the defeated monster.
        monster: String,
        /// Experience gained.
        xp: u32,
        /// Gold gained.
        gold: u32,
        /// Levels reached through the XP award, in order.
        levels: Vec<u32>,
    },
    /// Wrong; the player survived and a new prompt is up.
    Miss {
        /// Damage taken.
        damage: u32,
        /// The answer that was expected.
        expected: String,
    },
    /// Wrong, and the player's hit points ran out.
    Defeat {
        /// Damage taken.
        damage: u32,
        /// The answer that was expected.
        expected: String,
    },
}

/// What happened after trying to flee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleeOutcome {
    /// No encounter was active; nothing changed.
    NoEncounter,
    /// Got away; back to exploring.
    Escaped {
        /// Damage taken while running.
        damage: u32,
    },
    /// The parting blow was fatal.
    Defeat {
        /// Damage taken while running.
        damage: u32,
    },
}

/// `floor((10 + level * 5) * (1 + streak * 0.5))`, in exact integer form.
pub fn strike_damage(level: u32, streak: u32) -> u32 {
    (10 + level * 5) * (2 + streak) / 2
}

/// The damage multiplier a streak is worth.
pub fn streak_multiplier(streak: u32) -> f64 {
    1.0 + f64::from(streak) * 0.5
}

/// Draw a random card for a chapter, falling back to the first chapter and
/// then to [`Flashcard::fallback`].
pub fn draw_card(content: &ContentStore, chapter: &str, rng: &mut StdRng) -> Flashcard {
    let cards = content.cards_or_first(chapter);
    if cards.is_empty() {
        tracing::warn!(chapter, "no flashcards available, using fallback card");
        return Flashcard::fallback();
    }
    cards[rng.random_range(0..cards.len())].clone()
}

/// Begin an encounter against the monster at `monster` (an index into the
/// floor's monsters). The streak is left as it is.
pub(crate) fn start_encounter(game: &mut Game, monster: usize) {
    let card = draw_card(&game.content, &game.chapter, &mut game.rng);
    tracing::info!(
        monster = %game.monsters[monster].name,
        streak = game.streak,
        "encounter started"
    );
    game.phase = Phase::Encounter(CombatSession { monster, card });
}

fn next_card(game: &mut Game) {
    let card = draw_card(&game.content, &game.chapter, &mut game.rng);
    if let Phase::Encounter(session) = &mut game.phase {
        session.card = card;
    }
}

/// Resolve an answer to the current prompt.
///
/// A no-op returning [`AnswerOutcome::NoEncounter`] outside an encounter.
pub fn submit_answer(game: &mut Game, text: &str) -> AnswerOutcome {
    let (index, expected) = match &game.phase {
        Phase::Encounter(session) => (session.monster, session.card.answer.clone()),
        _ => return AnswerOutcome::NoEncounter,
    };

    if check_answer(text, &expected) {
        game.streak += 1;
        let damage = strike_damage(game.player.level, game.streak);
        let monster = &mut game.monsters[index];
        monster.hp = monster.hp.saturating_sub(damage);

        if !monster.is_defeated() {
            let outcome = AnswerOutcome::Hit {
                damage,
                monster_hp: monster.hp,
                streak: game.streak,
            };
            next_card(game);
            return outcome;
        }

        let monster = game.monsters.remove(index);
        game.player.gold += monster.gold_reward;
        let levels = game
            .player
            .gain_xp(monster.xp_reward, game.config.hp_per_level);
        game.log.push(
            MessageCategory::Reward,
            format!(
                "Defeated {}! +{} XP, +{} gold",
                monster.name, monster.xp_reward, monster.gold_reward
            ),
        );
        for level in &levels {
            game.log
                .push(MessageCategory::Reward, format!("Level Up! Now level {level}!"));
        }
        game.phase = Phase::Exploring;
        tracing::info!(monster = %monster.name, streak = game.streak, "monster defeated");

        AnswerOutcome::Victory {
            damage,
            monster: monster.name,
            xp: monster.xp_reward,
            gold: monster.gold_reward,
            levels,
        }
    } else {
        game.streak = 0;
        let damage = game.monsters[index].damage;
        game.player.take_damage(damage);

        if game.player.is_dead() {
            defeat(game, index);
            return AnswerOutcome::Defeat { damage, expected };
        }
        next_card(game);
        AnswerOutcome::Miss { damage, expected }
    }
}

/// Run from the current encounter, taking half the monster's damage. The
/// monster stays where it is.
///
/// A no-op returning [`FleeOutcome::NoEncounter`] outside an encounter.
pub fn flee(game: &mut Game) -> FleeOutcome {
    let Phase::Encounter(session) = &game.phase else {
        return FleeOutcome::NoEncounter;
    };
    let index = session.monster;

    game.streak = 0;
    let monster = &game.monsters[index];
    let damage = monster.damage / 2;
    let text = format!("Fled from {}! Took {damage} damage.", monster.name);
    game.player.take_damage(damage);
    game.log.push(MessageCategory::Combat, text);

    if game.player.is_dead() {
        defeat(game, index);
        return FleeOutcome::Defeat { damage };
    }
    game.phase = Phase::Exploring;
    FleeOutcome::Escaped { damage }
}

fn defeat(game: &mut Game, index: usize) {
    let name = &game.monsters[index].name;
    tracing::info!(floor = game.floor, monster = %name, "player defeated");
    let text = format!("You were slain by a {name} on Floor {}.", game.floor);
    game.log.push(MessageCategory::Combat, text);
    game.phase = Phase::Defeated;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::encounter::{ARCHETYPES, Monster};
    use crate::geometry::{Direction, Position};
    use crate::movement::MoveOutcome;

    /// A game with one card ("katt" → "cat") and a single monster standing
    /// east of the player, already engaged.
    fn engaged(monster_hp: u32, monster_damage: u32) -> Game {
        let mut content = ContentStore::new();
        content.insert_chapter("Chapter1", vec![Flashcard::new("katt", "cat")]);
        let mut game = Game::new(EngineConfig::default().with_seed(8), content).unwrap();

        let mut monster = Monster::spawn(&ARCHETYPES[1], Position::new(0, 0), 1);
        monster.hp = monster_hp;
        monster.max_hp = monster_hp;
        monster.damage = monster_damage;
        game.monsters = vec![monster];
        start_encounter(&mut game, 0);
        game
    }

    #[test]
    fn damage_formula() {
        assert_eq!(strike_damage(1, 0), 15);
        assert_eq!(strike_damage(1, 1), 22);
        assert_eq!(strike_damage(1, 2), 30);
        assert_eq!(strike_damage(3, 3), 62);
    }

    #[test]
    fn multiplier() {
        assert!((streak_multiplier(0) - 1.0).abs() < f64::EPSILON);
        assert!((streak_multiplier(3) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn correct_answer_increments_streak_and_hits() {
        let mut game = engaged(100, 10);
        let outcome = game.submit_answer("Cat!");
        assert_eq!(
            outcome,
            AnswerOutcome::Hit {
                damage: 22,
                monster_hp: 78,
                streak: 1
            }
        );
        assert!(game.is_in_combat());
        let outcome = game.submit_answer("cat");
        assert_eq!(
            outcome,
            AnswerOutcome::Hit {
                damage: 30,
                monster_hp: 48,
                streak: 2
            }
        );
    }

    #[test]
    fn victory_awards_and_removes_monster() {
        let mut game = engaged(10, 10);
        let outcome = game.submit_answer("cat");
        assert_eq!(
            outcome,
            AnswerOutcome::Victory {
                damage: 22,
                monster: "Goblin".to_string(),
                xp: 25,
                gold: 10,
                levels: Vec::new(),
            }
        );
        assert!(game.monsters().is_empty());
        assert_eq!(*game.phase(), Phase::Exploring);
        assert_eq!(game.player().xp, 25);
        assert_eq!(game.player().gold, 10);
        assert_eq!(game.streak(), 1);
        assert_eq!(
            game.log().latest().unwrap().text,
            "Defeated Goblin! +25 XP, +10 gold"
        );
    }

    #[test]
    fn victory_can_level_up() {
        let mut game = engaged(10, 10);
        game.player.xp = 95;
        game.player.hp = 30;
        let AnswerOutcome::Victory { levels, .. } = game.submit_answer("cat") else {
            panic!("expected victory");
        };
        assert_eq!(levels, vec![2]);
        assert_eq!(game.player().level, 2);
        assert_eq!(game.player().xp, 20);
        assert_eq!(game.player().max_hp, 120);
        assert_eq!(game.player().hp, 120);
        assert_eq!(game.log().latest().unwrap().text, "Level Up! Now level 2!");
        assert_eq!(game.log().latest().unwrap().category, MessageCategory::Reward);
    }

    #[test]
    fn wrong_answer_resets_streak_and_hurts() {
        let mut game = engaged(100, 10);
        game.streak = 3;
        let outcome = game.submit_answer("dog");
        assert_eq!(
            outcome,
            AnswerOutcome::Miss {
                damage: 10,
                expected: "cat".to_string()
            }
        );
        assert_eq!(game.streak(), 0);
        assert_eq!(game.player().hp, 90);
        assert!(game.is_in_combat());
        assert_eq!(game.combat().unwrap().card.prompt, "katt");
    }

    #[test]
    fn wrong_answer_at_low_hp_is_defeat() {
        let mut game = engaged(100, 10);
        game.player.hp = 5;
        let outcome = game.submit_answer("dog");
        assert!(matches!(outcome, AnswerOutcome::Defeat { damage: 10, .. }));
        assert_eq!(game.player().hp, 0);
        assert!(game.is_defeated());
        assert!(!game.is_in_combat());
    }

    #[test]
    fn defeat_blocks_everything_but_restart() {
        let mut game = engaged(100, 10);
        game.player.hp = 5;
        game.submit_answer("dog");
        let before = game.player().clone();
        assert_eq!(game.submit_answer("cat"), AnswerOutcome::NoEncounter);
        assert_eq!(game.flee(), FleeOutcome::NoEncounter);
        assert_eq!(game.attempt_move(Direction::East), MoveOutcome::Blocked);
        assert_eq!(game.player(), &before);

        game.restart();
        assert_eq!(*game.phase(), Phase::Exploring);
        assert_eq!(game.player().hp, 100);
    }

    #[test]
    fn flee_halves_damage_and_keeps_monster() {
        let mut game = engaged(100, 20);
        game.streak = 4;
        assert_eq!(game.flee(), FleeOutcome::Escaped { damage: 10 });
        assert_eq!(game.player().hp, 90);
        assert_eq!(game.streak(), 0);
        assert!(game.combat().is_none());
        assert_eq!(*game.phase(), Phase::Exploring);
        assert_eq!(game.monsters().len(), 1);
        assert_eq!(
            game.log().latest().unwrap().text,
            "Fled from Goblin! Took 10 damage."
        );
    }

    #[test]
    fn flee_odd_damage_rounds_down() {
        let mut game = engaged(100, 15);
        assert_eq!(game.flee(), FleeOutcome::Escaped { damage: 7 });
    }

    #[test]
    fn fatal_flee_is_defeat() {
        let mut game = engaged(100, 20);
        game.player.hp = 10;
        assert_eq!(game.flee(), FleeOutcome::Defeat { damage: 10 });
        assert!(game.is_defeated());
    }

    #[test]
    fn no_encounter_is_noop() {
        let mut game = engaged(100, 10);
        game.phase = Phase::Exploring;
        let messages = game.log().len();
        assert_eq!(game.submit_answer("cat"), AnswerOutcome::NoEncounter);
        assert_eq!(game.flee(), FleeOutcome::NoEncounter);
        assert_eq!(game.log().len(), messages);
        assert_eq!(game.player().hp, 100);
    }

    #[test]
    fn streak_survives_into_next_encounter() {
        let mut game = engaged(10, 10);
        game.submit_answer("cat");
        assert_eq!(game.streak(), 1);

        // A dragon outlasts the streak-2 strike.
        let monster = Monster::spawn(&ARCHETYPES[5], Position::new(0, 0), 1);
        game.monsters.push(monster);
        start_encounter(&mut game, 0);
        assert_eq!(game.streak(), 1);
        let damage = match game.submit_answer("cat") {
            AnswerOutcome::Hit { damage, .. } | AnswerOutcome::Victory { damage, .. } => damage,
            other => panic!("expected a strike, got {other:?}"),
        };
        assert_eq!(damage, strike_damage(1, 2));
        assert_eq!(game.streak(), 2);
    }

    #[test]
    fn empty_content_uses_fallback_card() {
        let mut rng = rand::SeedableRng::seed_from_u64(1);
        let card = draw_card(&ContentStore::new(), "Chapter1", &mut rng);
        assert_eq!(card, Flashcard::fallback());
    }

    #[test]
    fn empty_chapter_falls_back_to_first() {
        let mut content = ContentStore::new();
        content.insert_chapter("A", vec![Flashcard::new("ja", "yes")]);
        content.insert_chapter("B", Vec::new());
        let mut rng = rand::SeedableRng::seed_from_u64(1);
        assert_eq!(draw_card(&content, "B", &mut rng).prompt, "ja");
    }
}
