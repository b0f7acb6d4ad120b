use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use wd_engine::{AnswerOutcome, Direction, FleeOutcome, Game, MoveOutcome, Phase};

const HELP: &str = "\
  Commands:
    w/a/s/d, north/west/south/east   move one cell
    <answer>                         answer the prompt during a fight
    flee                             run from a fight (costs half its damage)
    map                              show the map
    status                           show your stats
    log                              show recent messages
    restart                          start a new run
    quit                             leave the dungeon";

pub fn run(content: Option<&Path>, seed: u64, grid_size: i32) -> Result<(), String> {
    let game = super::start_game(content, seed, grid_size)?;
    let mut session = Session::new(game);

    println!("  {} Word Dungeon", "Entering".bold());
    println!("  Seed: {seed} | Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", session.overview());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}", session.prompt());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Reply::Quit => break,
            Reply::Text(text) => println!("{text}\n"),
        }
    }

    println!("  Farewell.");
    Ok(())
}

enum Reply {
    Text(String),
    Quit,
}

/// Maps input lines onto game transitions and renders the result.
struct Session {
    game: Game,
}

impl Session {
    fn new(game: Game) -> Self {
        Self { game }
    }

    fn prompt(&self) -> &'static str {
        match self.game.phase() {
            Phase::Encounter(_) => "answer> ",
            _ => "> ",
        }
    }

    fn process(&mut self, input: &str) -> Reply {
        let command = input.to_lowercase();
        let text = match command.as_str() {
            "quit" | "q" | "exit" => return Reply::Quit,
            "help" | "?" => HELP.to_string(),
            "map" => self.overview(),
            "status" => self.status(),
            "log" => self.log(),
            "restart" => {
                self.game.restart();
                format!("{}\n\n{}", "A new run begins.".bold(), self.overview())
            }
            "flee" => self.flee(),
            _ => match self.game.phase() {
                Phase::Encounter(_) => self.answer(input),
                Phase::Defeated => "You have fallen. Type 'restart' to try again.".to_string(),
                Phase::Exploring => match Direction::parse(&command) {
                    Some(direction) => self.step(direction),
                    None => format!("Unknown command '{input}'. Type 'help' for commands.")
                        .yellow()
                        .to_string(),
                },
            },
        };
        Reply::Text(text)
    }

    fn step(&mut self, direction: Direction) -> String {
        match self.game.attempt_move(direction) {
            MoveOutcome::Blocked => "You can't go that way.".to_string(),
            MoveOutcome::Moved { .. } => self.overview(),
            MoveOutcome::Encounter { monster } => {
                format!("{} {}", format!("A {monster} blocks your path!").red().bold(), self.fight())
            }
            MoveOutcome::Descended { floor } => format!(
                "{}\n\n{}",
                format!("You descend to Floor {floor}.").cyan().bold(),
                self.overview()
            ),
        }
    }

    fn answer(&mut self, input: &str) -> String {
        match self.game.submit_answer(input) {
            AnswerOutcome::NoEncounter => "There is nothing to answer.".to_string(),
            AnswerOutcome::Hit {
                damage,
                monster_hp,
                streak,
            } => format!(
                "{} You deal {damage} damage ({monster_hp} HP left). Streak {streak} (x{:.1})\n{}",
                "Correct!".green().bold(),
                self.game.streak_multiplier(),
                self.fight()
            ),
            AnswerOutcome::Victory {
                damage,
                monster,
                xp,
                gold,
                levels,
            } => {
                let mut out = format!(
                    "{} You deal {damage} damage. {}",
                    "Correct!".green().bold(),
                    format!("Defeated {monster}! +{xp} XP, +{gold} gold").green()
                );
                for level in levels {
                    out.push('\n');
                    out.push_str(&format!("Level Up! Now level {level}!").yellow().bold().to_string());
                }
                out.push_str("\n\n");
                out.push_str(&self.overview());
                out
            }
            AnswerOutcome::Miss { damage, expected } => format!(
                "{} The answer was '{expected}'. You take {damage} damage. (HP {}/{})\n{}",
                "Wrong!".red().bold(),
                self.game.player().hp,
                self.game.player().max_hp,
                self.fight()
            ),
            AnswerOutcome::Defeat { damage, expected } => format!(
                "{} The answer was '{expected}'. You take {damage} damage.\n{}",
                "Wrong!".red().bold(),
                self.fallen()
            ),
        }
    }

    fn flee(&mut self) -> String {
        match self.game.flee() {
            FleeOutcome::NoEncounter => "There is nothing to flee from.".to_string(),
            FleeOutcome::Escaped { damage } => format!(
                "You flee, taking {damage} damage.\n\n{}",
                self.overview()
            ),
            FleeOutcome::Defeat { damage } => {
                format!("You take {damage} damage as you run.\n{}", self.fallen())
            }
        }
    }

    /// The current foe and prompt.
    fn fight(&self) -> String {
        let (Some(monster), Some(session)) = (self.game.combat_monster(), self.game.combat())
        else {
            return String::new();
        };
        format!(
            "{} {} HP {}/{}\n  Translate: {}",
            monster.glyph,
            monster.name,
            monster.hp,
            monster.max_hp,
            session.card.prompt.bold()
        )
    }

    fn fallen(&self) -> String {
        format!(
            "{}\n  Type 'restart' to play again or 'quit' to leave.",
            format!("You have fallen on Floor {}.", self.game.floor())
                .red()
                .bold()
        )
    }

    fn overview(&self) -> String {
        let snapshot = self.game.snapshot();
        let mut out = super::render_map(&snapshot, true);
        out.push_str(&super::status_line(&snapshot));
        if let Some(message) = snapshot.messages.first() {
            out.push('\n');
            out.push_str(&message.text.dimmed().to_string());
        }
        out
    }

    fn status(&self) -> String {
        let snapshot = self.game.snapshot();
        let mut out = super::status_line(&snapshot);
        if let Some(combat) = &snapshot.combat {
            out.push_str(&format!(
                "\nFighting {} ({}/{} HP), damage multiplier x{:.1}",
                combat.monster.name, combat.monster.hp, combat.monster.max_hp, combat.streak_multiplier
            ));
        }
        out
    }

    fn log(&self) -> String {
        let lines: Vec<String> = self
            .game
            .messages()
            .map(|m| format!("  [{}] {}", m.category, m.text))
            .collect();
        if lines.is_empty() {
            "  No messages.".to_string()
        } else {
            lines.join("\n")
        }
    }
}
