use crate::core::engine::{GameEngine, Phase};
use crate::core::round::{GuessOutcome, Round, RoundState};
use crate::domain::model::DisplayMode;
use crate::domain::ports::{PreferencesStore, ProfileSource};
use crate::utils::error::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-oriented terminal frontend. Maps stdin commands to engine
/// operations and engine state back to stdout; holds no game state of
/// its own.
pub struct ConsoleApp<P: ProfileSource, S: PreferencesStore> {
    engine: GameEngine<P, S>,
}

impl<P: ProfileSource, S: PreferencesStore> ConsoleApp<P, S> {
    pub fn new(engine: GameEngine<P, S>) -> Self {
        Self { engine }
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("🎂 Guess My Age");
        print_help();

        println!("Loading please wait...");
        self.engine.start_round().await;
        self.render();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match input {
                "q" | "quit" | "exit" => break,
                "help" | "?" => print_help(),
                "g" | "gender" => {
                    match self.engine.switch_gender().await {
                        Ok(gender) => println!("Gender filter is now: {}", gender),
                        Err(e) => {
                            eprintln!("❌ {}", e.user_friendly_message());
                            eprintln!("💡 {}", e.recovery_suggestion());
                        }
                    }
                    self.render();
                }
                "r" | "replay" | "retry" => {
                    println!("Loading please wait...");
                    self.engine.replay().await;
                    self.render();
                }
                "reset" => {
                    match self.engine.reset_high_score().await {
                        Ok(()) => println!("High score reset to 0."),
                        Err(e) => {
                            eprintln!("❌ {}", e.user_friendly_message());
                            eprintln!("💡 {}", e.recovery_suggestion());
                        }
                    }
                }
                "f" | "flip" => {
                    self.engine.toggle_display();
                    self.render();
                }
                "h" | "hint" => self.handle_hint(&mut lines).await?,
                guess => self.handle_guess(guess).await,
            }
        }

        println!("Bye 👋");
        Ok(())
    }

    async fn handle_guess(&mut self, raw: &str) {
        let report = match self.engine.submit_guess(raw).await {
            Ok(report) => report,
            Err(e) => {
                // 高分存檔失敗不該吃掉贏的事實
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                self.render();
                return;
            }
        };

        match report.outcome {
            GuessOutcome::NotReady => match self.engine.phase() {
                Phase::Failed { .. } => println!("No profile loaded. Type 'retry' to try again."),
                _ => println!("Hold on, still loading..."),
            },
            GuessOutcome::RoundOver => {
                println!("This round is over. Type 'replay' for a new one.")
            }
            GuessOutcome::Invalid => println!("❌ Not a valid age"),
            GuessOutcome::Correct { .. } => {
                println!("You guessed it right 🎉");
                if report.new_high_score {
                    println!("🏆 New high score: {}!", self.engine.high_score());
                }
                self.render();
            }
            GuessOutcome::TooOld { score } => {
                println!("Strange, do I look this old? 🤐 ({} points left)", score)
            }
            GuessOutcome::TooYoung { score } => {
                println!("I'm not this young! 😀 ({} points left)", score)
            }
            GuessOutcome::Exhausted => {
                println!("🤯 You lost the game");
                if let Phase::Playing(round) = self.engine.phase() {
                    println!("The age was {}. Type 'replay' for another round.", round.target_age());
                }
            }
        }
    }

    async fn handle_hint(&mut self, lines: &mut Lines<BufReader<Stdin>>) -> Result<()> {
        let Some(prompt) = self.engine.request_hint() else {
            println!("You don't have enough score to take a hint, or you already won.");
            return Ok(());
        };

        println!(
            "Taking a hint will cost {} score point. Take it? [y/N]",
            prompt.cost
        );
        let answer = lines.next_line().await?.unwrap_or_default();
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Hint skipped.");
            return Ok(());
        }

        if let Some(range) = self.engine.confirm_hint() {
            println!("💡 The age is between {} and {}", range.low, range.high);
            if let Phase::Playing(round) = self.engine.phase() {
                println!("({} points left)", round.score());
            }
        }
        Ok(())
    }

    fn render(&self) {
        match self.engine.phase() {
            Phase::Loading => println!("Loading please wait..."),
            Phase::Failed { reason } => {
                println!("⚠️  {}", reason);
                println!("Type 'retry' to try again.");
            }
            Phase::Playing(round) => self.render_round(round),
        }
    }

    fn render_round(&self, round: &Round) {
        println!();
        println!(
            "Score: {}  |  High score: {}  |  Gender: {}",
            round.score(),
            self.engine.high_score(),
            self.engine.gender()
        );

        match round.target_name() {
            Some(name) => println!("Hi 👋 I'm {}", name),
            None => println!("Hi 👋 I'd rather not say my name"),
        }

        match self.engine.display() {
            DisplayMode::Photo => match round.image_url() {
                Some(url) => println!("📷 {}", url),
                None => println!("📷 (no photo available)"),
            },
            DisplayMode::Age => match round.state() {
                RoundState::Won => println!("🎂 {}", round.target_age()),
                _ => println!("🎂 ?"),
            },
        }

        if round.state() == RoundState::AwaitingGuess {
            println!("Start guessing...");
        }
    }
}

fn print_help() {
    println!("Type a number to guess the age. Other commands:");
    println!("  h / hint    take a hint (costs 1 point, once per round)");
    println!("  g / gender  cycle the gender filter (Any -> F -> M)");
    println!("  r / replay  start a new round (also retries a failed load)");
    println!("  f / flip    flip between photo and revealed age");
    println!("  reset       reset the high score to 0");
    println!("  q / quit    leave the game");
}
