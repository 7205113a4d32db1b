use crate::core::round::{GuessOutcome, Round};
use crate::domain::model::{DisplayMode, Gender, HintPrompt, HintRange, Preferences, Profile};
use crate::domain::ports::{PreferencesStore, ProfileSource};
use crate::utils::error::Result;

/// Tag for one profile fetch. Results carrying a ticket that is no longer
/// current are discarded, so a slow response can never overwrite a round
/// that was started after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug)]
pub enum Phase {
    /// Fetch in flight, guess input disabled.
    Loading,
    /// The fetch failed; a retry (replay) is offered.
    Failed { reason: String },
    Playing(Round),
}

/// Outcome of one guess, plus whether it set a new high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub new_high_score: bool,
}

/// Owns all mutable game state and drives it through the ports. Every
/// transition goes through a method here; the frontend only reads.
pub struct GameEngine<P: ProfileSource, S: PreferencesStore> {
    source: P,
    store: S,
    prefs: Preferences,
    phase: Phase,
    display: DisplayMode,
    round_seq: u64,
}

impl<P: ProfileSource, S: PreferencesStore> GameEngine<P, S> {
    /// Reads the persisted preferences once and sets up an engine with no
    /// round yet. An unreadable preferences file degrades to defaults;
    /// the next preference write rewrites it.
    pub async fn load(source: P, store: S) -> Self {
        let prefs = match store.load().await {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("could not load preferences, using defaults: {}", e);
                Preferences::default()
            }
        };
        tracing::debug!(
            high_score = prefs.high_score,
            gender = %prefs.gender,
            "preferences loaded"
        );

        Self {
            source,
            store,
            prefs,
            phase: Phase::Loading,
            display: DisplayMode::Photo,
            round_seq: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn display(&self) -> DisplayMode {
        self.display
    }

    pub fn high_score(&self) -> u32 {
        self.prefs.high_score
    }

    pub fn gender(&self) -> Gender {
        self.prefs.gender
    }

    /// Enters `Loading` and returns the ticket the matching
    /// `install_profile` call must present.
    pub fn begin_round(&mut self) -> FetchTicket {
        self.round_seq += 1;
        self.phase = Phase::Loading;
        tracing::debug!(round = self.round_seq, gender = %self.prefs.gender, "round started");
        FetchTicket(self.round_seq)
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale
    /// and the result was discarded.
    pub fn install_profile(&mut self, ticket: FetchTicket, fetched: Result<Profile>) -> bool {
        if ticket.0 != self.round_seq {
            // 過期的回應直接丟棄，免得蓋掉較新的回合
            tracing::debug!(
                ticket = ticket.0,
                current = self.round_seq,
                "discarding stale profile response"
            );
            return false;
        }

        match fetched {
            Ok(profile) => {
                tracing::debug!(age = profile.age, "profile installed");
                self.display = DisplayMode::Photo;
                self.phase = Phase::Playing(Round::new(profile));
            }
            Err(e) => {
                tracing::warn!("profile fetch failed: {}", e);
                self.phase = Phase::Failed {
                    reason: e.user_friendly_message(),
                };
            }
        }
        true
    }

    /// `begin_round` + fetch + `install_profile` in one call. A failed
    /// fetch lands in `Phase::Failed`, never in an error return.
    pub async fn start_round(&mut self) {
        let ticket = self.begin_round();
        let fetched = self.source.fetch(self.prefs.gender).await;
        self.install_profile(ticket, fetched);
    }

    /// Evaluates one line of player input. A win that beats the high
    /// score persists it before returning.
    pub async fn submit_guess(&mut self, raw: &str) -> Result<GuessReport> {
        let Phase::Playing(round) = &mut self.phase else {
            return Ok(GuessReport {
                outcome: GuessOutcome::NotReady,
                new_high_score: false,
            });
        };

        let outcome = round.submit_guess(raw);
        let mut new_high_score = false;

        if let GuessOutcome::Correct { score } = outcome {
            // 贏了就把照片換成揭曉的數字
            self.display = DisplayMode::Age;
            if score > self.prefs.high_score {
                self.prefs.high_score = score;
                new_high_score = true;
                self.store.save(&self.prefs).await?;
                tracing::info!(high_score = score, "new high score saved");
            }
        }

        Ok(GuessReport {
            outcome,
            new_high_score,
        })
    }

    pub fn request_hint(&self) -> Option<HintPrompt> {
        match &self.phase {
            Phase::Playing(round) => round.request_hint(),
            _ => None,
        }
    }

    pub fn confirm_hint(&mut self) -> Option<HintRange> {
        match &mut self.phase {
            Phase::Playing(round) => round.confirm_hint(),
            _ => None,
        }
    }

    /// Cycles the gender preference, persists it, then starts a fresh
    /// round with the new filter. The persist failure path returns before
    /// any fetch so the caller can surface it.
    pub async fn switch_gender(&mut self) -> Result<Gender> {
        self.prefs.gender = self.prefs.gender.next();
        let gender = self.prefs.gender;
        self.store.save(&self.prefs).await?;
        self.start_round().await;
        Ok(gender)
    }

    /// Sets the high score back to 0 and persists it. The round in
    /// progress is untouched.
    pub async fn reset_high_score(&mut self) -> Result<()> {
        self.prefs.high_score = 0;
        self.store.save(&self.prefs).await?;
        tracing::info!("high score reset");
        Ok(())
    }

    /// New round with the unchanged gender preference. Also serves as the
    /// retry action out of `Phase::Failed`.
    pub async fn replay(&mut self) {
        self.start_round().await;
    }

    /// Presentational only; never touches scoring state.
    pub fn toggle_display(&mut self) {
        self.display = self.display.toggle();
    }
}
