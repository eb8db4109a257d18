use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::Result;
use log::{error, info, warn};

use crate::config::GameConfig;
use crate::input::{is_ctrl_c, InputCapture};
use crate::render;
use crate::stage::{Stage, StepResult};
use crate::store::ScoreStore;
use crate::term::{ConfirmChoice, TermManager};

// Keys are drained far more often than the game steps, so a press
// landing between ticks is never lost.
const POLL_INTERVAL_MS: u64 = 5;

pub struct SnakeGame {
    config: GameConfig,
    term: TermManager,
    store: Box<dyn ScoreStore>,
}

impl SnakeGame {
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Result<Self> {
        config.validate();
        Ok(SnakeGame { config, term: TermManager::new()?, store })
    }

    pub fn run(&mut self) -> Result<()> {
        let required = render::required_size(self.config.grid_cols(), self.config.grid_rows());
        let available = self.term.size();
        if available.0 < required.0 || available.1 < required.1 {
            panic!(
                "Terminal is too small: the board needs {}x{} character cells",
                required.0, required.1
            );
        }

        self.term.setup()?;
        let outcome = self.play();
        self.term.restore()?;
        outcome
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self) -> Result<()> {
        if !self.show_intro()? {
            return Ok(());
        }

        let mut stage = Stage::new(self.config);
        stage.set_highest_score(initial_highest_score(self.store.as_mut()));

        let mut input = InputCapture::new();
        let tick = Duration::from_millis(self.config.tick_millis);
        let mut last_tick = Instant::now();

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for ev in self.term.read_key_events_queue()? {
                if is_ctrl_c(&ev) {
                    return Ok(());
                }
                input.record(&ev);
            }

            if last_tick.elapsed() < tick {
                continue;
            }
            last_tick = Instant::now();

            // The timer keeps firing after a declined restart; the
            // over-flag turns those ticks into no-ops.
            if stage.is_over() {
                continue;
            }

            let result = stage.step(input.last_direction());
            render::draw(&mut self.term, &stage)?;

            if result == StepResult::GameOver {
                if !self.finish_run(&mut stage, &mut input)? {
                    return Ok(());
                }
                last_tick = Instant::now();
            }
        }
    }

    // The write settles before the read, and both before the prompt.
    // Returns false when the player quits outright.
    fn finish_run(&mut self, stage: &mut Stage, input: &mut InputCapture) -> Result<bool> {
        info!("run over with score {}", stage.score());
        persist_and_refresh(self.store.as_mut(), stage);

        let choice = self.term.confirm(&[
            &*format!("Game over! Your score: {}", stage.score()),
            "",
            "Press Y to restart, N to stay,",
            "or CTRL+C to quit.",
        ])?;

        match choice {
            ConfirmChoice::Yes => {
                stage.restart();
                input.reset();
                Ok(true)
            }
            ConfirmChoice::No => Ok(true),
            ConfirmChoice::Quit => Ok(false),
        }
    }

    fn show_intro(&mut self) -> Result<bool> {
        self.term.clear()?;
        self.term.show_message(&[
            "Arrow keys or WASD to steer",
            "CTRL+C to quit",
            "",
            "Press any key to begin",
        ])?;

        let key = self.term.read_key_blocking()?;
        Ok(!is_ctrl_c(&key))
    }
}

/// Startup must not depend on the score server being reachable.
pub fn initial_highest_score(store: &mut dyn ScoreStore) -> u64 {
    match store.read_highest_score() {
        Ok(value) => value,
        Err(err) => {
            error!("could not fetch the highest score, starting from 0: {}", err);
            0
        }
    }
}

/// Writes the finished run's score out, then reads the highest score
/// back. The write is fire-and-forget; a failed read keeps the last
/// known value.
pub fn persist_and_refresh(store: &mut dyn ScoreStore, stage: &mut Stage) {
    let _ = store.write_highest_score(stage.score());

    match store.read_highest_score() {
        Ok(value) => stage.set_highest_score(value),
        Err(err) => warn!(
            "could not refresh the highest score, keeping {}: {}",
            stage.highest_score(),
            err
        ),
    }
}
