//! Scheduling driver: the single task that owns the controller.
//!
//! The loop multiplexes four event sources with `tokio::select!`:
//!
//! - the frame interval, which calls [`GameController::tick`]
//! - the autosave interval, which persists a save record
//! - stdin lines, parsed as [`Command`]s
//! - the shutdown signal (Ctrl-C in the binary)
//!
//! Because one task owns the controller, a save can never interleave
//! with an `advance`. Every exit path performs a final save.

use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;

use idlepet_core::{DriverConfig, GameController, StateStore};
use idlepet_types::{Need, Snapshot};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::command::{Command, ParseCommandError, USAGE};
use crate::error::EngineError;

/// Why the driver loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player typed `quit`.
    Quit,
    /// Stdin reached end of file.
    EndOfInput,
    /// The shutdown signal fired.
    Interrupted,
}

/// Owns the controller and its store for the lifetime of a session.
pub struct Driver<S> {
    controller: GameController,
    store: S,
    config: DriverConfig,
}

impl<S: StateStore> Driver<S> {
    /// Wrap a restored controller and the store it saves to.
    pub const fn new(controller: GameController, store: S, config: DriverConfig) -> Self {
        Self {
            controller,
            store,
            config,
        }
    }

    /// The controller being driven.
    pub const fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Run until quit, end of input, or `shutdown` resolves, then save.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Terminal`] if reading `input` or writing
    /// `out` fails. The final save still happens.
    pub async fn run<R, W, F>(
        mut self,
        input: R,
        mut out: W,
        shutdown: F,
    ) -> Result<ExitReason, EngineError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        F: Future<Output = ()>,
    {
        let result = self.pump(input, &mut out, shutdown).await;
        self.save("shutdown");
        result
    }

    async fn pump<R, W, F>(&mut self, input: R, out: &mut W, shutdown: F) -> Result<ExitReason, EngineError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        F: Future<Output = ()>,
    {
        let mut lines = input.lines();

        let mut frames = interval(period(self.config.tick_interval_ms));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut autosave = interval(period(self.config.autosave_interval_ms));
        autosave.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval fires immediately; push it out a period.
        autosave.reset();

        tokio::pin!(shutdown);

        info!(
            tick_interval_ms = self.config.tick_interval_ms,
            autosave_interval_ms = self.config.autosave_interval_ms,
            pet = %self.controller.state().pet_name,
            "Driver loop starting"
        );

        loop {
            tokio::select! {
                _ = frames.tick() => self.controller.tick(),
                _ = autosave.tick() => self.save("autosave"),
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        return Ok(ExitReason::EndOfInput);
                    };
                    match line.parse::<Command>() {
                        Ok(command) => {
                            if self.handle(&command, out)?.is_break() {
                                return Ok(ExitReason::Quit);
                            }
                        }
                        Err(ParseCommandError::Empty) => {}
                        Err(e) => {
                            debug!(error = %e, "Unparseable command");
                            writeln!(out, "{e}\n{USAGE}")?;
                        }
                    }
                }
                () = &mut shutdown => return Ok(ExitReason::Interrupted),
            }
        }
    }

    /// Execute one command against the controller.
    ///
    /// Returns [`ControlFlow::Break`] for `quit`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to `out` fails.
    pub fn handle<W: Write>(&mut self, command: &Command, out: &mut W) -> std::io::Result<ControlFlow<()>> {
        match command {
            Command::Tap => self.controller.tap(),
            Command::Act(action) => self.controller.act(*action),
            Command::Buy(id) => {
                let before = self.controller.state().owned(id);
                self.controller.buy(id);
                if self.controller.state().owned(id) == before {
                    writeln!(out, "cannot buy {id}")?;
                }
            }
            Command::Rename(name) => self.controller.rename(name),
            Command::Reset => self.controller.reset(),
            Command::Save => {
                self.save("command");
                writeln!(out, "saved")?;
            }
            Command::Status => write_status(out, &self.controller.snapshot())?,
            Command::Shop => write_shop(out, &self.controller.snapshot())?,
            Command::Help => writeln!(out, "{USAGE}")?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn save(&mut self, reason: &'static str) {
        self.controller.save_to(&self.store);
        info!(
            reason,
            coins = self.controller.state().coins,
            level = self.controller.state().level,
            "Game saved"
        );
    }
}

/// A non-zero interval period. `tokio::time::interval` rejects zero.
const fn period(ms: u64) -> Duration {
    Duration::from_millis(if ms == 0 { 1 } else { ms })
}

fn write_status<W: Write>(out: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
    writeln!(
        out,
        "{} (level {}) | coins {} | +{:.1}/s | {} per tap | played {}s",
        snapshot.pet_name,
        snapshot.level,
        snapshot.coins,
        snapshot.passive,
        snapshot.click_power,
        snapshot.time_played_ms / 1000,
    )?;
    let needs: Vec<String> = Need::ALL
        .iter()
        .map(|need| format!("{} {:.2}", need.label(), snapshot.needs.get(*need)))
        .collect();
    writeln!(out, "{}", needs.join(" | "))
}

fn write_shop<W: Write>(out: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
    for entry in &snapshot.shop {
        writeln!(
            out,
            "{:<10} {:<22} {:>6} coins  owned {:>3}  {}",
            entry.id, entry.name, entry.price, entry.owned, entry.description
        )?;
    }
    Ok(())
}
