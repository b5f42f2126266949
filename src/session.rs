use std::time::Duration;

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::{error, info};

use crate::keymap::{Action, KeyMap};
use crate::notifier::{Notifier, NotifyError, EYE_BREAK};
use crate::runtime::AppEvent;
use crate::timer::{Timer, TICK_INTERVAL};

/// Length of a focus session before the eye-break reminder fires.
pub const SESSION_LENGTH: Duration = Duration::from_secs(20 * 60);

/// How long the user is asked to look away after each reminder.
pub const BREAK_LENGTH: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub session_length: Duration,
    pub break_length: Duration,
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_length: SESSION_LENGTH,
            break_length: BREAK_LENGTH,
            tick_interval: TICK_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Quitting,
}

/// What the event loop should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The 20-20-20 state machine: owns the stopwatch and fires a reminder at
/// every session boundary.
#[derive(Debug)]
pub struct Session<N: Notifier> {
    config: SessionConfig,
    timer: Timer,
    keymap: KeyMap,
    notifier: N,
    quitting: bool,
    breaks_taken: u32,
    // display only: neither feeds back into the stopwatch
    total_running: Duration,
    break_remaining: Option<Duration>,
}

impl<N: Notifier> Session<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_config(SessionConfig::default(), notifier)
    }

    pub fn with_config(config: SessionConfig, notifier: N) -> Self {
        Self {
            config,
            timer: Timer::new(config.tick_interval),
            keymap: KeyMap::default(),
            notifier,
            quitting: false,
            breaks_taken: 0,
            total_running: Duration::ZERO,
            break_remaining: None,
        }
    }

    /// Feed one event from the loop. Once quitting, every event is ignored.
    pub fn handle(&mut self, event: &AppEvent) -> Result<Flow, NotifyError> {
        if self.quitting {
            return Ok(Flow::Quit);
        }

        match event {
            AppEvent::Key(key) => Ok(self.on_key(key)),
            AppEvent::Tick => {
                self.on_tick()?;
                Ok(Flow::Continue)
            }
            AppEvent::Resize => Ok(Flow::Continue),
        }
    }

    pub fn on_key(&mut self, key: &KeyEvent) -> Flow {
        if self.quitting {
            return Flow::Quit;
        }
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        match self.keymap.action_for(key) {
            Some(Action::Quit) => {
                self.quit();
                Flow::Quit
            }
            Some(Action::Reset) => {
                self.reset();
                Flow::Continue
            }
            Some(Action::Toggle) => {
                self.toggle();
                Flow::Continue
            }
            None => Flow::Continue,
        }
    }

    /// Advance the stopwatch and fire the reminder once a boundary is crossed.
    pub fn on_tick(&mut self) -> Result<(), NotifyError> {
        if self.quitting || !self.timer.is_running() {
            return Ok(());
        }

        self.timer.on_tick();
        self.total_running += self.timer.interval();
        self.break_remaining = self
            .break_remaining
            .map(|left| left.saturating_sub(self.timer.interval()))
            .filter(|left| !left.is_zero());

        if self.timer.elapsed() >= self.config.session_length {
            if let Err(err) = self.notifier.notify(&EYE_BREAK) {
                error!(%err, "failed to send break reminder");
                return Err(err);
            }
            self.timer.reset();
            self.breaks_taken += 1;
            self.break_remaining = Some(self.config.break_length).filter(|b| !b.is_zero());
            info!(breaks_taken = self.breaks_taken, "break reminder sent");
        }

        Ok(())
    }

    pub fn toggle(&mut self) {
        self.timer.toggle();
        info!(running = self.timer.is_running(), "stopwatch toggled");
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        info!("stopwatch reset");
    }

    pub fn quit(&mut self) {
        self.quitting = true;
        self.keymap.set_all_enabled(false);
        info!(elapsed_secs = self.timer.elapsed().as_secs(), "quitting");
    }

    pub fn state(&self) -> SessionState {
        if self.quitting {
            SessionState::Quitting
        } else if self.timer.is_running() {
            SessionState::Running
        } else {
            SessionState::Idle
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn breaks_taken(&self) -> u32 {
        self.breaks_taken
    }

    /// Running time since launch. Survives boundaries and manual resets.
    pub fn total_running(&self) -> Duration {
        self.total_running
    }

    /// Countdown of the look-away break that follows a reminder, if one is on.
    pub fn break_remaining(&self) -> Option<Duration> {
        self.break_remaining
    }

    /// Whole minutes left before the next reminder, rounded up.
    pub fn minutes_until_break(&self) -> u64 {
        let session_minutes = self.config.session_length.as_secs() / 60;
        let elapsed_minutes = self.timer.elapsed().as_secs() / 60;
        session_minutes.saturating_sub(elapsed_minutes)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
