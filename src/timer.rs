use std::time::Duration;

/// Default interval at which the stopwatch advances.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Stopwatch that accumulates a fixed interval per tick while running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl Timer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Clears elapsed time without touching the running state.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn on_tick(&mut self) {
        if self.running {
            self.elapsed += self.interval;
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_stopped_at_zero() {
        let timer = Timer::default();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.interval(), TICK_INTERVAL);
    }

    #[test]
    fn ticks_are_ignored_while_stopped() {
        let mut timer = Timer::default();
        for _ in 0..10 {
            timer.on_tick();
        }
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn elapsed_is_ticks_times_interval() {
        let mut timer = Timer::new(Duration::from_millis(250));
        timer.start();
        for _ in 0..7 {
            timer.on_tick();
        }
        assert_eq!(timer.elapsed(), Duration::from_millis(1750));
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut timer = Timer::default();
        timer.start();
        timer.start();
        assert!(timer.is_running());
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
    }

    #[test]
    fn toggle_twice_restores_state_and_keeps_elapsed() {
        let mut timer = Timer::default();
        timer.start();
        timer.on_tick();
        timer.stop();

        timer.toggle();
        assert!(timer.is_running());
        timer.toggle();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn reset_zeroes_elapsed_but_keeps_running() {
        let mut timer = Timer::default();
        timer.start();
        for _ in 0..42 {
            timer.on_tick();
        }
        timer.reset();
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert!(timer.is_running());

        timer.on_tick();
        assert_eq!(timer.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn reset_while_stopped() {
        let mut timer = Timer::default();
        timer.start();
        timer.on_tick();
        timer.stop();
        timer.reset();
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert!(!timer.is_running());
    }
}
