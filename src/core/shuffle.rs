//! Bounded shuffle session behind the "Surprise me" button
//!
//! The session only counts steps; the page drives it from a timer task that
//! calls [`ShuffleSession::tick`] every [`SHUFFLE_INTERVAL_MS`] until it
//! reports [`ShuffleTick::Finished`].

use rand::Rng;

use super::ideas::random_idea;

/// Number of draft replacements per shuffle
pub const SHUFFLE_STEPS: u32 = 6;

/// Delay between two shuffle steps
pub const SHUFFLE_INTERVAL_MS: u32 = 80;

/// Delay between the last step and the capture surface opening
pub const CAPTURE_OPEN_DELAY_MS: u32 = 300;

/// Result of advancing a shuffle session by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleTick {
    /// Draft replaced, more steps follow
    Step(&'static str),
    /// Draft replaced with the final pick; the session is over
    Finished(&'static str),
    /// Session was not running, nothing changed
    Idle,
}

impl ShuffleTick {
    /// The idea picked on this tick, if any
    pub fn idea(&self) -> Option<&'static str> {
        match self {
            ShuffleTick::Step(idea) | ShuffleTick::Finished(idea) => Some(idea),
            ShuffleTick::Idle => None,
        }
    }

    /// Whether the timer driving the session should stop
    pub fn is_done(&self) -> bool {
        !matches!(self, ShuffleTick::Step(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShuffleSession {
    active: bool,
    steps_remaining: u32,
}

impl ShuffleSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn steps_remaining(&self) -> u32 {
        self.steps_remaining
    }

    /// Start a session. Returns `false` without touching the running
    /// session if one is already active.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.steps_remaining = SHUFFLE_STEPS;
        true
    }

    /// Advance by one step, drawing the next idea from `rng`
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ShuffleTick {
        if !self.active || self.steps_remaining == 0 {
            self.active = false;
            return ShuffleTick::Idle;
        }

        let idea = random_idea(rng);
        self.steps_remaining -= 1;

        if self.steps_remaining == 0 {
            self.active = false;
            ShuffleTick::Finished(idea)
        } else {
            ShuffleTick::Step(idea)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ideas::is_candidate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_session_is_idle() {
        let session = ShuffleSession::new();
        assert!(!session.is_active());
        assert_eq!(session.steps_remaining(), 0);
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = ShuffleSession::new();

        assert!(session.start());
        session.tick(&mut rng);
        let remaining = session.steps_remaining();

        assert!(!session.start());
        assert_eq!(session.steps_remaining(), remaining);
    }

    #[test]
    fn test_session_runs_exact_step_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = ShuffleSession::new();
        session.start();

        let mut picks = Vec::new();
        loop {
            let tick = session.tick(&mut rng);
            picks.extend(tick.idea());
            if tick.is_done() {
                assert!(matches!(tick, ShuffleTick::Finished(_)));
                break;
            }
        }

        assert_eq!(picks.len(), SHUFFLE_STEPS as usize);
        assert!(picks.iter().all(|idea| is_candidate(idea)));
        assert!(!session.is_active());
    }

    #[test]
    fn test_steps_strictly_decrease() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = ShuffleSession::new();
        session.start();

        let mut previous = session.steps_remaining();
        while session.is_active() {
            session.tick(&mut rng);
            assert!(session.steps_remaining() < previous);
            previous = session.steps_remaining();
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_tick_after_finish_is_idle() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = ShuffleSession::new();
        session.start();
        for _ in 0..SHUFFLE_STEPS {
            session.tick(&mut rng);
        }

        assert_eq!(session.tick(&mut rng), ShuffleTick::Idle);
        assert!(ShuffleTick::Idle.is_done());
    }

    #[test]
    fn test_can_restart_after_finish() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = ShuffleSession::new();
        session.start();
        for _ in 0..SHUFFLE_STEPS {
            session.tick(&mut rng);
        }

        assert!(session.start());
        assert_eq!(session.steps_remaining(), SHUFFLE_STEPS);
    }
}
