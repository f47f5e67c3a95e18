//! State record of the landing page
//!
//! `LandingView` owns everything the page mutates: the idea draft, the email
//! typed into the capture modal, whether the modal is open, the shuffle
//! session and the waitlist attempt. The UI keeps one of these in a signal
//! and only calls the transition methods below; timers and network requests
//! live in the UI and report back through [`LandingView::shuffle_tick`] and
//! [`LandingView::finish_submit`].

use rand::Rng;

use super::shuffle::{ShuffleSession, ShuffleTick};
use super::waitlist::{SubmissionError, SubmitRejected, WaitlistSignup, WaitlistStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingView {
    idea: String,
    email: String,
    capture_open: bool,
    shuffle: ShuffleSession,
    /// Last shuffle step ran; the capture surface opens on `complete_shuffle`
    capture_pending: bool,
    status: WaitlistStatus,
    /// Signup captured by the attempt in flight or last completed
    attempt: Option<WaitlistSignup>,
}

impl LandingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_capture_open(&self) -> bool {
        self.capture_open
    }

    /// True from `start_shuffle` until `complete_shuffle`, including the
    /// delay between the last step and the capture surface opening
    pub fn is_shuffling(&self) -> bool {
        self.shuffle.is_active() || self.capture_pending
    }

    pub fn status(&self) -> &WaitlistStatus {
        &self.status
    }

    pub fn attempt(&self) -> Option<&WaitlistSignup> {
        self.attempt.as_ref()
    }

    /// Whether the Generate action would do anything
    pub fn can_generate(&self) -> bool {
        !self.idea.is_empty()
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty()
            && !self.status.is_submitting()
            && !self.status.is_succeeded()
    }

    /// Direct edit of the idea draft. Ignored while a shuffle owns the input.
    pub fn set_idea(&mut self, idea: impl Into<String>) {
        if !self.shuffle.is_active() {
            self.idea = idea.into();
        }
    }

    /// Edit of the email field. Ignored while a submission is in flight.
    pub fn set_email(&mut self, email: impl Into<String>) {
        if !self.status.is_submitting() {
            self.email = email.into();
        }
    }

    /// Open the capture surface for a non-empty draft, leaving the draft as is
    pub fn generate(&mut self) -> bool {
        if !self.can_generate() {
            return false;
        }
        self.open_capture();
        true
    }

    /// Open the capture surface.
    ///
    /// Reopening after a finished attempt starts a fresh one; an attempt still
    /// in flight is kept.
    pub fn open_capture(&mut self) {
        if !self.capture_open && !self.status.is_submitting() {
            self.status = WaitlistStatus::Idle;
        }
        self.capture_open = true;
    }

    pub fn close_capture(&mut self) {
        self.capture_open = false;
    }

    /// Begin a shuffle. Returns `false` if one is already running or its
    /// capture surface has not opened yet.
    pub fn start_shuffle(&mut self) -> bool {
        if self.capture_pending {
            return false;
        }
        self.shuffle.start()
    }

    /// Advance the running shuffle, writing the pick into the draft
    pub fn shuffle_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ShuffleTick {
        let tick = self.shuffle.tick(rng);
        if let Some(idea) = tick.idea() {
            self.idea = idea.to_string();
        }
        if let ShuffleTick::Finished(_) = tick {
            self.capture_pending = true;
        }
        tick
    }

    /// End a finished shuffle by opening the capture surface.
    ///
    /// Returns `false` and changes nothing unless a shuffle has finished and
    /// is waiting for this call.
    pub fn complete_shuffle(&mut self) -> bool {
        if !self.capture_pending {
            return false;
        }
        self.capture_pending = false;
        self.open_capture();
        true
    }

    /// Validate and move to `Submitting`.
    ///
    /// On success the returned signup is the payload to send; it is also kept
    /// as the idea snapshot shown on confirmation.
    pub fn begin_submit(&mut self) -> Result<WaitlistSignup, SubmitRejected> {
        match self.status {
            WaitlistStatus::Submitting => return Err(SubmitRejected::InFlight),
            WaitlistStatus::Succeeded { .. } => return Err(SubmitRejected::AlreadyJoined),
            WaitlistStatus::Idle | WaitlistStatus::Failed(_) => {}
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(SubmitRejected::EmptyEmail);
        }

        let signup = WaitlistSignup::new(email, self.idea.clone());
        self.attempt = Some(signup.clone());
        self.status = WaitlistStatus::Submitting;
        Ok(signup)
    }

    /// Record the store's answer for the attempt in flight.
    ///
    /// Returns `true` when the signup succeeded, which is the cue to emit the
    /// `waitlist_signup` event. Answers arriving when nothing is in flight are
    /// ignored.
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) -> bool {
        if !self.status.is_submitting() {
            return false;
        }

        match result {
            Ok(()) => {
                let idea = self
                    .attempt
                    .as_ref()
                    .map(|signup| signup.idea.clone())
                    .unwrap_or_default();
                self.status = WaitlistStatus::Succeeded { idea };
                true
            }
            Err(err) => {
                self.status = WaitlistStatus::Failed(err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shuffle::SHUFFLE_STEPS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn view_with(idea: &str, email: &str) -> LandingView {
        let mut view = LandingView::new();
        view.set_idea(idea);
        view.set_email(email);
        view
    }

    #[test]
    fn test_new_view() {
        let view = LandingView::new();
        assert!(view.idea().is_empty());
        assert!(!view.is_capture_open());
        assert!(!view.is_shuffling());
        assert_eq!(view.status(), &WaitlistStatus::Idle);
        assert!(!view.can_generate());
        assert!(!view.can_submit());
    }

    #[test]
    fn test_generate_empty_is_noop() {
        let mut view = LandingView::new();
        assert!(!view.generate());
        assert!(!view.is_capture_open());
    }

    #[test]
    fn test_generate_opens_without_touching_draft() {
        let mut view = view_with("A pet wellness tracker", "");
        assert!(view.generate());
        assert!(view.is_capture_open());
        assert_eq!(view.idea(), "A pet wellness tracker");
    }

    #[test]
    fn test_generate_accepts_whitespace_draft() {
        let mut view = view_with(" ", "");
        assert!(view.generate());
    }

    #[test]
    fn test_edits_ignored_while_shuffling() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut view = view_with("mine", "");
        view.start_shuffle();
        view.shuffle_tick(&mut rng);
        let shuffled = view.idea().to_string();

        view.set_idea("typed during shuffle");
        assert_eq!(view.idea(), shuffled);

        while !view.shuffle_tick(&mut rng).is_done() {}
        let last = view.idea().to_string();
        view.set_idea("typed before the modal opens");
        assert_eq!(view.idea(), last);

        assert!(view.complete_shuffle());
        view.set_idea("typed after");
        assert_eq!(view.idea(), "typed after");
    }

    #[test]
    fn test_shuffle_tick_counts() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut view = LandingView::new();
        assert!(view.start_shuffle());
        assert!(!view.start_shuffle());

        let mut mutations = 0;
        loop {
            let before = view.idea().to_string();
            let tick = view.shuffle_tick(&mut rng);
            if tick.idea().is_some() {
                mutations += 1;
            } else {
                assert_eq!(view.idea(), before);
            }
            if tick.is_done() {
                break;
            }
        }
        assert_eq!(mutations, SHUFFLE_STEPS);
    }

    #[test]
    fn test_finished_shuffle_opens_capture_on_complete() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut view = LandingView::new();
        view.start_shuffle();
        while !view.shuffle_tick(&mut rng).is_done() {}

        assert!(!view.is_capture_open());
        assert!(view.is_shuffling());

        assert!(view.complete_shuffle());
        assert!(view.is_capture_open());
        assert!(!view.is_shuffling());
        assert!(!view.complete_shuffle());
    }

    #[test]
    fn test_no_restart_before_capture_opens() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut view = LandingView::new();
        view.start_shuffle();
        while !view.shuffle_tick(&mut rng).is_done() {}
        let last = view.idea().to_string();

        assert!(!view.start_shuffle());
        assert_eq!(view.shuffle_tick(&mut rng), ShuffleTick::Idle);
        assert_eq!(view.idea(), last);

        view.complete_shuffle();
        assert!(view.start_shuffle());
    }

    #[test]
    fn test_complete_without_shuffle_is_noop() {
        let mut view = view_with("idea", "");
        assert!(!view.complete_shuffle());
        assert!(!view.is_capture_open());

        view.start_shuffle();
        assert!(!view.complete_shuffle());
        assert!(!view.is_capture_open());
    }

    #[test]
    fn test_submit_empty_email_rejected() {
        let mut view = view_with("idea", "   ");
        assert_eq!(view.begin_submit(), Err(SubmitRejected::EmptyEmail));
        assert_eq!(view.status(), &WaitlistStatus::Idle);
        assert!(view.attempt().is_none());
    }

    #[test]
    fn test_submit_in_flight_rejected() {
        let mut view = view_with("idea", "a@b.com");
        assert!(view.begin_submit().is_ok());
        assert_eq!(view.begin_submit(), Err(SubmitRejected::InFlight));
        assert!(!view.can_submit());
    }

    #[test]
    fn test_submit_trims_email() {
        let mut view = view_with("idea", "  a@b.com ");
        let signup = view.begin_submit().unwrap();
        assert_eq!(signup, WaitlistSignup::new("a@b.com", "idea"));
    }

    #[test]
    fn test_email_locked_while_submitting() {
        let mut view = view_with("idea", "a@b.com");
        view.begin_submit().unwrap();
        view.set_email("other@b.com");
        assert_eq!(view.email(), "a@b.com");
    }

    #[test]
    fn test_failure_then_retry() {
        let mut view = view_with("idea", "a@b.com");
        view.begin_submit().unwrap();
        assert!(!view.finish_submit(Err(SubmissionError::SubmissionFailed(
            "HTTP 500".to_string()
        ))));
        assert_eq!(
            view.status().error_message(),
            Some("Something went wrong. Please try again.")
        );
        assert_eq!(view.email(), "a@b.com");
        assert_eq!(view.idea(), "idea");

        assert!(view.begin_submit().is_ok());
        assert!(view.finish_submit(Ok(())));
        assert!(view.status().is_succeeded());
    }

    #[test]
    fn test_success_is_terminal() {
        let mut view = view_with("idea", "a@b.com");
        view.begin_submit().unwrap();
        view.finish_submit(Ok(()));

        assert_eq!(view.begin_submit(), Err(SubmitRejected::AlreadyJoined));
        assert!(!view.finish_submit(Err(SubmissionError::DuplicateEmail)));
        assert!(view.status().is_succeeded());
    }

    #[test]
    fn test_stray_answer_ignored() {
        let mut view = view_with("idea", "a@b.com");
        assert!(!view.finish_submit(Ok(())));
        assert_eq!(view.status(), &WaitlistStatus::Idle);
    }

    #[test]
    fn test_reopen_resets_finished_attempt() {
        let mut view = view_with("idea", "a@b.com");
        view.generate();
        view.begin_submit().unwrap();
        view.finish_submit(Err(SubmissionError::DuplicateEmail));

        view.close_capture();
        view.open_capture();

        assert_eq!(view.status(), &WaitlistStatus::Idle);
        assert_eq!(view.email(), "a@b.com");
    }

    #[test]
    fn test_reopen_keeps_attempt_in_flight() {
        let mut view = view_with("idea", "a@b.com");
        view.generate();
        view.begin_submit().unwrap();

        view.close_capture();
        view.open_capture();
        assert!(view.status().is_submitting());

        assert!(view.finish_submit(Ok(())));
    }

    #[test]
    fn test_open_while_open_keeps_status() {
        let mut view = view_with("idea", "a@b.com");
        view.generate();
        view.begin_submit().unwrap();
        view.finish_submit(Err(SubmissionError::DuplicateEmail));

        view.generate();
        assert!(matches!(view.status(), WaitlistStatus::Failed(_)));
    }
}
