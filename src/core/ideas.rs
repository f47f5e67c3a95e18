//! Idea suggestions offered by the "Surprise me" shuffle

use rand::Rng;

/// Candidate ideas the shuffler draws from
pub const IDEA_CANDIDATES: [&str; 16] = [
    "A pet wellness tracker",
    "AI meal planner for busy parents",
    "Marketplace for renting camping gear",
    "Subscription box for indie board games",
    "App that matches dog walkers with neighbors",
    "Smart plant watering reminder",
    "Language exchange for remote workers",
    "Budgeting app for freelancers",
    "On-demand bike repair service",
    "Personalized bedtime stories for kids",
    "Carbon footprint tracker for groceries",
    "Virtual interior design consultations",
    "Local farmers market delivery",
    "Micro-courses for learning to cook",
    "Shared workspace finder for travelers",
    "Habit tracker that pays you to stick with it",
];

/// Pick a uniformly random candidate. Repeats between calls are allowed.
pub fn random_idea<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    IDEA_CANDIDATES[rng.gen_range(0..IDEA_CANDIDATES.len())]
}

/// Check whether `text` is one of the shuffle candidates
pub fn is_candidate(text: &str) -> bool {
    IDEA_CANDIDATES.contains(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_candidates_are_distinct_and_non_empty() {
        let unique: HashSet<_> = IDEA_CANDIDATES.iter().collect();
        assert_eq!(unique.len(), IDEA_CANDIDATES.len());
        assert!(IDEA_CANDIDATES.iter().all(|idea| !idea.trim().is_empty()));
    }

    #[test]
    fn test_random_idea_is_candidate() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(is_candidate(random_idea(&mut rng)));
        }
    }

    #[test]
    fn test_random_idea_covers_list() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<_> = (0..2000).map(|_| random_idea(&mut rng)).collect();
        assert_eq!(seen.len(), IDEA_CANDIDATES.len());
    }

    #[test]
    fn test_is_candidate_rejects_free_text() {
        assert!(!is_candidate("my own idea"));
        assert!(!is_candidate(""));
    }
}
