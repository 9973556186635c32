//! Discovery deck position

use spice_core::Profile;

/// Position in the discovery deck.
///
/// The deck itself is the immutable seed list; only the cursor moves.
/// There is no swipe history: the cursor starts at the top and is gone
/// with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeState {
    cursor: usize,
}

impl SwipeState {
    /// The card currently on top, if any remain
    pub fn top<'a>(&self, profiles: &'a [Profile]) -> Option<&'a Profile> {
        profiles.get(self.cursor)
    }

    /// Move past the top card (both like and pass advance)
    pub fn advance(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    /// Cards left in the deck, including the top one
    pub fn remaining(&self, deck_len: usize) -> usize {
        deck_len.saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self, deck_len: usize) -> bool {
        self.cursor >= deck_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spice_core::seed_profiles;

    #[test]
    fn test_top_starts_at_first_profile() {
        let profiles = seed_profiles();
        let swipe = SwipeState::default();
        assert_eq!(swipe.top(&profiles).unwrap().id, "1");
    }

    #[test]
    fn test_advance_walks_the_deck() {
        let profiles = seed_profiles();
        let mut swipe = SwipeState::default();
        swipe.advance();
        assert_eq!(swipe.top(&profiles).unwrap().id, "2");
        swipe.advance();
        assert_eq!(swipe.top(&profiles).unwrap().id, "3");
        swipe.advance();
        assert!(swipe.top(&profiles).is_none());
        assert!(swipe.is_exhausted(profiles.len()));
    }

    #[test]
    fn test_remaining_counts_down() {
        let profiles = seed_profiles();
        let mut swipe = SwipeState::default();
        assert_eq!(swipe.remaining(profiles.len()), 3);
        swipe.advance();
        assert_eq!(swipe.remaining(profiles.len()), 2);
    }

    #[test]
    fn test_advance_past_end_is_safe() {
        let profiles = seed_profiles();
        let mut swipe = SwipeState::default();
        for _ in 0..10 {
            swipe.advance();
        }
        assert!(swipe.top(&profiles).is_none());
        assert_eq!(swipe.remaining(profiles.len()), 0);
    }
}
