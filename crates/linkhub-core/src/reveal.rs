use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDecision {
    /// First qualifying intersection: apply the effect and stop observing.
    Reveal,
    Ignore,
}

/// Tracks one-shot viewport effects per observed element.
///
/// Observers can deliver several entries for the same target in a single
/// batch (or after `unobserve` raced a pending callback); the tracker makes
/// the effect fire at most once per key regardless.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    observed: BTreeSet<u32>,
    revealed: BTreeSet<u32>,
}

impl RevealTracker {
    pub fn register(&mut self, key: u32) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.observed.insert(key)
    }

    pub fn on_entry(&mut self, key: u32, is_intersecting: bool) -> RevealDecision {
        if !is_intersecting || !self.observed.contains(&key) {
            return RevealDecision::Ignore;
        }
        self.observed.remove(&key);
        self.revealed.insert(key);
        RevealDecision::Reveal
    }

    pub fn is_revealed(&self, key: u32) -> bool {
        self.revealed.contains(&key)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_then_ignores() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.register(7));
        assert_eq!(tracker.on_entry(7, true), RevealDecision::Reveal);
        assert_eq!(tracker.on_entry(7, true), RevealDecision::Ignore);
        assert!(tracker.is_revealed(7));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn non_intersecting_entries_keep_observing() {
        let mut tracker = RevealTracker::default();
        tracker.register(1);
        assert_eq!(tracker.on_entry(1, false), RevealDecision::Ignore);
        assert_eq!(tracker.pending(), 1);
        assert_eq!(tracker.on_entry(1, true), RevealDecision::Reveal);
    }

    #[test]
    fn unknown_and_re_registered_keys_are_ignored() {
        let mut tracker = RevealTracker::default();
        assert_eq!(tracker.on_entry(3, true), RevealDecision::Ignore);

        tracker.register(3);
        assert_eq!(tracker.on_entry(3, true), RevealDecision::Reveal);
        assert!(!tracker.register(3));
        assert_eq!(tracker.on_entry(3, true), RevealDecision::Ignore);
        assert_eq!(tracker.revealed_count(), 1);
    }
}
