//! Bookkeeping for reveal-on-view.
//!
//! Elements are registered by index when they start being observed. The
//! observer itself is created with the reveal threshold, so any entry it
//! delivers as intersecting reveals a pending element. An element taller than
//! `1 / threshold` viewports never reaches the ratio but is still delivered
//! as intersecting at the highest ratio it can reach.

use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the marker class and stop observing.
    Reveal,
    Ignore,
}

/// DOM side of a reveal: marking an element and releasing its observation.
pub trait RevealHost {
    type Target;

    fn mark_visible(&mut self, target: &Self::Target);
    fn unobserve(&mut self, target: &Self::Target);
}

#[derive(Debug, Default)]
pub struct RevealLedger {
    pending: FnvHashSet<usize>,
    revealed: usize,
}

impl RevealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, index: usize) {
        self.pending.insert(index);
    }

    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> RevealAction {
        if is_intersecting && self.pending.remove(&index) {
            self.revealed += 1;
            RevealAction::Reveal
        } else {
            RevealAction::Ignore
        }
    }

    /// Record an observer entry and apply the reveal through `host`.
    pub fn apply<H: RevealHost>(
        &mut self,
        host: &mut H,
        index: usize,
        target: &H::Target,
        is_intersecting: bool,
    ) -> RevealAction {
        let action = self.on_intersection(index, is_intersecting);
        if action == RevealAction::Reveal {
            host.mark_visible(target);
            host.unobserve(target);
        }
        action
    }

    #[inline]
    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }
}
