use pagefx_core::*;

#[derive(Default)]
struct RecordingHost {
    marked: Vec<&'static str>,
    unobserved: Vec<&'static str>,
}

impl RevealHost for RecordingHost {
    type Target = &'static str;

    fn mark_visible(&mut self, target: &&'static str) {
        self.marked.push(*target);
    }

    fn unobserve(&mut self, target: &&'static str) {
        self.unobserved.push(*target);
    }
}

#[test]
fn reveals_pending_element_exactly_once() {
    let mut ledger = RevealLedger::new();
    ledger.observe(0);
    ledger.observe(1);
    assert_eq!(ledger.on_intersection(0, true), RevealAction::Reveal);
    assert!(!ledger.is_pending(0));
    // later reports for the same element never re-trigger
    assert_eq!(ledger.on_intersection(0, true), RevealAction::Ignore);
    assert_eq!(ledger.on_intersection(0, false), RevealAction::Ignore);
    assert_eq!(ledger.revealed_count(), 1);
    assert_eq!(ledger.pending_count(), 1);
}

#[test]
fn reveal_marks_and_unobserves_once() {
    let mut ledger = RevealLedger::new();
    let mut host = RecordingHost::default();
    ledger.observe(0);
    ledger.observe(1);

    assert_eq!(ledger.apply(&mut host, 1, &"quote", true), RevealAction::Reveal);
    assert_eq!(ledger.apply(&mut host, 1, &"quote", true), RevealAction::Ignore);
    assert_eq!(host.marked, vec!["quote"]);
    assert_eq!(host.unobserved, vec!["quote"]);
    assert!(ledger.is_pending(0));
}

#[test]
fn non_intersecting_entries_leave_element_observed() {
    let mut ledger = RevealLedger::new();
    let mut host = RecordingHost::default();
    ledger.observe(0);
    assert_eq!(ledger.apply(&mut host, 0, &"hero", false), RevealAction::Ignore);
    assert!(ledger.is_pending(0));
    assert!(host.marked.is_empty());
    assert!(host.unobserved.is_empty());
}

#[test]
fn element_too_tall_to_reach_threshold_is_still_revealed() {
    // six viewports tall: the ratio tops out at 1/6, below the 0.2 threshold,
    // and the observer still reports it intersecting
    let mut ledger = RevealLedger::new();
    let mut host = RecordingHost::default();
    ledger.observe(0);
    let max_ratio = 1.0 / 6.0;
    assert!(max_ratio < REVEAL_THRESHOLD);
    assert_eq!(ledger.apply(&mut host, 0, &"process", true), RevealAction::Reveal);
    assert_eq!(host.marked, vec!["process"]);
}

#[test]
fn unobserved_index_is_ignored() {
    let mut ledger = RevealLedger::new();
    assert_eq!(ledger.on_intersection(42, true), RevealAction::Ignore);
    assert_eq!(ledger.revealed_count(), 0);
}
