//! Deterministic keyed timers over a simulated clock.
//!
//! Every scheduled effect is a cancellable task keyed by component/element
//! identity: scheduling a key that is already pending replaces it, so a
//! re-triggered component (rapid theme toggling, a re-shown toast) restarts
//! its window instead of racing an earlier timer of its own.

use std::collections::{BTreeMap, HashMap};

use crate::element::NodeId;

/// Identity of a scheduled effect: which component owns it, which element it
/// concerns, and which action fires.
///
/// Two timers on the same toast (`fade` then `remove`) coexist because their
/// actions differ; a second `fade` on the same toast replaces the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub owner: &'static str,
    pub node: Option<NodeId>,
    pub action: &'static str,
}

impl TimerKey {
    pub fn new(owner: &'static str, node: Option<NodeId>, action: &'static str) -> Self {
        Self { owner, node, action }
    }
}

/// Timer queue driven by an explicit clock.
///
/// `advance` moves simulated time forward and yields due keys in
/// (deadline, scheduling order). Nothing fires spontaneously; harnesses and
/// the demo own the clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: u64,
    seq: u64,
    queue: BTreeMap<(u64, u64), TimerKey>,
    index: HashMap<TimerKey, (u64, u64)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_scheduled(&self, key: &TimerKey) -> bool {
        self.index.contains_key(key)
    }

    /// Schedules `key` to fire `after_ms` from now, replacing any pending
    /// timer with the same key.
    pub fn schedule(&mut self, key: TimerKey, after_ms: u64) {
        self.cancel(&key);
        let slot = (self.now + after_ms, self.seq);
        self.seq += 1;
        self.index.insert(key.clone(), slot);
        self.queue.insert(slot, key);
    }

    pub fn cancel(&mut self, key: &TimerKey) {
        if let Some(slot) = self.index.remove(key) {
            self.queue.remove(&slot);
        }
    }

    /// Pops the earliest timer due at or before `target` and moves the clock
    /// to its deadline, so anything the caller schedules next anchors at the
    /// fired timer's logical time rather than the end of the window.
    pub fn pop_due(&mut self, target: u64) -> Option<TimerKey> {
        let (&slot, _) = self.queue.iter().next()?;
        if slot.0 > target {
            return None;
        }
        self.now = self.now.max(slot.0);
        let key = self.queue.remove(&slot)?;
        self.index.remove(&key);
        Some(key)
    }

    /// Moves the clock forward to `target` once every due timer has been
    /// popped. The clock never moves backward.
    pub fn settle(&mut self, target: u64) {
        self.now = self.now.max(target);
    }

    /// Advances the clock by `ms` and returns every timer that came due, in
    /// firing order. Callers that dispatch between firings (so handlers can
    /// schedule follow-ups mid-window) should drive [`pop_due`](Self::pop_due)
    /// and [`settle`](Self::settle) themselves instead.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerKey> {
        let target = self.now + ms;
        let mut due = Vec::new();
        while let Some(key) = self.pop_due(target) {
            due.push(key);
        }
        self.settle(target);
        due
    }
}

/// Coalesces a burst of triggers into a single keyed timer firing.
///
/// Available to any input-driven component. The search box deliberately does
/// not use it; every keystroke recomputes directly. Kept as a future hook
/// rather than wired in.
#[derive(Debug, Clone)]
pub struct Debouncer {
    key: TimerKey,
    wait_ms: u64,
}

impl Debouncer {
    pub fn new(key: TimerKey, wait_ms: u64) -> Self {
        Self { key, wait_ms }
    }

    pub fn key(&self) -> &TimerKey {
        &self.key
    }

    /// Restarts the wait window. The key fires once, `wait_ms` after the
    /// last trigger.
    pub fn trigger(&self, scheduler: &mut Scheduler) {
        scheduler.schedule(self.key.clone(), self.wait_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(action: &'static str) -> TimerKey {
        TimerKey::new("test", None, action)
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut s = Scheduler::new();
        s.schedule(key("late"), 500);
        s.schedule(key("early"), 100);
        assert_eq!(s.advance(600), vec![key("early"), key("late")]);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn rescheduling_replaces_the_pending_timer() {
        let mut s = Scheduler::new();
        s.schedule(key("reset"), 300);
        s.advance(200);
        s.schedule(key("reset"), 300);
        // The original deadline (t=300) must not fire.
        assert!(s.advance(150).is_empty());
        assert_eq!(s.advance(200), vec![key("reset")]);
    }

    #[test]
    fn cancel_removes_the_timer() {
        let mut s = Scheduler::new();
        s.schedule(key("fade"), 100);
        s.cancel(&key("fade"));
        assert!(s.advance(1000).is_empty());
    }

    #[test]
    fn same_deadline_fires_in_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule(key("a"), 100);
        s.schedule(key("b"), 100);
        assert_eq!(s.advance(100), vec![key("a"), key("b")]);
    }

    #[test]
    fn pop_due_anchors_follow_ups_at_the_fired_deadline() {
        let mut s = Scheduler::new();
        s.schedule(key("fade"), 3000);
        let target = s.now() + 10_000;
        assert_eq!(s.pop_due(target), Some(key("fade")));
        assert_eq!(s.now(), 3000);
        // A follow-up scheduled while handling the fade lands at 3300, not
        // 10_300, and still comes due within the same window.
        s.schedule(key("remove"), 300);
        assert_eq!(s.pop_due(target), Some(key("remove")));
        assert_eq!(s.now(), 3300);
        assert_eq!(s.pop_due(target), None);
        s.settle(target);
        assert_eq!(s.now(), 10_000);
    }

    #[test]
    fn debouncer_fires_once_per_burst() {
        let mut s = Scheduler::new();
        let d = Debouncer::new(key("search"), 250);
        d.trigger(&mut s);
        s.advance(100);
        d.trigger(&mut s);
        s.advance(100);
        d.trigger(&mut s);
        assert!(s.advance(249).is_empty());
        assert_eq!(s.advance(1), vec![key("search")]);
        assert!(s.advance(1000).is_empty());
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn chunked_advance_fires_the_same_timers(
            delays in prop::collection::vec(0u64..1500, 1..8),
            chunk in 1u64..400,
        ) {
            let mut one = Scheduler::new();
            let mut many = Scheduler::new();
            for (i, &after) in delays.iter().enumerate() {
                let k = TimerKey::new("prop", Some(NodeId(i as u64 + 1)), "fire");
                one.schedule(k.clone(), after);
                many.schedule(k, after);
            }
            let fired_at_once = one.advance(1500);
            let mut fired_chunked = Vec::new();
            let mut elapsed = 0;
            while elapsed < 1500 {
                let step = chunk.min(1500 - elapsed);
                fired_chunked.extend(many.advance(step));
                elapsed += step;
            }
            prop_assert_eq!(fired_at_once, fired_chunked);
            prop_assert_eq!(one.pending(), 0);
            prop_assert_eq!(many.pending(), 0);
        }
    }
}
