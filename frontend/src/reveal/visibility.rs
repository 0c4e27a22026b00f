//! Reveal bookkeeping for the scroll-reveal timeline.
//!
//! Nothing in here touches the DOM. Region handles are generic so the same
//! resolution and threshold rules run against `web_sys::Element` in the browser
//! and against plain values in tests.

use std::collections::BTreeSet;
use std::rc::Rc;

use yew::Reducible;

use crate::models::common::EntryKey;

/// Fraction of a region that must be inside the viewport before it counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.2;

pub fn meets_threshold(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio >= REVEAL_THRESHOLD
}

/// Entries that have been on screen at least once. Insert-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    seen: BTreeSet<EntryKey>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the set grew.
    pub fn insert(&mut self, key: EntryKey) -> bool {
        self.seen.insert(key)
    }

    pub fn contains(&self, key: &EntryKey) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntryKey> {
        self.seen.iter()
    }
}

pub enum RevealAction {
    Seen(EntryKey),
}

impl Reducible for VisibilitySet {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Seen(key) => {
                if self.contains(&key) {
                    // same Rc, so no re-render
                    return self;
                }
                let mut next = (*self).clone();
                next.insert(key);
                Rc::new(next)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Start
        } else {
            Side::End
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Side::Start => "side-start",
            Side::End => "side-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Hidden,
    Revealed,
}

impl VisualState {
    pub fn of(set: &VisibilitySet, key: &EntryKey) -> Self {
        if set.contains(key) {
            VisualState::Revealed
        } else {
            VisualState::Hidden
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            VisualState::Hidden => "is-hidden",
            VisualState::Revealed => "is-revealed",
        }
    }
}

/// Region handles registered by list position, each tied to its entry key.
///
/// Slots are written by index rather than pushed, so registration order does not
/// matter and re-registering a position replaces the old handle.
#[derive(Debug)]
pub struct RegionRegistry<H> {
    slots: Vec<Option<(EntryKey, H)>>,
}

impl<H: PartialEq> RegionRegistry<H> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn register(&mut self, index: usize, key: EntryKey, handle: H) {
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some((key, handle));
    }

    /// Identity lookup of a handle back to its entry.
    pub fn resolve(&self, handle: &H) -> Option<&EntryKey> {
        self.slots
            .iter()
            .flatten()
            .find(|(_, registered)| registered == handle)
            .map(|(key, _)| key)
    }

    pub fn handles(&self) -> impl Iterator<Item = &H> {
        self.slots.iter().flatten().map(|(_, handle)| handle)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<H: PartialEq> Default for RegionRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Observation state for one mounted list. Released on teardown, after which every
/// event is ignored.
#[derive(Debug)]
pub struct RevealSession<H> {
    registry: RegionRegistry<H>,
    released: bool,
}

impl<H: PartialEq> RevealSession<H> {
    pub fn new(registry: RegionRegistry<H>) -> Self {
        Self {
            registry,
            released: false,
        }
    }

    /// Key to reveal for an intersection event, if any. Leaving the viewport never
    /// produces anything, so a revealed entry stays revealed.
    pub fn observe(&self, handle: &H, is_intersecting: bool, ratio: f64) -> Option<EntryKey> {
        if self.released || !meets_threshold(is_intersecting, ratio) {
            return None;
        }
        self.registry.resolve(handle).cloned()
    }

    pub fn registry(&self) -> &RegionRegistry<H> {
        &self.registry
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn release(&mut self) {
        self.released = true;
        self.registry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key(k: &str) -> EntryKey {
        EntryKey::new(k)
    }

    fn session(ids: &[&str]) -> RevealSession<usize> {
        let mut registry = RegionRegistry::new();
        for (index, id) in ids.iter().enumerate() {
            // handle value 100 + index stands in for a DOM node
            registry.register(index, key(id), 100 + index);
        }
        RevealSession::new(registry)
    }

    /// Feed events through a session into a set, the way the timeline does.
    fn replay(session: &RevealSession<usize>, events: &[(usize, bool, f64)]) -> VisibilitySet {
        let mut set = VisibilitySet::new();
        for (handle, intersecting, ratio) in events {
            if let Some(k) = session.observe(handle, *intersecting, *ratio) {
                set.insert(k);
            }
        }
        set
    }

    #[test]
    fn threshold_is_twenty_percent() {
        assert!(!meets_threshold(true, 0.19));
        assert!(meets_threshold(true, 0.2));
        assert!(meets_threshold(true, 1.0));
        assert!(!meets_threshold(false, 0.5));
    }

    #[test]
    fn three_entry_walkthrough() {
        let session = session(&["1", "2", "3"]);
        let set = replay(&session, &[(101, true, 0.5), (101, true, 0.5), (100, true, 0.3)]);
        let expected: Vec<EntryKey> = vec![key("1"), key("2")];
        assert_eq!(set.iter().cloned().collect::<Vec<_>>(), expected);
        assert_eq!(VisualState::of(&set, &key("3")), VisualState::Hidden);
        assert_eq!(VisualState::of(&set, &key("1")), VisualState::Revealed);
        assert_eq!(Side::for_index(0), Side::Start);
        assert_eq!(Side::for_index(1), Side::End);
        assert_eq!(Side::for_index(2), Side::Start);
    }

    #[test]
    fn leaving_the_viewport_keeps_entry_revealed() {
        let session = session(&["a"]);
        let set = replay(&session, &[(100, true, 0.8), (100, false, 0.0)]);
        assert!(set.contains(&key("a")));
    }

    #[test]
    fn unknown_handles_resolve_to_nothing() {
        let session = session(&["a", "b"]);
        assert_eq!(session.observe(&999, true, 1.0), None);
    }

    #[test]
    fn registration_is_index_addressed() {
        let mut registry = RegionRegistry::new();
        registry.register(2, key("c"), 'c');
        registry.register(0, key("a"), 'a');
        registry.register(1, key("b"), 'b');
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.handles().collect::<String>(), "abc");
        registry.register(1, key("b2"), 'x');
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.resolve(&'b'), None);
        assert_eq!(registry.resolve(&'x'), Some(&key("b2")));
    }

    #[test]
    fn released_session_ignores_events() {
        let mut session = session(&["a", "b"]);
        session.release();
        assert!(session.is_released());
        assert_eq!(session.observe(&100, true, 1.0), None);
        assert_eq!(session.registry().len(), 0);
    }

    #[test]
    fn reducer_returns_same_rc_for_known_key() {
        let set = Rc::new(VisibilitySet::new());
        let once = set.reduce(RevealAction::Seen(key("a")));
        let twice = once.clone().reduce(RevealAction::Seen(key("a")));
        assert!(Rc::ptr_eq(&once, &twice));
        assert_eq!(twice.len(), 1);
    }

    fn event() -> impl Strategy<Value = (usize, bool, f64)> {
        (100usize..106, any::<bool>(), 0.0f64..=1.0)
    }

    proptest! {
        #[test]
        fn revealed_entries_are_never_removed(events in prop::collection::vec(event(), 0..40)) {
            let session = session(&["a", "b", "c", "d", "e"]);
            let mut set = VisibilitySet::new();
            for (handle, intersecting, ratio) in &events {
                let before = set.clone();
                if let Some(k) = session.observe(handle, *intersecting, *ratio) {
                    set.insert(k);
                }
                for k in before.iter() {
                    prop_assert!(set.contains(k));
                }
            }
        }

        #[test]
        fn duplicate_events_change_nothing(events in prop::collection::vec(event(), 0..20)) {
            let session = session(&["a", "b", "c", "d", "e"]);
            let doubled: Vec<_> = events.iter().flat_map(|e| [*e, *e]).collect();
            prop_assert_eq!(replay(&session, &events), replay(&session, &doubled));
        }

        #[test]
        fn event_order_does_not_matter(events in prop::collection::vec(event(), 0..20)) {
            let session = session(&["a", "b", "c", "d", "e"]);
            let mut reversed = events.clone();
            reversed.reverse();
            prop_assert_eq!(replay(&session, &events), replay(&session, &reversed));
        }

        #[test]
        fn placement_alternates_regardless_of_visibility(index in 0usize..10_000) {
            let expected = if index % 2 == 0 { Side::Start } else { Side::End };
            prop_assert_eq!(Side::for_index(index), expected);
        }
    }

    #[test]
    fn out_of_order_indices_match_in_order() {
        let session = session(&["a", "b", "c"]);
        let scrambled = replay(&session, &[(102, true, 1.0), (100, true, 1.0), (101, true, 1.0)]);
        let ordered = replay(&session, &[(100, true, 1.0), (101, true, 1.0), (102, true, 1.0)]);
        assert_eq!(scrambled, ordered);
    }
}
