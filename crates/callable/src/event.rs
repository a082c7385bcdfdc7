//! Event-like objects that modifiers operate on.
//!
//! Modifiers only ever touch the leading event argument through the
//! [`DomEvent`] trait, so any host event type can be wrapped as long as it
//! exposes the trust flag, the dispatch/current targets and the three
//! propagation/default operations. [`SyntheticEvent`] is a plain host-side
//! implementation used by the registry, the demos and the tests.

/// A 64-bit stable key identifying a DOM node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeKey(pub u64);

impl NodeKey {
    /// The root node key (always present).
    pub const ROOT: Self = Self(0);
}

/// The subset of the DOM `Event` interface that modifiers rely on.
pub trait DomEvent {
    /// Identity of an event target. Compared by `self_target`.
    type Target: PartialEq;

    /// Whether the event was generated by a user action rather than a script.
    fn is_trusted(&self) -> bool;

    /// The node the event was originally dispatched to.
    fn target(&self) -> Option<Self::Target>;

    /// The node whose listener is currently running.
    fn current_target(&self) -> Option<Self::Target>;

    /// Stop the event from reaching further nodes.
    fn stop_propagation(&mut self);

    /// Stop the event from reaching further nodes and further listeners on this node.
    fn stop_immediate_propagation(&mut self);

    /// Cancel the default action associated with the event.
    fn prevent_default(&mut self);
}

/// Host-side event record.
///
/// Events created through [`SyntheticEvent::new`] are untrusted, mirroring
/// `dispatchEvent` from script; the host marks genuine input with
/// [`SyntheticEvent::trusted`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticEvent {
    /// The event type (e.g., "click", "input")
    pub event_type: String,
    /// Whether the event came from genuine user interaction
    pub is_trusted: bool,
    /// Original dispatch target
    pub target: Option<NodeKey>,
    /// Node whose listener is running
    pub current_target: Option<NodeKey>,
    /// Set by `stop_propagation` and `stop_immediate_propagation`
    pub propagation_stopped: bool,
    /// Set by `stop_immediate_propagation`
    pub immediate_propagation_stopped: bool,
    /// Set by `prevent_default`
    pub default_prevented: bool,
}

impl SyntheticEvent {
    /// Create an untrusted event dispatched at `target`, currently at the same node.
    #[inline]
    #[must_use]
    pub fn new(event_type: impl Into<String>, target: NodeKey) -> Self {
        Self {
            event_type: event_type.into(),
            is_trusted: false,
            target: Some(target),
            current_target: Some(target),
            propagation_stopped: false,
            immediate_propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// Mark the event as originating from user interaction.
    #[inline]
    #[must_use]
    pub fn trusted(mut self) -> Self {
        self.is_trusted = true;
        self
    }

    /// Move the event to a listener attached on `node` (bubbling).
    #[inline]
    #[must_use]
    pub fn with_current_target(mut self, node: NodeKey) -> Self {
        self.current_target = Some(node);
        self
    }
}

impl DomEvent for SyntheticEvent {
    type Target = NodeKey;

    #[inline]
    fn is_trusted(&self) -> bool {
        self.is_trusted
    }

    #[inline]
    fn target(&self) -> Option<NodeKey> {
        self.target
    }

    #[inline]
    fn current_target(&self) -> Option<NodeKey> {
        self.current_target
    }

    #[inline]
    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    #[inline]
    fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_propagation_stopped = true;
    }

    #[inline]
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
