//! Per-key caches of composed handlers for list rendering.
//!
//! A list that renders one listener per row wants the same composition for
//! every row, but a separate `once` gate per row and a handler identity that
//! stays stable across renders. [`HandlerCache`] builds each row's handler on
//! first request and hands back the same instance afterwards.

use core::cell::{Cell, RefCell};
use core::fmt;
use std::collections::HashMap;

use log::{debug, warn};

use crate::compose::callable;
use crate::config::CacheConfig;
use crate::event::DomEvent;
use crate::handler::Handler;
use crate::modifier::Modifier;

/// Key of a cache slot.
///
/// Keys are stored in their string form, so the integer `1` and the string
/// `"1"` name the same slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerKey(String);

impl HandlerKey {
    /// The key's text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HandlerKey {
    #[inline]
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for HandlerKey {
    #[inline]
    fn from(key: String) -> Self {
        Self(key)
    }
}

macro_rules! integer_keys {
    ($($int:ty),* $(,)?) => {
        $(
            impl From<$int> for HandlerKey {
                #[inline]
                fn from(key: $int) -> Self {
                    Self(key.to_string())
                }
            }
        )*
    };
}

integer_keys!(i32, i64, u32, u64, usize);

/// Lazily built map from key to composed handler. Entries are never evicted.
pub struct HandlerCache<Ev, Args = (), Out = ()> {
    base: Handler<Ev, Args, Out>,
    modifiers: Vec<Modifier<Ev, Args, Out>>,
    handlers: RefCell<HashMap<HandlerKey, Handler<Ev, Args, Out>>>,
    config: CacheConfig,
    warned: Cell<bool>,
}

impl<Ev, Args, Out> HandlerCache<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
{
    /// Create an empty cache composing `base` with `modifiers` for every key.
    #[must_use]
    pub fn new<I>(base: Handler<Ev, Args, Out>, modifiers: I, config: CacheConfig) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Modifier<Ev, Args, Out>>,
    {
        Self {
            base,
            modifiers: modifiers.into_iter().map(Into::into).collect(),
            handlers: RefCell::new(HashMap::new()),
            config,
            warned: Cell::new(false),
        }
    }

    /// The handler for `key`, composing it on first request.
    pub fn handler(&self, key: impl Into<HandlerKey>) -> Handler<Ev, Args, Out> {
        let slot = key.into();
        let cached = self.handlers.borrow().get(&slot).cloned();
        if let Some(existing) = cached {
            return existing;
        }

        debug!("composing handler for key `{slot}`");
        let composed = callable(self.base.clone(), self.modifiers.iter().cloned());
        let len = {
            let mut handlers = self.handlers.borrow_mut();
            handlers.insert(slot, composed.clone());
            handlers.len()
        };
        self.check_threshold(len);
        composed
    }

    /// Turn the cache into a plain key-to-handler function.
    pub fn into_accessor<K>(self) -> impl Fn(K) -> Handler<Ev, Args, Out>
    where
        K: Into<HandlerKey>,
    {
        move |key| self.handler(key)
    }

    fn check_threshold(&self, len: usize) {
        let Some(threshold) = self.config.warn_threshold else {
            return;
        };
        if len >= threshold.get() && !self.warned.replace(true) {
            warn!(
                "handler cache holds {len} keys and never evicts; check that keys are reused across renders"
            );
        }
    }
}

impl<Ev, Args, Out> HandlerCache<Ev, Args, Out> {
    /// Number of distinct keys seen so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Whether no handler has been requested yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// Whether a handler exists for `key`.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: impl Into<HandlerKey>) -> bool {
        self.handlers.borrow().contains_key(&key.into())
    }
}

impl<Ev, Args, Out> fmt::Debug for HandlerCache<Ev, Args, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerCache")
            .field("modifiers", &self.modifiers)
            .field("keys", &self.handlers.borrow().len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Build a [`HandlerCache`] configured from the environment.
///
/// ```
/// use callable::{for_each, Handler, ModifierKind, NodeKey, SyntheticEvent};
///
/// let rows = for_each(
///     Handler::new(|_event: &mut SyntheticEvent, name: &'static str| name.len()),
///     [ModifierKind::Once],
/// );
/// let mut event = SyntheticEvent::new("click", NodeKey::ROOT);
/// assert_eq!(rows.handler(0).call(&mut event, "one"), Some(3));
/// assert_eq!(rows.handler(0).call(&mut event, "one"), None);
/// assert_eq!(rows.handler(1).call(&mut event, "two"), Some(3));
/// ```
#[must_use]
pub fn for_each<Ev, Args, Out, I>(
    base: Handler<Ev, Args, Out>,
    modifiers: I,
) -> HandlerCache<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
    I: IntoIterator,
    I::Item: Into<Modifier<Ev, Args, Out>>,
{
    HandlerCache::new(base, modifiers, CacheConfig::from_env())
}
