//! Reference-counted event handler values.

use core::fmt;
use std::rc::Rc;

/// Type-erased callback body: the leading event plus the extra arguments.
type HandlerFn<Ev, Args, Out> = dyn Fn(&mut Ev, Args) -> Option<Out>;

/// A composable event handler.
///
/// Cloning is cheap and keeps the same instance, so two clones compare equal
/// under [`Handler::ptr_eq`]. Calling returns `None` whenever the base
/// callback did not run (a gate closed, or the callback is absent).
pub struct Handler<Ev, Args = (), Out = ()> {
    inner: Option<Rc<HandlerFn<Ev, Args, Out>>>,
}

impl<Ev, Args, Out> Handler<Ev, Args, Out> {
    /// Wrap a base callback.
    #[inline]
    #[must_use]
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut Ev, Args) -> Out + 'static,
    {
        Self::wrap(move |event, args| Some(callback(event, args)))
    }

    /// Build a handler from a body that may decline to produce a value.
    ///
    /// This is the constructor modifiers use: returning `None` means the
    /// wrapped chain was cut short.
    #[inline]
    #[must_use]
    pub fn wrap<F>(body: F) -> Self
    where
        F: Fn(&mut Ev, Args) -> Option<Out> + 'static,
    {
        Self {
            inner: Some(Rc::new(body)),
        }
    }

    /// A handler with no callback behind it. Calling it does nothing.
    #[inline]
    #[must_use]
    pub const fn absent() -> Self {
        Self { inner: None }
    }

    /// Wrap a callback that may be missing.
    #[inline]
    #[must_use]
    pub fn optional<F>(callback: Option<F>) -> Self
    where
        F: Fn(&mut Ev, Args) -> Out + 'static,
    {
        callback.map_or_else(Self::absent, Self::new)
    }

    /// Whether a callback is present.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.inner.is_none()
    }

    /// Invoke the handler. An absent callback is skipped and yields `None`.
    #[inline]
    pub fn call(&self, event: &mut Ev, args: Args) -> Option<Out> {
        self.inner.as_ref().and_then(|body| body(event, args))
    }

    /// Whether both handlers are the same instance.
    ///
    /// Two absent handlers are considered the same.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Some(lhs), Some(rhs)) => Rc::ptr_eq(lhs, rhs),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<Ev, Args, Out> Clone for Handler<Ev, Args, Out> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.as_ref().map(Rc::clone),
        }
    }
}

impl<Ev, Args, Out> Default for Handler<Ev, Args, Out> {
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

impl<Ev, Args, Out> fmt::Debug for Handler<Ev, Args, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(body) => write!(f, "Handler({:p})", Rc::as_ptr(body)),
            None => f.write_str("Handler(absent)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{NodeKey, SyntheticEvent};

    /// Tests that a plain handler forwards the event, arguments and result
    #[test]
    fn test_call_forwards_result() {
        let handler = Handler::new(|event: &mut SyntheticEvent, delta: i32| {
            event.default_prevented = true;
            delta * 2
        });
        let mut event = SyntheticEvent::new("click", NodeKey::ROOT);
        assert_eq!(handler.call(&mut event, 21), Some(42));
        assert!(event.default_prevented);
    }

    /// Tests that an absent callback is skipped without error
    #[test]
    fn test_absent_is_noop() {
        let handler = Handler::optional(None::<fn(&mut SyntheticEvent, ()) -> u8>);
        let mut event = SyntheticEvent::new("click", NodeKey::ROOT);
        assert!(handler.is_absent());
        assert_eq!(handler.call(&mut event, ()), None);
    }

    /// Tests identity semantics of clones and fresh handlers
    #[test]
    fn test_ptr_eq() {
        let first = Handler::<SyntheticEvent>::new(|_event, ()| ());
        let second = Handler::<SyntheticEvent>::new(|_event, ()| ());
        assert!(first.ptr_eq(&first.clone()));
        assert!(!first.ptr_eq(&second));
        assert!(Handler::<SyntheticEvent>::absent().ptr_eq(&Handler::default()));
    }
}
