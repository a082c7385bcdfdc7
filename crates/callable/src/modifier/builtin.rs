//! The built-in modifiers.
//!
//! Each one takes the handler it wraps and returns a new handler with the
//! same signature. Gating modifiers return `None` when they decline to call
//! through; side-effecting modifiers always call through and forward the
//! inner result.

use core::cell::Cell;

use log::trace;

use crate::event::DomEvent;
use crate::handler::Handler;

/// Call `inner` only for events generated by a genuine user action.
#[must_use]
pub fn trusted<Ev, Args, Out>(inner: Handler<Ev, Args, Out>) -> Handler<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
{
    Handler::wrap(move |event: &mut Ev, args| {
        if event.is_trusted() {
            inner.call(event, args)
        } else {
            trace!("trusted: skipping synthetic event");
            None
        }
    })
}

/// Call `inner` only when the event was dispatched to the node the listener is attached to.
///
/// Named after the `self` event modifier.
#[must_use]
pub fn self_target<Ev, Args, Out>(inner: Handler<Ev, Args, Out>) -> Handler<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
{
    Handler::wrap(move |event: &mut Ev, args| {
        if event.target() == event.current_target() {
            inner.call(event, args)
        } else {
            trace!("self: skipping event bubbled from a descendant");
            None
        }
    })
}

/// Stop propagation, then call `inner`.
#[must_use]
pub fn stop_propagation<Ev, Args, Out>(inner: Handler<Ev, Args, Out>) -> Handler<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
{
    Handler::wrap(move |event: &mut Ev, args| {
        event.stop_propagation();
        inner.call(event, args)
    })
}

/// Stop immediate propagation, then call `inner`.
#[must_use]
pub fn stop_immediate_propagation<Ev, Args, Out>(
    inner: Handler<Ev, Args, Out>,
) -> Handler<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
{
    Handler::wrap(move |event: &mut Ev, args| {
        event.stop_immediate_propagation();
        inner.call(event, args)
    })
}

/// Prevent the default action, then call `inner`.
#[must_use]
pub fn prevent_default<Ev, Args, Out>(inner: Handler<Ev, Args, Out>) -> Handler<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
{
    Handler::wrap(move |event: &mut Ev, args| {
        event.prevent_default();
        inner.call(event, args)
    })
}

/// Call `inner` on the first invocation only.
///
/// The flag belongs to the returned handler instance; every call to `once`
/// starts a fresh gate. It does not need the event, so any event type works.
#[must_use]
pub fn once<Ev, Args, Out>(inner: Handler<Ev, Args, Out>) -> Handler<Ev, Args, Out>
where
    Ev: 'static,
    Args: 'static,
    Out: 'static,
{
    let ran = Cell::new(false);
    Handler::wrap(move |event: &mut Ev, args| {
        if ran.replace(true) {
            trace!("once: handler already ran");
            return None;
        }
        inner.call(event, args)
    })
}
