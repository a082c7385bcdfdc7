//! Folding a modifier list around a base handler.

use crate::event::DomEvent;
use crate::handler::Handler;
use crate::modifier::Modifier;

/// Compose `base` with `modifiers`.
///
/// The first `once` in the list is moved to the front before folding, and the
/// fold then wraps left to right: each modifier wraps everything before it, so
/// the last one listed is the outermost layer and runs first. With `once` at
/// the bottom of the stack, outer side effects such as `preventDefault` still
/// happen on every call while the base callback runs only the first time.
///
/// Every call builds a new handler instance; use [`crate::for_each`] to reuse
/// instances per key.
///
/// ```
/// use callable::{callable, Handler, ModifierKind, NodeKey, SyntheticEvent};
///
/// let onclick = callable(
///     Handler::new(|_event: &mut SyntheticEvent, ()| "clicked"),
///     [ModifierKind::PreventDefault],
/// );
/// let mut event = SyntheticEvent::new("click", NodeKey::ROOT);
/// assert_eq!(onclick.call(&mut event, ()), Some("clicked"));
/// assert!(event.default_prevented);
/// ```
#[must_use]
pub fn callable<Ev, Args, Out, I>(
    base: Handler<Ev, Args, Out>,
    modifiers: I,
) -> Handler<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
    I: IntoIterator,
    I::Item: Into<Modifier<Ev, Args, Out>>,
{
    hoist_once(modifiers.into_iter().map(Into::into).collect())
        .iter()
        .fold(base, |acc, modifier| modifier.apply(acc))
}

/// Move the first `once` modifier to index 0, keeping everything else in order.
fn hoist_once<Ev, Args, Out>(
    mut modifiers: Vec<Modifier<Ev, Args, Out>>,
) -> Vec<Modifier<Ev, Args, Out>> {
    if let Some(index) = modifiers.iter().position(Modifier::is_once) {
        modifiers[..=index].rotate_right(1);
    }
    modifiers
}
