//! Modifier values: built-in kinds addressed by name, or custom wrappers.

use core::fmt;
use core::str::FromStr;
use std::rc::Rc;

use crate::error::ModifierError;
use crate::event::DomEvent;
use crate::handler::Handler;

mod builtin;

pub use builtin::{
    once, prevent_default, self_target, stop_immediate_propagation, stop_propagation, trusted,
};

/// The built-in modifiers, named the way they appear in `on:` directives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// `trusted`
    Trusted,
    /// `self`
    SelfTarget,
    /// `stopPropagation`
    StopPropagation,
    /// `stopImmediatePropagation`
    StopImmediatePropagation,
    /// `preventDefault`
    PreventDefault,
    /// `once`
    Once,
}

impl ModifierKind {
    /// Every built-in modifier.
    pub const ALL: [Self; 6] = [
        Self::Trusted,
        Self::SelfTarget,
        Self::StopPropagation,
        Self::StopImmediatePropagation,
        Self::PreventDefault,
        Self::Once,
    ];

    /// Directive name of the modifier.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trusted => "trusted",
            Self::SelfTarget => "self",
            Self::StopPropagation => "stopPropagation",
            Self::StopImmediatePropagation => "stopImmediatePropagation",
            Self::PreventDefault => "preventDefault",
            Self::Once => "once",
        }
    }

    /// Wrap `inner` with this modifier.
    #[must_use]
    pub fn apply<Ev, Args, Out>(self, inner: Handler<Ev, Args, Out>) -> Handler<Ev, Args, Out>
    where
        Ev: DomEvent + 'static,
        Args: 'static,
        Out: 'static,
    {
        match self {
            Self::Trusted => trusted(inner),
            Self::SelfTarget => self_target(inner),
            Self::StopPropagation => stop_propagation(inner),
            Self::StopImmediatePropagation => stop_immediate_propagation(inner),
            Self::PreventDefault => prevent_default(inner),
            Self::Once => once(inner),
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModifierKind {
    type Err = ModifierError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ModifierError::UnknownModifier(name.to_owned()))
    }
}

/// Custom wrapper function.
type WrapFn<Ev, Args, Out> = dyn Fn(Handler<Ev, Args, Out>) -> Handler<Ev, Args, Out>;

/// A function from handler to handler.
pub enum Modifier<Ev, Args = (), Out = ()> {
    /// One of the built-in modifiers.
    Builtin(ModifierKind),
    /// A user-supplied wrapper.
    Custom(Rc<WrapFn<Ev, Args, Out>>),
}

impl<Ev, Args, Out> Modifier<Ev, Args, Out> {
    /// Wrap a user function as a modifier.
    #[inline]
    #[must_use]
    pub fn custom<F>(wrapper: F) -> Self
    where
        F: Fn(Handler<Ev, Args, Out>) -> Handler<Ev, Args, Out> + 'static,
    {
        Self::Custom(Rc::new(wrapper))
    }

    /// Whether this is the built-in `once` modifier.
    #[inline]
    #[must_use]
    pub const fn is_once(&self) -> bool {
        matches!(self, Self::Builtin(ModifierKind::Once))
    }

    /// The built-in kind, if this is not a custom modifier.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Option<ModifierKind> {
        match self {
            Self::Builtin(kind) => Some(*kind),
            Self::Custom(_) => None,
        }
    }
}

impl<Ev, Args, Out> Modifier<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
{
    /// Wrap `inner` with this modifier.
    #[must_use]
    pub fn apply(&self, inner: Handler<Ev, Args, Out>) -> Handler<Ev, Args, Out> {
        match self {
            Self::Builtin(kind) => kind.apply(inner),
            Self::Custom(wrapper) => wrapper(inner),
        }
    }
}

impl<Ev, Args, Out> From<ModifierKind> for Modifier<Ev, Args, Out> {
    #[inline]
    fn from(kind: ModifierKind) -> Self {
        Self::Builtin(kind)
    }
}

impl<Ev, Args, Out> Clone for Modifier<Ev, Args, Out> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Builtin(kind) => Self::Builtin(*kind),
            Self::Custom(wrapper) => Self::Custom(Rc::clone(wrapper)),
        }
    }
}

impl<Ev, Args, Out> fmt::Debug for Modifier<Ev, Args, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(kind) => write!(f, "Modifier({kind})"),
            Self::Custom(wrapper) => write!(f, "Modifier(custom {:p})", Rc::as_ptr(wrapper)),
        }
    }
}
