use core::fmt::{Display, Formatter, Result as FmtResult};
use std::error::Error;

/// Errors raised while resolving modifiers and directives by name.
///
/// Composition and invocation themselves never fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModifierError {
    /// A modifier name that is not one of the built-ins.
    UnknownModifier(String),
    /// An `on:` directive with nothing between the prefix and the first `|`.
    EmptyEventName(String),
    /// An `on:` directive with an empty `|` segment.
    EmptyModifier(String),
    /// A directive value naming a callback that was never registered.
    UnknownHandler(String),
}

impl Display for ModifierError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnknownModifier(name) => write!(f, "unknown event modifier `{name}`"),
            Self::EmptyEventName(attr) => write!(f, "missing event name in directive `{attr}`"),
            Self::EmptyModifier(attr) => write!(f, "empty modifier in directive `{attr}`"),
            Self::UnknownHandler(name) => write!(f, "no handler registered as `{name}`"),
        }
    }
}

impl Error for ModifierError {}
