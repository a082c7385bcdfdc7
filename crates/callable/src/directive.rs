//! Parsing of `on:<event>|<modifier>...` attribute names.

use crate::error::ModifierError;
use crate::modifier::ModifierKind;

/// Attribute prefix marking an event listener.
pub const DIRECTIVE_PREFIX: &str = "on:";

/// Separator between the event name and each modifier.
const SEPARATOR: char = '|';

/// An event listener directive such as `on:click|once|preventDefault`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDirective {
    /// The event type (e.g., "click", "input")
    pub event: String,
    /// Modifiers in the order they were written
    pub modifiers: Vec<ModifierKind>,
}

impl EventDirective {
    /// Parse an attribute name.
    ///
    /// Returns `Ok(None)` for attributes that are not event directives.
    ///
    /// # Errors
    /// Returns an error if the event name or a modifier segment is empty, or
    /// if a modifier name is not a built-in.
    pub fn parse(attr: &str) -> Result<Option<Self>, ModifierError> {
        let Some(body) = attr.strip_prefix(DIRECTIVE_PREFIX) else {
            return Ok(None);
        };
        let mut segments = body.split(SEPARATOR);
        let event = segments.next().unwrap_or_default();
        if event.is_empty() {
            return Err(ModifierError::EmptyEventName(attr.to_owned()));
        }

        let modifiers = segments
            .map(|segment| {
                if segment.is_empty() {
                    Err(ModifierError::EmptyModifier(attr.to_owned()))
                } else {
                    segment.parse()
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self {
            event: event.to_owned(),
            modifiers,
        }))
    }
}
