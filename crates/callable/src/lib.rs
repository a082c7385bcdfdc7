//! Composable event-handler modifiers.
//!
//! A modifier wraps an event handler in another handler: `prevent_default`
//! cancels the default action before calling through, `once` lets only the
//! first call through, `trusted` drops script-dispatched events, and so on.
//! [`callable`] folds a list of modifiers around a base callback, and
//! [`for_each`] keeps one composed handler per key for listeners rendered in a
//! loop.
//!
//! Handlers are single-threaded (`Rc`-based); build and call them on the
//! thread that owns the DOM.

pub mod cache;
mod compose;
pub mod config;
pub mod directive;
mod error;
pub mod event;
mod handler;
pub mod modifier;
pub mod registry;

pub use cache::{for_each, HandlerCache, HandlerKey};
pub use compose::callable;
pub use config::CacheConfig;
pub use directive::EventDirective;
pub use error::ModifierError;
pub use event::{DomEvent, NodeKey, SyntheticEvent};
pub use handler::Handler;
pub use modifier::{
    once, prevent_default, self_target, stop_immediate_propagation, stop_propagation, trusted,
    Modifier, ModifierKind,
};
pub use registry::{BoundCache, BoundHandler, HandlerRegistry};
