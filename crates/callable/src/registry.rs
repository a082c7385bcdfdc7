//! Named callbacks bound to `on:` directives.
//!
//! Markup refers to callbacks by name, e.g.
//! `<button on:click|once|preventDefault="save">`. The registry resolves the
//! name, parses the modifiers and composes the handler.

use std::collections::HashMap;

use anyhow::{Context as _, Result};
use log::debug;

use crate::cache::HandlerCache;
use crate::compose::callable;
use crate::config::CacheConfig;
use crate::directive::EventDirective;
use crate::error::ModifierError;
use crate::event::DomEvent;
use crate::handler::Handler;

/// A parsed directive and the base callback it names.
type Resolved<Ev, Args, Out> = (EventDirective, Handler<Ev, Args, Out>);

/// A composed handler together with the event it listens for.
#[derive(Debug)]
pub struct BoundHandler<Ev, Args = (), Out = ()> {
    /// The event type (e.g., "click", "input")
    pub event: String,
    /// The composed handler
    pub handler: Handler<Ev, Args, Out>,
}

/// A keyed cache together with the event it listens for.
#[derive(Debug)]
pub struct BoundCache<Ev, Args = (), Out = ()> {
    /// The event type (e.g., "click", "input")
    pub event: String,
    /// Per-key composed handlers
    pub cache: HandlerCache<Ev, Args, Out>,
}

/// Registry of base callbacks addressed by name.
pub struct HandlerRegistry<Ev, Args = (), Out = ()> {
    callbacks: HashMap<String, Handler<Ev, Args, Out>>,
    cache_config: CacheConfig,
}

impl<Ev, Args, Out> HandlerRegistry<Ev, Args, Out> {
    /// Create a new empty registry. Caches it builds read their config from the environment.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache_config(CacheConfig::from_env())
    }

    /// Create a new empty registry with an explicit cache config.
    #[inline]
    #[must_use]
    pub fn with_cache_config(cache_config: CacheConfig) -> Self {
        Self {
            callbacks: HashMap::new(),
            cache_config,
        }
    }

    /// Register a callback with a name, replacing any previous one.
    #[inline]
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&mut Ev, Args) -> Out + 'static,
    {
        self.callbacks.insert(name.into(), Handler::new(callback));
    }

    /// Get a callback by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Handler<Ev, Args, Out>> {
        self.callbacks.get(name).cloned()
    }

    /// Number of registered callbacks.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callback is registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<Ev, Args, Out> HandlerRegistry<Ev, Args, Out>
where
    Ev: DomEvent + 'static,
    Args: 'static,
    Out: 'static,
{
    /// Compose the handler for one directive attribute.
    ///
    /// Returns `Ok(None)` when `attr` is not an `on:` directive.
    ///
    /// # Errors
    /// Returns an error if the directive is malformed or `handler_name` is not registered.
    pub fn bind(
        &self,
        attr: &str,
        handler_name: &str,
    ) -> Result<Option<BoundHandler<Ev, Args, Out>>> {
        let Some((directive, base)) = self.resolve(attr, handler_name)? else {
            return Ok(None);
        };
        debug!(
            "binding `{handler_name}` to `{}` with {} modifier(s)",
            directive.event,
            directive.modifiers.len()
        );
        Ok(Some(BoundHandler {
            handler: callable(base, directive.modifiers),
            event: directive.event,
        }))
    }

    /// Build a keyed cache for one directive attribute inside a list.
    ///
    /// Returns `Ok(None)` when `attr` is not an `on:` directive.
    ///
    /// # Errors
    /// Returns an error if the directive is malformed or `handler_name` is not registered.
    pub fn bind_each(
        &self,
        attr: &str,
        handler_name: &str,
    ) -> Result<Option<BoundCache<Ev, Args, Out>>> {
        let Some((directive, base)) = self.resolve(attr, handler_name)? else {
            return Ok(None);
        };
        debug!("binding `{handler_name}` to `{}` per key", directive.event);
        Ok(Some(BoundCache {
            cache: HandlerCache::new(base, directive.modifiers, self.cache_config),
            event: directive.event,
        }))
    }

    fn resolve(&self, attr: &str, handler_name: &str) -> Result<Option<Resolved<Ev, Args, Out>>> {
        let parsed = EventDirective::parse(attr)
            .with_context(|| format!("invalid event directive `{attr}`"))?;
        let Some(directive) = parsed else {
            return Ok(None);
        };
        let base = self
            .get(handler_name)
            .ok_or_else(|| ModifierError::UnknownHandler(handler_name.to_owned()))
            .with_context(|| format!("cannot bind `{attr}`"))?;
        Ok(Some((directive, base)))
    }
}

impl<Ev, Args, Out> Default for HandlerRegistry<Ev, Args, Out> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
