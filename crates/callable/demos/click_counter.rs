//! Click counter driven by `on:` directives.
//! Dispatches a few clicks through a tiny two-level tree and shows how the
//! modifiers gate the listeners as the event bubbles.

use anyhow::{Context as _, Result};
use callable::{BoundHandler, DomEvent as _, HandlerRegistry, NodeKey, SyntheticEvent};
use env_logger::init as env_logger_init;
use log::info;
use std::cell::Cell;
use std::rc::Rc;

const LIST: NodeKey = NodeKey(1);
const BUTTON: NodeKey = NodeKey(2);

/// A listener attached to one node.
struct Listener {
    node: NodeKey,
    bound: BoundHandler<SyntheticEvent, (), u32>,
}

/// Walk from the target up through `path`, stopping where a listener asks to.
fn dispatch(listeners: &[Listener], path: &[NodeKey], mut event: SyntheticEvent) {
    for node in path {
        event.current_target = Some(*node);
        for listener in listeners.iter().filter(|listener| listener.node == *node) {
            if listener.bound.event != event.event_type {
                continue;
            }
            match listener.bound.handler.call(&mut event, ()) {
                Some(count) => info!("  listener on {:?} ran, count = {count}", listener.node),
                None => info!("  listener on {:?} skipped", listener.node),
            }
            if event.immediate_propagation_stopped {
                break;
            }
        }
        if event.propagation_stopped {
            info!("  propagation stopped at {node:?}");
            break;
        }
    }
    if event.default_prevented {
        info!("  default action prevented");
    }
}

fn main() -> Result<()> {
    env_logger_init();

    let count = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&count);
    let mut registry = HandlerRegistry::new();
    registry.register("increment", move |_event: &mut SyntheticEvent, ()| {
        counter.set(counter.get() + 1);
        counter.get()
    });
    registry.register("list_clicked", |event: &mut SyntheticEvent, ()| {
        u32::from(event.target() == Some(LIST))
    });

    let markup = [
        (BUTTON, "on:click|trusted|stopPropagation", "increment"),
        (BUTTON, "on:click|once|preventDefault", "increment"),
        (LIST, "on:click|self", "list_clicked"),
    ];
    let mut listeners = Vec::new();
    for (node, attr, handler_name) in markup {
        let bound = registry
            .bind(attr, handler_name)?
            .with_context(|| format!("`{attr}` is not an event directive"))?;
        listeners.push(Listener { node, bound });
    }

    info!("synthetic click on the button:");
    dispatch(&listeners, &[BUTTON, LIST], SyntheticEvent::new("click", BUTTON));

    info!("user click on the button:");
    dispatch(&listeners, &[BUTTON, LIST], SyntheticEvent::new("click", BUTTON).trusted());

    info!("user click on the list background:");
    dispatch(&listeners, &[LIST], SyntheticEvent::new("click", LIST).trusted());

    info!("final count: {}", count.get());
    Ok(())
}
