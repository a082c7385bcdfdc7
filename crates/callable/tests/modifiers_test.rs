//! End-to-end behaviour of composed handlers against synthetic DOM events.

use callable::{
    callable, for_each, once, prevent_default, self_target, trusted, DomEvent, Handler,
    HandlerRegistry, Modifier, ModifierKind, NodeKey, SyntheticEvent,
};
use std::cell::Cell;
use std::rc::Rc;

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _logger = env_logger::builder().is_test(true).try_init();
    }

    /// Event that counts `preventDefault` calls, standing in for a host object.
    struct CountingEvent {
        calls: u32,
    }

    impl DomEvent for CountingEvent {
        type Target = ();

        fn is_trusted(&self) -> bool {
            false
        }

        fn target(&self) -> Option<()> {
            None
        }

        fn current_target(&self) -> Option<()> {
            None
        }

        fn stop_propagation(&mut self) {}

        fn stop_immediate_propagation(&mut self) {}

        fn prevent_default(&mut self) {
            self.calls += 1;
        }
    }

    fn counter_handler(
        counter: &Rc<Cell<u32>>,
    ) -> Handler<SyntheticEvent, &'static str, &'static str> {
        let calls = Rc::clone(counter);
        Handler::new(move |_event: &mut SyntheticEvent, label: &'static str| {
            calls.set(calls.get() + 1);
            label
        })
    }

    /// Tests a callback returning "clicked" behind `preventDefault` on a counting event
    #[test]
    fn test_clicked_with_prevent_default() {
        init_logging();
        let onclick = callable(
            Handler::new(|_event: &mut CountingEvent, ()| "clicked"),
            [ModifierKind::PreventDefault],
        );
        let mut event = CountingEvent { calls: 0 };
        assert_eq!(onclick.call(&mut event, ()), Some("clicked"));
        assert_eq!(event.calls, 1);
    }

    /// Tests that the free functions and the composer agree
    #[test]
    fn test_free_functions_match_composer() {
        init_logging();
        let counter = Rc::new(Cell::new(0));
        let by_hand = prevent_default(once(counter_handler(&counter)));
        let composed = callable(
            counter_handler(&counter),
            [ModifierKind::PreventDefault, ModifierKind::Once],
        );

        for handler in [by_hand, composed] {
            let mut first = SyntheticEvent::new("click", NodeKey(1));
            assert_eq!(handler.call(&mut first, "go"), Some("go"));
            assert!(first.default_prevented);

            let mut second = SyntheticEvent::new("click", NodeKey(1));
            assert_eq!(handler.call(&mut second, "go"), None);
            assert!(second.default_prevented);
        }
        assert_eq!(counter.get(), 2);
    }

    /// Tests a bubbling click reaching a `self` + `trusted` listener on an ancestor
    #[test]
    fn test_self_and_trusted_on_bubbling_click() {
        init_logging();
        let counter = Rc::new(Cell::new(0));
        let list = NodeKey(10);
        let item = NodeKey(11);
        let handler = self_target(trusted(counter_handler(&counter)));

        let mut from_child = SyntheticEvent::new("click", item).trusted().with_current_target(list);
        assert_eq!(handler.call(&mut from_child, "list"), None);

        let mut scripted = SyntheticEvent::new("click", list);
        assert_eq!(handler.call(&mut scripted, "list"), None);

        let mut direct = SyntheticEvent::new("click", list).trusted();
        assert_eq!(handler.call(&mut direct, "list"), Some("list"));
        assert_eq!(counter.get(), 1);
    }

    /// Tests custom modifiers folding alongside built-ins
    #[test]
    fn test_custom_modifier_with_builtins() {
        init_logging();
        let counter = Rc::new(Cell::new(0));
        let shout = Modifier::<SyntheticEvent, &'static str, &'static str>::custom(|inner| {
            Handler::wrap(move |event: &mut SyntheticEvent, label| {
                event.event_type = event.event_type.to_uppercase();
                inner.call(event, label)
            })
        });
        let handler = callable(
            counter_handler(&counter),
            vec![shout, ModifierKind::StopPropagation.into(), ModifierKind::Once.into()],
        );

        let mut event = SyntheticEvent::new("keydown", NodeKey(2));
        assert_eq!(handler.call(&mut event, "key"), Some("key"));
        assert_eq!(event.event_type, "KEYDOWN");
        assert!(event.propagation_stopped);

        let mut repeat = SyntheticEvent::new("keydown", NodeKey(2));
        assert_eq!(handler.call(&mut repeat, "key"), None);
        assert_eq!(repeat.event_type, "KEYDOWN");
        assert_eq!(counter.get(), 1);
    }

    /// Tests a rendered list whose rows each allow one click
    #[test]
    fn test_for_each_rows() {
        init_logging();
        let counter = Rc::new(Cell::new(0));
        let rows = for_each(counter_handler(&counter), [ModifierKind::Once]);
        let buttons = ["1", "2", "3"];

        for _render in 0..2 {
            for (index, name) in buttons.into_iter().enumerate() {
                let mut event = SyntheticEvent::new("click", NodeKey(index as u64));
                rows.handler(index).call(&mut event, name);
            }
        }
        assert_eq!(counter.get(), 3);
        assert_eq!(rows.len(), 3);
        assert!(rows.handler(0usize).ptr_eq(&rows.handler("0")));
    }

    /// Tests binding markup-style directives through the registry
    #[test]
    fn test_registry_round_trip() {
        init_logging();
        let counter = Rc::new(Cell::new(0));
        let calls = Rc::clone(&counter);
        let mut registry = HandlerRegistry::<SyntheticEvent>::new();
        registry.register("submit_form", move |_event: &mut SyntheticEvent, ()| {
            calls.set(calls.get() + 1);
        });

        let bound = registry.bind("on:submit|preventDefault|stopPropagation", "submit_form");
        assert!(matches!(&bound, Ok(Some(_))));
        if let Ok(Some(bound_handler)) = bound {
            assert_eq!(bound_handler.event, "submit");
            let mut event = SyntheticEvent::new("submit", NodeKey(5));
            assert_eq!(bound_handler.handler.call(&mut event, ()), Some(()));
            assert!(event.default_prevented);
            assert!(event.propagation_stopped);
        }
        assert_eq!(counter.get(), 1);
    }
}
