use std::cell::RefCell;
use std::rc::Rc;

use super::layout::LayoutProvider;
use super::listener::{listen_layout, EventTarget, Listener};
use super::navigator::ScrollSpyNavigator;
use super::section::SectionId;

/// A navigator attached to an event target. Dropping the session releases
/// the listeners first and then marks the navigator unmounted.
pub struct SpySession<T: EventTarget> {
    navigator: Rc<RefCell<ScrollSpyNavigator>>,
    listeners: Vec<Listener<T>>,
}

/// Measures the header once and subscribes to scroll and resize. The active
/// section is left alone until the first event arrives.
pub fn mount<T, L>(
    navigator: &Rc<RefCell<ScrollSpyNavigator>>,
    target: &T,
    layout: L,
    on_change: Rc<dyn Fn(SectionId)>,
) -> SpySession<T>
where
    T: EventTarget,
    L: LayoutProvider + 'static,
{
    navigator.borrow_mut().measure_header(&layout);

    let refresh: Rc<dyn Fn()> = {
        let navigator = navigator.clone();
        Rc::new(move || {
            let changed = navigator.borrow_mut().on_layout_event(&layout);
            if changed {
                let active = navigator.borrow().active_section();
                on_change(active);
            }
        })
    };

    SpySession {
        navigator: navigator.clone(),
        listeners: listen_layout(target, refresh),
    }
}

impl<T: EventTarget> Drop for SpySession<T> {
    fn drop(&mut self) {
        self.listeners.clear();
        self.navigator.borrow_mut().unmount();
    }
}
