use std::rc::Rc;

pub const LAYOUT_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Something handlers can be attached to, e.g. the browser window.
pub trait EventTarget: Clone {
    type Token;

    fn listen(&self, event: &'static str, handler: Rc<dyn Fn()>) -> Self::Token;

    fn unlisten(&self, event: &'static str, token: Self::Token);
}

/// A registered handler. Dropping the guard removes it from the target.
pub struct Listener<T: EventTarget> {
    target: T,
    event: &'static str,
    token: Option<T::Token>,
}

impl<T: EventTarget> Listener<T> {
    pub fn new(target: &T, event: &'static str, handler: Rc<dyn Fn()>) -> Self {
        let token = target.listen(event, handler);
        Self {
            target: target.clone(),
            event,
            token: Some(token),
        }
    }
}

impl<T: EventTarget> Drop for Listener<T> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.target.unlisten(self.event, token);
        }
    }
}

/// Registers one handler for every layout-changing event.
pub fn listen_layout<T: EventTarget>(target: &T, handler: Rc<dyn Fn()>) -> Vec<Listener<T>> {
    LAYOUT_EVENTS
        .iter()
        .map(|&event| Listener::new(target, event, handler.clone()))
        .collect()
}
