use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::layout::{LayoutProvider, ScrollDriver, SectionGeometry};
use super::listener::EventTarget;
use super::section::SectionId;

/// Layout reads against the live document.
pub struct DomLayout {
    window: Window,
    document: Document,
    header_selector: String,
}

impl DomLayout {
    pub fn new(header_selector: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            header_selector: header_selector.to_string(),
        })
    }

    fn section_element(&self, id: SectionId) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl LayoutProvider for DomLayout {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        let element = self.section_element(id)?;
        Some(SectionGeometry::new(
            element.offset_top() as f64,
            element.offset_height() as f64,
        ))
    }

    fn viewport_top(&self, id: SectionId) -> Option<f64> {
        self.document
            .get_element_by_id(id.as_str())
            .map(|element| element.get_bounding_client_rect().top())
    }

    fn header_height(&self) -> Option<f64> {
        self.document
            .query_selector(&self.header_selector)
            .ok()
            .flatten()
            .map(|header| header.get_bounding_client_rect().height())
    }
}

#[derive(Clone)]
pub struct WindowTarget(pub Window);

impl ScrollDriver for WindowTarget {
    fn smooth_scroll_to(&self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_to_with_scroll_to_options(&options);
    }
}

impl EventTarget for WindowTarget {
    type Token = Closure<dyn FnMut()>;

    fn listen(&self, event: &'static str, handler: Rc<dyn Fn()>) -> Self::Token {
        let callback = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = self
            .0
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        callback
    }

    fn unlisten(&self, event: &'static str, token: Self::Token) {
        let _ = self
            .0
            .remove_event_listener_with_callback(event, token.as_ref().unchecked_ref());
    }
}
