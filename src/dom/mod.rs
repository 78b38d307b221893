// dom/ - Browser wiring
//
// Thin adapters between web-sys and the pure modules. Every handler is a
// `Listener`, which detaches itself when dropped.

mod canvas;
mod contact;
mod nav;
mod reveal;
mod scroll;

pub use canvas::CanvasSurface;
pub use contact::{field_value, wire as wire_contact};
pub use nav::wire as wire_nav;
pub use reveal::{apply_effect, RevealWatcher};
pub use scroll::{highlight, section_boxes, wire as wire_scroll};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::{Result, SiteError};

/// Window + document pair, cheap to clone into closures.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// First match; invalid selectors count as no match.
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        query_all_in(&self.document, selector)
    }

    /// CSS pixel size of the layout viewport
    pub fn viewport(&self) -> (f64, f64) {
        let dim = |v: std::result::Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (dim(self.window.inner_width()), dim(self.window.inner_height()))
    }

    pub fn scroll_offset(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }
}

pub fn query_all_in(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else { return Vec::new() };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove a class; failures are ignored (the class list only throws
/// on malformed tokens).
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// An attached event handler. Dropping it removes the listener.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(SiteError::js)?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
