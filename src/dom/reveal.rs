// reveal.rs - IntersectionObserver driving a RevealLedger
//
// One watcher per option set. Targets are observed for the page lifetime;
// the ledger keeps the effect one-shot.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{set_class, Page};
use crate::error::{Result, SiteError};
use crate::reveal::{RevealEffect, RevealLedger, RevealOptions};

pub struct RevealWatcher {
    observer: IntersectionObserver,
    ledger: Rc<RefCell<RevealLedger<Element>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealWatcher {
    pub fn new(options: RevealOptions) -> Result<Self> {
        let ledger = Rc::new(RefCell::new(RevealLedger::new()));
        let effect = options.effect.clone();

        let seen = ledger.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if seen.borrow_mut().observe(&target, entry.is_intersecting()) {
                        apply_effect(&effect, &target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(SiteError::js)?;

        Ok(Self { observer, ledger, _callback: callback })
    }

    /// Watcher over every element matching `selector`.
    pub fn watch_all(page: &Page, selector: &str, options: RevealOptions) -> Result<Self> {
        let watcher = Self::new(options)?;
        let targets = page.query_all(selector);
        for el in &targets {
            watcher.observe(el);
        }
        log::debug!("watching {} elements for `{}`", targets.len(), selector);
        Ok(watcher)
    }

    pub fn observe(&self, el: &Element) {
        self.ledger.borrow_mut().track(el.clone());
        self.observer.observe(el);
    }

    pub fn tracked(&self) -> usize {
        self.ledger.borrow().len()
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn apply_effect(effect: &RevealEffect, el: &Element) {
    match effect {
        RevealEffect::AddClass(class) => set_class(el, class, true),
        RevealEffect::InlineAnimation(animation) => {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("animation", animation);
            }
        }
    }
}
