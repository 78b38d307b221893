// scroll.rs - Scroll-driven effects
//
// Three independent handlers, each reading the current offset itself:
// navbar style, active-section highlight, hero parallax.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{set_class, Listener, Page};
use crate::config::SiteConfig;
use crate::effects::{active_section, navbar_scrolled, parallax, SectionBox};
use crate::error::Result;

/// `last_scroll` receives the offset seen by the navbar handler.
pub fn wire(page: &Page, config: &SiteConfig, last_scroll: Rc<Cell<f64>>) -> Result<Vec<Listener>> {
    let window = page.window.clone();
    let mut listeners = Vec::with_capacity(3);

    if let Some(navbar) = page.query(&config.navbar) {
        let page = page.clone();
        let class = config.scrolled_class.clone();
        listeners.push(Listener::new(&window, "scroll", move |_| {
            let offset = page.scroll_offset();
            set_class(&navbar, &class, navbar_scrolled(offset));
            last_scroll.set(offset);
        })?);
    }

    let sections = page.query_all(&config.sections);
    if !sections.is_empty() {
        let page = page.clone();
        let links = page.query_all(&config.nav_link);
        let class = config.active_class.clone();
        listeners.push(Listener::new(&window, "scroll", move |_| {
            highlight(&sections, &links, &class, page.scroll_offset());
        })?);
    }

    if let Some(hero) = page.query(&config.hero_content).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        let page = page.clone();
        listeners.push(Listener::new(&window, "scroll", move |_| {
            let (_, vh) = page.viewport();
            let Some(p) = parallax(page.scroll_offset(), vh) else { return };
            let style = hero.style();
            let _ = style.set_property("transform", &p.transform());
            let _ = style.set_property("opacity", &p.opacity.to_string());
        })?);
    }

    Ok(listeners)
}

/// Layout is read on every call; sections may change height as content loads.
pub fn section_boxes(sections: &[Element]) -> Vec<SectionBox> {
    sections
        .iter()
        .filter_map(|el| {
            let html = el.dyn_ref::<HtmlElement>()?;
            Some(SectionBox {
                id: el.id(),
                top: html.offset_top() as f64,
                height: html.offset_height() as f64,
            })
        })
        .collect()
}

/// Mark the link for the section under `offset`. No matching section
/// leaves the links untouched.
pub fn highlight(sections: &[Element], links: &[Element], class: &str, offset: f64) {
    let boxes = section_boxes(sections);
    let Some(current) = active_section(offset, &boxes) else { return };
    let href = format!("#{}", current.id);
    for link in links {
        let on = link.get_attribute("href").as_deref() == Some(href.as_str());
        set_class(link, class, on);
    }
}
