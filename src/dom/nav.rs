// nav.rs - Smooth-scroll navigation and the mobile menu toggle

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{set_class, Listener, Page};
use crate::config::SiteConfig;
use crate::error::Result;

pub fn wire(page: &Page, config: &SiteConfig) -> Result<Vec<Listener>> {
    let links = page.query_all(&config.nav_link);
    let menu = page.query(&config.nav_menu);
    let mut listeners = Vec::with_capacity(links.len() + 1);

    for link in &links {
        let page = page.clone();
        let links = links.clone();
        let clicked = link.clone();
        let menu = menu.clone();
        let active = config.active_class.clone();

        listeners.push(Listener::new(link, "click", move |event| {
            event.prevent_default();

            let target = clicked.get_attribute("href").and_then(|href| page.query(&href));
            if let Some(section) = target {
                scroll_to(&section);
            }

            // Highlight even when the target section is missing
            activate(&links, &clicked, &active);

            if let Some(menu) = &menu {
                set_class(menu, &active, false);
            }
        })?);
    }

    let toggle = page.query(&config.menu_toggle);
    if let (Some(toggle), Some(menu)) = (toggle, menu) {
        let active = config.active_class.clone();
        listeners.push(Listener::new(&toggle, "click", move |_| {
            let _ = menu.class_list().toggle(&active);
        })?);
    }

    log::debug!("navigation wired: {} links", links.len());
    Ok(listeners)
}

fn scroll_to(section: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Exactly one link carries the active class afterwards.
pub fn activate(links: &[Element], chosen: &Element, class: &str) {
    for link in links {
        set_class(link, class, false);
    }
    set_class(chosen, class, true);
}
