// contact.rs - Contact form submit handler

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{Listener, Page};
use crate::config::SiteConfig;
use crate::contact::{handle_submission, Submitter};
use crate::error::Result;

/// `None` when the page has no contact form.
pub fn wire(page: &Page, config: &SiteConfig, submitter: Rc<dyn Submitter>) -> Result<Option<Listener>> {
    let Some(form) = page.query(&config.contact_form).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) else {
        return Ok(None);
    };

    let window = page.window.clone();
    let ack = config.acknowledgement.clone();
    let target = form.clone();

    let listener = Listener::new(&target, "submit", move |event| {
        event.prevent_default();
        match handle_submission(|name| field_value(&form, name), submitter.as_ref()) {
            Ok(_) => {
                if let Some(text) = &ack {
                    let _ = window.alert_with_message(text);
                }
                form.reset();
            }
            Err(err) => log::error!("contact form not sent: {err}"),
        }
    })?;
    Ok(Some(listener))
}

/// Value of the input or textarea whose `name` attribute matches.
pub fn field_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    let el = form.query_selector(&format!("[name=\"{name}\"]")).ok().flatten()?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}
