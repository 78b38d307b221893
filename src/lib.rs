// site-fx - Animated background and page effects for the personal site
//
// Pure modules carry every decision and are tested natively:
//   scene/   camera, particle field, wireframe torus, lights
//   render   scene -> display list
//   effects  scroll thresholds, section ranges, parallax, pointer mapping
//   reveal   one-shot reveal bookkeeping
//   contact  contact record + delivery trait
//
// dom/ and app wire them to the page through web-sys.

pub mod app;
pub mod config;
pub mod contact;
pub mod dom;
pub mod effects;
pub mod error;
pub mod render;
pub mod reveal;
pub mod rng;
pub mod scene;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub use config::SiteConfig;
pub use contact::{ContactMessage, LogSubmitter, Submitter};
pub use error::{Result, SiteError};

/// Entry point called by the page's module script.
#[wasm_bindgen(js_name = "startSite")]
pub fn start_site() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    app::boot(SiteConfig::default(), Rc::new(LogSubmitter))?;
    Ok(())
}

/// Stop the render loop and detach every handler.
#[wasm_bindgen(js_name = "shutdownSite")]
pub fn shutdown_site() {
    app::shutdown();
}

#[wasm_bindgen(js_name = "isRendering")]
pub fn is_rendering() -> bool {
    app::running().is_some_and(|app| app.is_rendering())
}
