// error.rs - Failure modes for page wiring and the background scene
//
// Only a missing mount point is fatal. Optional page elements are skipped
// by the callers and never reach this type.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// A required mount point (the background canvas) is absent.
    #[error("missing required element `{0}`")]
    MissingMount(String),

    #[error("element `{0}` is not a {1}")]
    WrongElement(String, &'static str),

    #[error("2d canvas context unavailable")]
    NoContext,

    #[error("contact form has no field named `{0}`")]
    MissingField(&'static str),

    #[error("browser call failed: {0}")]
    Js(String),

    #[error("could not encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SiteError {
    /// Wrap an exception thrown by a browser API.
    pub fn js(value: JsValue) -> Self {
        match value.as_string() {
            Some(msg) => Self::Js(msg),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
