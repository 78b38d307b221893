// contact.rs - Contact form record and delivery
//
// Fields are looked up by their `name` attribute, so markup order does not
// matter. Delivery goes through a `Submitter`; the bundled one logs.

use serde::Serialize;

use crate::error::{Result, SiteError};

pub const FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Build from a field lookup keyed by field name.
    pub fn collect<F>(mut read: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        let mut field = |name: &'static str| read(name).ok_or(SiteError::MissingField(name));
        Ok(Self {
            name: field("name")?,
            email: field("email")?,
            subject: field("subject")?,
            message: field("message")?,
        })
    }
}

/// Delivers a contact record (mail relay, API call, ...).
pub trait Submitter {
    fn submit(&self, message: &ContactMessage) -> Result<()>;
}

/// Reports the record to the log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<()> {
        log::info!("Form submitted: {}", serde_json::to_string(message)?);
        Ok(())
    }
}

/// Read, then deliver. The caller resets the form only on `Ok`.
pub fn handle_submission<F>(read: F, submitter: &dyn Submitter) -> Result<ContactMessage>
where
    F: FnMut(&'static str) -> Option<String>,
{
    let message = ContactMessage::collect(read)?;
    submitter.submit(&message)?;
    Ok(message)
}
