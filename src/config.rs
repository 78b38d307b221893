// config.rs - Page contract
//
// Selectors and class names the script relies on. Defaults match the
// site's markup; tests and alternate pages override fields directly.

use crate::reveal::RevealOptions;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Element id of the background canvas (required)
    pub canvas_id: String,
    pub nav_link: String,
    pub nav_menu: String,
    pub menu_toggle: String,
    pub navbar: String,
    pub hero_content: String,
    pub contact_form: String,
    pub sections: String,
    pub reveal_targets: String,
    pub skill_bars: String,

    pub active_class: String,
    pub scrolled_class: String,

    pub reveal: RevealOptions,
    pub skill_reveal: RevealOptions,

    /// Shown with `alert` after a successful submission; `None` skips it.
    pub acknowledgement: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            canvas_id: "bg-canvas".into(),
            nav_link: ".nav-link".into(),
            nav_menu: ".nav-menu".into(),
            menu_toggle: ".menu-toggle".into(),
            navbar: ".navbar".into(),
            hero_content: ".hero-content".into(),
            contact_form: ".contact-form".into(),
            sections: "section[id]".into(),
            reveal_targets: "[data-aos]".into(),
            skill_bars: ".skill-progress".into(),
            active_class: "active".into(),
            scrolled_class: "scrolled".into(),
            reveal: RevealOptions::reveal(),
            skill_reveal: RevealOptions::skill_bars(),
            acknowledgement: Some("Thank you for your message! I'll get back to you soon.".into()),
        }
    }
}
