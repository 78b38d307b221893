// effects.rs - Scroll and pointer arithmetic
//
// Pure functions; dom/scroll.rs and app.rs feed them live page values.

/// Offset past which the navbar switches to its compact style
pub const NAVBAR_THRESHOLD: f64 = 100.0;
/// Sections count as reached this many pixels before their top edge
pub const SECTION_LEAD: f64 = 100.0;
/// Hero content moves at this fraction of the scroll speed
pub const PARALLAX_RATE: f64 = 0.5;

/// Strictly greater: exactly 100px is still "top of page".
pub fn navbar_scrolled(offset: f64) -> bool {
    offset > NAVBAR_THRESHOLD
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    /// Half-open (start, start + height]: where two sections meet, the
    /// boundary offset belongs to the upper one.
    pub fn contains(&self, offset: f64) -> bool {
        let start = self.top - SECTION_LEAD;
        offset > start && offset <= start + self.height
    }
}

/// Last section in document order whose range holds `offset`.
pub fn active_section(offset: f64, sections: &[SectionBox]) -> Option<&SectionBox> {
    sections.iter().rev().find(|s| s.contains(offset))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

/// Hero offset and fade for a scroll position.
///
/// Recomputed on every scroll: the offset is clamped to one viewport height,
/// so past the fold the hero rests fully faded and scrolling back (even after
/// a resize moved the fold) restores it. `None` for a zero-height viewport.
pub fn parallax(offset: f64, viewport_height: f64) -> Option<Parallax> {
    if viewport_height <= 0.0 { return None; }
    let o = offset.clamp(0.0, viewport_height);
    Some(Parallax {
        translate_y: o * PARALLAX_RATE,
        opacity: 1.0 - o / viewport_height,
    })
}

/// Client coordinates to [-1, 1] on both axes, y pointing up.
pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 { return (0.0, 0.0); }
    let x = client_x / width * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    (x as f32, y as f32)
}
