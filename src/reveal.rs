// reveal.rs - One-shot "effect on first sight"
//
// A watcher is (threshold, root margin, effect). The ledger remembers which
// targets already fired so re-entering the viewport never re-applies.

#[derive(Debug, Clone, PartialEq)]
pub enum RevealEffect {
    /// Add a class to the element
    AddClass(String),
    /// Set the inline `animation` property
    InlineAnimation(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible, 0..=1
    pub threshold: f64,
    pub root_margin: Option<String>,
    pub effect: RevealEffect,
}

impl RevealOptions {
    /// Fade/slide-in for `[data-aos]` blocks
    pub fn reveal() -> Self {
        Self {
            threshold: 0.1,
            root_margin: Some("0px 0px -50px 0px".into()),
            effect: RevealEffect::AddClass("aos-animate".into()),
        }
    }

    /// Fill animation for skill progress bars
    pub fn skill_bars() -> Self {
        Self {
            threshold: 0.5,
            root_margin: None,
            effect: RevealEffect::InlineAnimation("fillBar 1.5s ease-in-out forwards".into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Waiting,
    Revealed,
}

#[derive(Debug, Clone)]
pub struct RevealLedger<K> {
    entries: Vec<(K, RevealState)>,
}

impl<K: PartialEq> RevealLedger<K> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn track(&mut self, key: K) {
        if self.state(&key).is_none() {
            self.entries.push((key, RevealState::Waiting));
        }
    }

    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, s)| *s)
    }

    /// Record an intersection report. True exactly once per tracked key:
    /// the first time it is reported intersecting.
    pub fn observe(&mut self, key: &K, intersecting: bool) -> bool {
        if !intersecting { return false; }
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, state @ RevealState::Waiting)) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<K: PartialEq> Default for RevealLedger<K> {
    fn default() -> Self { Self::new() }
}
