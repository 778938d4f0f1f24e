//! Incremental reveal of a filtered listing.

/// Items shown before the first sentinel trigger.
pub const INITIAL_COUNT: usize = 12;

/// Items added per sentinel trigger.
pub const INCREMENT_COUNT: usize = 12;

// == Reveal ==
/// Bounded visible count that grows each time the trailing sentinel scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    initial: usize,
    increment: usize,
    visible: usize,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(INITIAL_COUNT, INCREMENT_COUNT)
    }
}

impl Reveal {
    pub fn new(initial: usize, increment: usize) -> Self {
        Self {
            initial,
            increment,
            visible: initial,
        }
    }

    /// Number of items to show out of `total` matches.
    pub fn visible(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    /// True while the sentinel would still reveal something.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Sentinel became visible: grow by one increment, capped at `total`.
    ///
    /// Returns false when everything was already shown.
    pub fn reveal_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.visible = (self.visible + self.increment).min(total);
        true
    }

    /// Back to the initial count; called whenever the filter changes.
    pub fn reset(&mut self) {
        self.visible = self.initial;
    }
}
