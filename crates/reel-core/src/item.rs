//! Showcase items and the doubled display sequence.

/// One card on the track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    pub category: String,
}

impl Item {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            image_url: image_url.into(),
            category: category.into(),
        }
    }

    /// Stable DOM key for the card at `slot` of the display sequence.
    ///
    /// The same item appears twice on the track, so the id alone is not unique.
    pub fn key(&self, slot: usize) -> String {
        format!("{}-{}", self.id, slot)
    }
}

/// The item list followed by one full copy of itself.
///
/// Translating the track by exactly one copy's width lands on a card layout
/// identical to the starting one, which is what lets the auto-scroll restart
/// without a visible jump.
pub fn display_sequence(items: &[Item]) -> Vec<Item> {
    let mut out = Vec::with_capacity(items.len() * 2);
    out.extend_from_slice(items);
    out.extend_from_slice(items);
    out
}
