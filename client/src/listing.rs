//! Presentation derivation for the recipe listing.
//!
//! Pure helpers turning [`RecipeListState`] into what a grid-style view
//! renders: fixed-size rows of recipe cards and the page-selector strip.

use crate::state::{RecipeListState, RecipeSummary};

/// Number of recipe cards per presentation row.
pub const CHUNK_SIZE: usize = 3;

/// Group the loaded recipes into rows of [`CHUNK_SIZE`], preserving order.
///
/// The last row may be shorter than the chunk size; it is never padded or
/// dropped. An empty listing yields no rows.
#[must_use]
pub fn chunk_rows(items: &[RecipeSummary]) -> Vec<&[RecipeSummary]> {
    items.chunks(CHUNK_SIZE).collect()
}

/// One entry in the page-selector strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    /// Page this control selects (dispatches a fetch for that page).
    pub number: u32,

    /// Whether this control is the visually distinguished current page.
    pub is_current: bool,
}

/// Enumerate the page-selector controls: `1..=total_pages`, with the
/// control matching `current_page` flagged.
#[must_use]
pub fn page_controls(state: &RecipeListState) -> Vec<PageControl> {
    (1..=state.total_pages)
        .map(|number| PageControl {
            number,
            is_current: number == state.current_page,
        })
        .collect()
}
