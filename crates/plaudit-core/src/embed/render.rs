//! Render-time rules shared by every widget surface.

/// Number of grid columns actually rendered.
///
/// Never more columns than items: two testimonials in a four-column grid
/// render as two columns.
#[inline]
pub fn effective_columns(columns: u8, item_count: usize) -> usize {
    usize::from(columns).min(item_count)
}
