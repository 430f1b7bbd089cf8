//! Fixed-size pagination over the sorted item list.

/// Rows shown per page.
pub const PAGE_SIZE: usize = 4;

/// Number of pages needed for `total_items` rows. Zero for an empty list.
pub fn page_count(total_items: usize) -> usize {
    total_items.div_ceil(PAGE_SIZE)
}

/// The slice of `items` visible on a 1-based `page`.
///
/// A page past the end yields an empty slice rather than panicking; the
/// current page is deliberately not clamped when the list shrinks under it.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}
