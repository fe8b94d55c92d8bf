// src/domain/pagination.rs

/// Fixed page size for the browse grid.
pub const PAGE_SIZE: usize = 8;

/// `max(1, ceil(result_count / page_size))` — an empty result set still
/// has one (empty) page.
pub fn total_pages(result_count: usize, page_size: usize) -> usize {
    result_count.div_ceil(page_size).max(1)
}

/// Resolves a caller-held page number against a freshly computed page
/// count. A request past the last page resets to page 1 (policy: reset,
/// not clamp), and anything below 1 is treated as 1.
pub fn resolve_page(requested: usize, total_pages: usize) -> usize {
    if requested < 1 || requested > total_pages {
        1
    } else {
        requested
    }
}

/// The slice `[(page-1)*page_size, page*page_size)` of `items`, empty if
/// the range falls outside the sequence. `page` is 1-based and assumed
/// already resolved via [`resolve_page`].
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}
