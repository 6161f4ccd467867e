//! Fixed-size pagination over ordered question listings.

use std::ops::Range;

/// Number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parse a raw `page` query value.
///
/// Absent, non-numeric, and non-positive values all mean page 1. A page
/// number too large for `u32` saturates, so it still lands past the end.
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(s) = raw.map(str::trim) else {
        return 1;
    };
    match s.parse::<u32>() {
        Ok(0) => 1,
        Ok(p) => p,
        Err(_) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => u32::MAX,
        Err(_) => 1,
    }
}

/// Half-open index window `[(page-1)*10, page*10)` for a page. Page 0 is page 1.
pub fn page_window(page: u32) -> Range<usize> {
    let start = (page.max(1) as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    start..start.saturating_add(QUESTIONS_PER_PAGE)
}

/// Return the slice of `items` belonging to `page`.
///
/// A window past the end yields an empty slice; this never panics.
pub fn paginate<T>(page: u32, items: &[T]) -> &[T] {
    let window = page_window(page);
    let start = window.start.min(items.len());
    let end = window.end.min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `count` items. Zero items is zero pages.
pub fn total_pages(count: u64) -> u64 {
    count.div_ceil(QUESTIONS_PER_PAGE as u64)
}
