//! Page arithmetic.

/// `ceil(count / page_size)`, minimum 1 even for an empty set.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Snaps a requested page into `[1, total]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Half-open slice bounds of one page over `count` records. The page number
/// is clamped first, so the bounds always lie within the set.
pub fn page_bounds(count: usize, current_page: usize, page_size: usize) -> (usize, usize) {
    let size = page_size.max(1);
    let page = clamp_page(current_page, total_pages(count, size));
    let start = (page - 1) * size;
    (start.min(count), (start + size).min(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling_with_floor_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 2), 2);
    }

    #[test]
    fn pages_clamp_to_valid_range() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn bounds_cover_full_and_partial_pages() {
        assert_eq!(page_bounds(3, 1, 2), (0, 2));
        assert_eq!(page_bounds(3, 2, 2), (2, 3));
        // Past-the-end requests clamp to the last page.
        assert_eq!(page_bounds(3, 3, 2), (2, 3));
        assert_eq!(page_bounds(0, 1, 2), (0, 0));
    }
}
