//! Pagination window: which page buttons to render
//!
//! Up to [`SMALL_WINDOW_MAX`] pages are all shown. Beyond that the window
//! keeps the first and last page plus a block around the current page, and
//! an ellipsis stands in for every gap of at least one hidden page.

use std::iter::once;

use crate::types::PageToken;

/// Largest page count rendered without ellipses
pub const SMALL_WINDOW_MAX: usize = 7;

/// Pages pinned at either end when the current page is near it
const EDGE_BLOCK: usize = 5;

/// Compute the page-button window for `current_page` of `total_pages`
pub fn compute_window(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }
    if total_pages <= SMALL_WINDOW_MAX {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let pages: Vec<usize> = if current <= EDGE_BLOCK - 1 {
        (1..=EDGE_BLOCK).chain(once(total_pages)).collect()
    } else if current >= total_pages - 3 {
        once(1)
            .chain(total_pages + 1 - EDGE_BLOCK..=total_pages)
            .collect()
    } else {
        vec![1, current - 1, current, current + 1, total_pages]
    };

    with_gaps(&pages)
}

/// Turn ascending page numbers into tokens, dropping repeats and inserting an
/// ellipsis wherever numbers are not adjacent.
fn with_gaps(pages: &[usize]) -> Vec<PageToken> {
    let mut tokens = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<usize> = None;

    for &page in pages {
        match previous {
            Some(prev) if page <= prev => continue,
            Some(prev) if page > prev + 1 => tokens.push(PageToken::Ellipsis),
            _ => {}
        }
        tokens.push(PageToken::Page(page));
        previous = Some(page);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis as E, Page as P};

    #[test]
    fn test_no_window_for_single_page() {
        assert!(compute_window(1, 0).is_empty());
        assert!(compute_window(1, 1).is_empty());
    }

    #[test]
    fn test_small_case_lists_every_page() {
        assert_eq!(compute_window(1, 3), vec![P(1), P(2), P(3)]);
        assert_eq!(
            compute_window(4, 7),
            vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7)]
        );
    }

    #[test]
    fn test_middle() {
        assert_eq!(
            compute_window(10, 20),
            vec![P(1), E, P(9), P(10), P(11), E, P(20)]
        );
    }

    #[test]
    fn test_near_start() {
        let expected = vec![P(1), P(2), P(3), P(4), P(5), E, P(20)];
        for current in 1..=4 {
            assert_eq!(compute_window(current, 20), expected, "page {}", current);
        }
    }

    #[test]
    fn test_near_end() {
        let expected = vec![P(1), E, P(16), P(17), P(18), P(19), P(20)];
        for current in 17..=20 {
            assert_eq!(compute_window(current, 20), expected, "page {}", current);
        }
    }

    #[test]
    fn test_region_boundaries() {
        assert_eq!(
            compute_window(5, 20),
            vec![P(1), E, P(4), P(5), P(6), E, P(20)]
        );
        assert_eq!(
            compute_window(16, 20),
            vec![P(1), E, P(15), P(16), P(17), E, P(20)]
        );
    }

    #[test]
    fn test_smallest_large_case() {
        assert_eq!(
            compute_window(1, 8),
            vec![P(1), P(2), P(3), P(4), P(5), E, P(8)]
        );
        assert_eq!(
            compute_window(5, 8),
            vec![P(1), E, P(4), P(5), P(6), P(7), P(8)]
        );
        assert_eq!(
            compute_window(5, 9),
            vec![P(1), E, P(4), P(5), P(6), E, P(9)]
        );
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(compute_window(0, 20), compute_window(1, 20));
        assert_eq!(compute_window(99, 20), compute_window(20, 20));
    }

    #[test]
    fn test_window_validity_exhaustive() {
        for total in 0..=60 {
            for current in 0..=total + 2 {
                let window = compute_window(current, total);
                let mut last_page = 0;
                let mut last_was_ellipsis = false;

                for (i, token) in window.iter().enumerate() {
                    match *token {
                        PageToken::Page(n) => {
                            assert!(n >= 1 && n <= total, "{} out of range for {}", n, total);
                            assert!(n > last_page, "not ascending at {:?}", window);
                            if i > 0 && !last_was_ellipsis {
                                assert_eq!(n, last_page + 1, "hidden gap in {:?}", window);
                            }
                            last_page = n;
                            last_was_ellipsis = false;
                        }
                        PageToken::Ellipsis => {
                            assert!(i > 0 && !last_was_ellipsis, "bad ellipsis in {:?}", window);
                            last_was_ellipsis = true;
                        }
                    }
                }

                // An ellipsis always hides at least one page
                for pair in window.windows(3) {
                    if let [P(a), E, P(b)] = pair {
                        assert!(*b >= *a + 2, "empty gap in {:?}", window);
                    }
                }

                if total > 1 {
                    assert_eq!(window.first(), Some(&P(1)));
                    assert_eq!(window.last(), Some(&P(total)));
                    let clamped = current.clamp(1, total);
                    assert!(window.contains(&P(clamped)), "current missing in {:?}", window);
                }
                assert!(!last_was_ellipsis);
            }
        }
    }
}
