//! Pagination and aggregation over filtered record lists.
//!
//! Filtering, pagination and aggregation are separate passes: views filter
//! first (preserving insertion order), then hand the filtered slice to
//! [`paginate`] for the visible window and to the per-domain stat types
//! for headline counts.

use std::collections::HashMap;
use std::hash::Hash;

/// One visible window into a filtered list.
///
/// Borrowed from the source slice — pagination never copies records.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The records on this page, in source order.
    pub items: &'a [T],

    /// 1-based page number, clamped into `1..=total_pages`.
    pub page_number: usize,

    pub page_size: usize,

    /// Total number of pages. At least 1, even for an empty list, so the
    /// pagination bar always has a current page to show.
    pub total_pages: usize,

    /// Length of the underlying (filtered) list.
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// 1-based index of the first record on this page, for "showing X-Y
    /// of Z" labels. 0 when the list is empty.
    pub fn first_index(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            (self.page_number - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last record on this page.
    pub fn last_index(&self) -> usize {
        (self.page_number - 1) * self.page_size + self.items.len()
    }
}

/// Slice out the `page_number`-th window of `page_size` records.
///
/// `page_number` is 1-based and clamped into range, so callers can pass a
/// stale page after the filtered list shrank and still get a valid window.
/// Concatenating pages `1..=total_pages` reproduces `items` exactly.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Page<'_, T> {
    // A zero page size would make every page empty and total_pages
    // meaningless; treat it as 1.
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page_number = page_number.clamp(1, total_pages);

    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(total_items);
    // start can equal total_items only when the list is empty (page 1 of 1).
    let items = &items[start.min(total_items)..end];

    Page {
        items,
        page_number,
        page_size,
        total_pages,
        total_items,
    }
}

/// Count records per category.
///
/// Only categories that occur appear in the map; closed-set displays that
/// must show zeros enumerate their variants and use [`HashMap::get`] with
/// a 0 default (see the per-domain stat types).
pub fn tally_by<T, K, F>(items: &[T], classify: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(classify(item)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_one_page() {
        let items: Vec<u32> = vec![];
        let page = paginate(&items, 5, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_number, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.first_index(), 0);
        assert_eq!(page.last_index(), 0);
    }

    #[test]
    fn test_exact_multiple() {
        let items: Vec<u32> = (1..=10).collect();
        let page = paginate(&items, 5, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items, &[6, 7, 8, 9, 10]);
        assert_eq!(page.first_index(), 6);
        assert_eq!(page.last_index(), 10);
    }

    #[test]
    fn test_remainder_page_is_short() {
        let items: Vec<u32> = (1..=12).collect();
        let page = paginate(&items, 5, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[11, 12]);
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let items: Vec<u32> = (1..=12).collect();
        let high = paginate(&items, 5, 99);
        assert_eq!(high.page_number, 3);
        assert_eq!(high.items, &[11, 12]);
        let low = paginate(&items, 5, 0);
        assert_eq!(low.page_number, 1);
        assert_eq!(low.items, &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_pages_cover_input_exactly() {
        let items: Vec<u32> = (1..=23).collect();
        let total = paginate(&items, 5, 1).total_pages;
        let mut rebuilt = Vec::new();
        for p in 1..=total {
            rebuilt.extend_from_slice(paginate(&items, 5, p).items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_zero_page_size_is_guarded() {
        let items: Vec<u32> = (1..=3).collect();
        let page = paginate(&items, 0, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[1]);
    }

    #[test]
    fn test_tally_by() {
        let words = ["a", "b", "a", "c", "a"];
        let counts = tally_by(&words, |w| *w);
        assert_eq!(counts.get("a"), Some(&3));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.get("z"), None);
    }
}
