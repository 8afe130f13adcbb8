pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`. Pages past the end, and page 0,
/// are empty.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let Some(index) = (page as usize).checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_ten_items() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 1), &items[0..10]);
    }

    #[test]
    fn pages_are_contiguous_slices() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 2), &items[10..20]);
        assert_eq!(paginate(&items, 3), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 1000).is_empty());
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, u32::MAX).is_empty());
        assert!(paginate::<u32>(&[], 1).is_empty());
    }

    #[test]
    fn never_more_than_a_page() {
        let items: Vec<u32> = (0..95).collect();
        for page in 1..=12 {
            let slice = paginate(&items, page);
            assert!(slice.len() <= QUESTIONS_PER_PAGE);
            if let Some(first) = slice.first() {
                assert_eq!(*first as usize, (page as usize - 1) * QUESTIONS_PER_PAGE);
            }
        }
    }
}
