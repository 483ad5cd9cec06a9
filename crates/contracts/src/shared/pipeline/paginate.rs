/// Варианты «строк на странице» в селекторе.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 15, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Number of pages for `total` rows; at least 1 so an empty table still has a page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    let size = normalize_page_size(page_size);
    total.div_ceil(size).max(1)
}

/// Zero falls back to the default size.
pub fn normalize_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

/// One page window over an ordered slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, already clamped.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first row on this page (0 when empty).
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_row() + self.items.len() - 1
        }
    }
}

/// Slice `[(page-1)*size, page*size)` with `page` clamped to `[1, total_pages]`.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let size = normalize_page_size(page_size);
    let pages = total_pages(items.len(), size);
    let page = page.clamp(1, pages);
    let start = (page - 1) * size;
    let end = (start + size).min(items.len());
    Page {
        items: &items[start.min(end)..end],
        page,
        page_size: size,
        total_pages: pages,
        total_count: items.len(),
    }
}

/// Owned copy of a [`Page`], for view state that outlives the source slice.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedPage<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Default for OwnedPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 1,
            total_count: 0,
        }
    }
}

impl<T: Clone> Page<'_, T> {
    pub fn to_owned_page(&self) -> OwnedPage<T> {
        OwnedPage {
            items: self.items.to_vec(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let rows: Vec<u32> = (1..=23).collect();
        let page = paginate(&rows, 10, 5);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[21, 22, 23]);
        assert_eq!((page.first_row(), page.last_row()), (21, 23));
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_length_and_contiguity() {
        let rows: Vec<u32> = (0..47).collect();
        for size in PAGE_SIZE_OPTIONS {
            let pages = total_pages(rows.len(), size);
            for n in 1..=pages {
                let page = paginate(&rows, size, n);
                let expected = size.min(rows.len() - (n - 1) * size);
                assert_eq!(page.items.len(), expected);
                let start = (n - 1) * size;
                assert_eq!(page.items, &rows[start..start + expected]);
            }
        }
    }

    #[test]
    fn test_page_zero_and_empty_input() {
        let rows = vec!['a', 'b', 'c'];
        assert_eq!(paginate(&rows, 2, 0).page, 1);

        let empty: Vec<char> = Vec::new();
        let page = paginate(&empty, DEFAULT_PAGE_SIZE, 4);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.first_row(), 0);
    }

    #[test]
    fn test_zero_page_size_uses_default() {
        let rows: Vec<u32> = (0..20).collect();
        let page = paginate(&rows, 0, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.items.len(), 15);
        assert_eq!(total_pages(20, 0), 2);
    }

    #[test]
    fn test_owned_page_keeps_the_window() {
        let rows: Vec<u32> = (1..=23).collect();
        let owned = paginate(&rows, 10, 5).to_owned_page();
        assert_eq!(owned.items, vec![21, 22, 23]);
        assert_eq!(owned.page, 3);
        assert_eq!(owned.total_count, 23);
        assert_eq!(OwnedPage::<u32>::default().total_pages, 1);
    }
}
