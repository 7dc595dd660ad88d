/// One page of an ordered list.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Cut page `page` (1-indexed) of `page_size` items out of `items`.
///
/// `total_pages` is never below 1. A page past the end yields an empty slice
/// instead of being clamped.
pub fn slice<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = if page == 0 || start >= items.len() {
        &items[..0]
    } else {
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    };

    Page { items, total_pages }
}

/// Current page number of one paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageCursor {
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Advance unless already on the last page. Returns whether it moved.
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Step back unless already on the first page. Returns whether it moved.
    pub fn prev(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}
