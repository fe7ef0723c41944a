use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
    pub has_more: bool,
}

impl<T> Page<T> {
    #[must_use]
    pub fn slice(all: &[T], offset: usize, limit: usize) -> Self
    where
        T: Clone,
    {
        let total = all.len();
        let start = offset.min(total);
        let end = start.saturating_add(limit).min(total);
        Self {
            items: all[start..end].to_vec(),
            offset,
            limit,
            total,
            has_more: end < total,
        }
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            total: self.total,
            has_more: self.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn slice_reports_has_more_until_last_page() {
        let all: Vec<u32> = (0..45).collect();
        let first = Page::slice(&all, 0, 20);
        assert_eq!(first.items.len(), 20);
        assert!(first.has_more);

        let last = Page::slice(&all, 40, 20);
        assert_eq!(last.items, vec![40, 41, 42, 43, 44]);
        assert!(!last.has_more);
        assert_eq!(last.total, 45);
    }

    #[test]
    fn offset_past_end_yields_empty_page() {
        let all = vec!["a", "b"];
        let page = Page::slice(&all, 10, 5);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }
}
