/// One page of query results. Pages are numbered from 1.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub total_pages: usize,
    /// Results after this page.
    pub remaining: usize,
}

impl<T> Page<'_, T> {
    pub fn next_page(&self) -> Option<usize> {
        (self.remaining > 0).then_some(self.number + 1)
    }
}

pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let number = page.clamp(1, total_pages);
    let start = (number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Page {
        items: &items[start.min(end)..end],
        number,
        total_pages,
        remaining: items.len() - end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_and_remaining() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 10, 1);
        assert_eq!(page.items, &items[..10]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.remaining, 13);
        assert_eq!(page.next_page(), Some(2));
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 10, 3);
        assert_eq!(page.items, &[21, 22, 23]);
        assert_eq!(page.remaining, 0);
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&items, 10, 0).number, 1);
        assert_eq!(paginate(&items, 2, 99).items, &[5]);
    }

    #[test]
    fn empty_input_gives_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 10, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.next_page(), None);
    }
}
