//! Fixed-size pagination over the filtered records.
//!
//! Pages are 1-based. When there is nothing to show the page count is 0 and
//! the current page is 0 as well, so every slice comes back empty.

pub const PAGE_SIZE: usize = 10;

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Clamps `current` into `[1, total]`, or 0 when there are no pages.
pub fn clamp_page(current: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        current.clamp(1, total)
    }
}

/// Returns the window `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` clipped to `items`.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerKind {
    First,
    Prev,
    Page(usize),
    Next,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerButton {
    pub kind: PagerKind,
    pub label: String,
    /// Page this button navigates to.
    pub target: usize,
    pub enabled: bool,
}

/// Builds the pagination bar: `<<`, `<`, one button per page, `>`, `>>`.
pub fn pager_buttons(current: usize, total: usize) -> Vec<PagerButton> {
    let has_pages = total > 0;
    let at_first = current <= 1;
    let at_last = current >= total;

    let mut buttons = Vec::with_capacity(total + 4);
    buttons.push(PagerButton {
        kind: PagerKind::First,
        label: "<<".to_string(),
        target: 1,
        enabled: has_pages && !at_first,
    });
    buttons.push(PagerButton {
        kind: PagerKind::Prev,
        label: "<".to_string(),
        target: current.saturating_sub(1).max(1),
        enabled: has_pages && !at_first,
    });
    for page in 1..=total {
        buttons.push(PagerButton {
            kind: PagerKind::Page(page),
            label: page.to_string(),
            target: page,
            enabled: page != current,
        });
    }
    buttons.push(PagerButton {
        kind: PagerKind::Next,
        label: ">".to_string(),
        target: (current + 1).min(total),
        enabled: has_pages && !at_last,
    });
    buttons.push(PagerButton {
        kind: PagerKind::Last,
        label: ">>".to_string(),
        target: total,
        enabled: has_pages && !at_last,
    });
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
        assert_eq!(total_pages(46), 5);
    }

    #[test]
    fn clamp_into_range() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(2, 5), 2);
    }

    #[test]
    fn clamp_with_no_pages_is_zero() {
        assert_eq!(clamp_page(4, 0), 0);
        assert_eq!(clamp_page(0, 0), 0);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page_slice(&items, 3), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn full_page() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page_slice(&items, 2), &(10..20).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(page_slice(&items, 0).is_empty());
        assert!(page_slice(&items, 2).is_empty());
        assert!(page_slice(&items, usize::MAX).is_empty());
        let empty: Vec<usize> = Vec::new();
        assert!(page_slice(&empty, 1).is_empty());
    }

    #[test]
    fn pager_on_first_page() {
        let buttons = pager_buttons(1, 3);
        assert_eq!(buttons.len(), 7);
        assert!(!buttons[0].enabled);
        assert!(!buttons[1].enabled);
        assert!(!buttons[2].enabled, "current page button is disabled");
        assert!(buttons[3].enabled);
        assert!(buttons[5].enabled);
        assert!(buttons[6].enabled);
        assert_eq!(buttons[5].target, 2);
        assert_eq!(buttons[6].target, 3);
    }

    #[test]
    fn pager_on_last_page() {
        let buttons = pager_buttons(3, 3);
        assert!(buttons[0].enabled);
        assert!(buttons[1].enabled);
        assert_eq!(buttons[1].target, 2);
        assert!(!buttons[4].enabled);
        assert!(!buttons[5].enabled);
        assert!(!buttons[6].enabled);
    }

    #[test]
    fn pager_single_page_disables_all_arrows() {
        let buttons = pager_buttons(1, 1);
        let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["<<", "<", "1", ">", ">>"]);
        assert!(buttons.iter().all(|b| !b.enabled));
    }

    #[test]
    fn pager_without_pages() {
        let buttons = pager_buttons(0, 0);
        assert_eq!(buttons.len(), 4);
        assert!(buttons.iter().all(|b| !b.enabled));
    }
}
