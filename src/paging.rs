//! Pager View Model
//!
//! Pure page-window math behind the pager controls.

/// Current position within the server-reported page count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Pager {
    /// A backend reporting zero pages still renders as one page.
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page,
            total_pages: total_pages.max(1),
        }
    }

    pub fn at_first(&self) -> bool {
        self.page == 0
    }

    pub fn at_last(&self) -> bool {
        self.page + 1 >= self.total_pages
    }

    /// Target of the "previous" control, clamped at the first page
    pub fn prev(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    /// Target of the "next" control, clamped at the last page
    pub fn next(&self) -> u32 {
        (self.page + 1).min(self.total_pages - 1)
    }

    pub fn label(&self) -> String {
        format!("Página {} de {}", self.page + 1, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_on_single_page() {
        let pager = Pager::new(0, 1);
        assert!(pager.at_first());
        assert!(pager.at_last());
        assert_eq!(pager.prev(), 0);
        assert_eq!(pager.next(), 0);
    }

    #[test]
    fn test_middle_page_navigates_both_ways() {
        let pager = Pager::new(1, 3);
        assert!(!pager.at_first());
        assert!(!pager.at_last());
        assert_eq!(pager.prev(), 0);
        assert_eq!(pager.next(), 2);
    }

    #[test]
    fn test_last_page_clamps_next() {
        let pager = Pager::new(2, 3);
        assert!(pager.at_last());
        assert_eq!(pager.next(), 2);
        assert_eq!(pager.prev(), 1);
    }

    #[test]
    fn test_zero_total_pages_counts_as_one() {
        let pager = Pager::new(0, 0);
        assert_eq!(pager.total_pages, 1);
        assert!(pager.at_last());
        assert_eq!(pager.label(), "Página 1 de 1");
    }

    #[test]
    fn test_label() {
        assert_eq!(Pager::new(1, 5).label(), "Página 2 de 5");
    }
}
