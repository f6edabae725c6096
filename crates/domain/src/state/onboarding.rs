//! First-run tutorial pager.

pub const ONBOARDING_PAGES: usize = 5;

/// Tutorial state; pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Onboarding {
    current_page: usize,
    open: bool,
    dont_show_again: bool,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self {
            current_page: 1,
            open: false,
            dont_show_again: false,
        }
    }
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        ONBOARDING_PAGES
    }

    pub fn dont_show_again(&self) -> bool {
        self.dont_show_again
    }

    pub fn set_dont_show_again(&mut self, value: bool) {
        self.dont_show_again = value;
    }

    pub fn open(&mut self) {
        self.open = true;
        self.current_page = 1;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page == ONBOARDING_PAGES
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.current_page > 1 && self.go_to(self.current_page - 1)
    }

    /// Jumps to a page (dot navigation). Out-of-range pages are ignored.
    pub fn go_to(&mut self, page: usize) -> bool {
        if !(1..=ONBOARDING_PAGES).contains(&page) || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_clamped() {
        let mut onboarding = Onboarding::new();
        onboarding.open();
        assert!(onboarding.is_first());
        assert!(!onboarding.prev());
        for _ in 0..10 {
            onboarding.next();
        }
        assert!(onboarding.is_last());
        assert_eq!(onboarding.current_page(), ONBOARDING_PAGES);
        assert!(!onboarding.next());
    }

    #[test]
    fn dot_navigation() {
        let mut onboarding = Onboarding::new();
        assert!(onboarding.go_to(3));
        assert!(!onboarding.go_to(0));
        assert!(!onboarding.go_to(6));
        assert_eq!(onboarding.current_page(), 3);
        onboarding.open();
        assert_eq!(onboarding.current_page(), 1);
    }
}
