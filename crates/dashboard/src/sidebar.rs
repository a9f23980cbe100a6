//! Sidebar open/closed state, expressed as a class on the page body.

pub const SIDEBAR_OPEN_CLASS: &str = "sidebar-open";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Overlay and navigation item clicks.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn body_class(&self) -> Option<&'static str> {
        self.open.then_some(SIDEBAR_OPEN_CLASS)
    }
}
