pub mod debounce;
pub mod render;
pub mod results;
pub mod search;
pub mod shortcuts;
pub mod sidebar;
pub mod toast;

pub use debounce::Debouncer;
pub use results::{KeyOutcome, Navigation, ResultsView, SearchController, SearchTiming};
pub use shortcuts::{GlobalKey, Key};
pub use sidebar::SidebarState;
pub use toast::{ToastId, ToastKind, ToastQueue};

use class_notes_doc_model::Catalog;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub search: SearchController,
    pub sidebar: SidebarState,
    pub toasts: ToastQueue,
    toast_duration_ms: u64,
}

impl Dashboard {
    pub fn new(catalog: Catalog, timing: SearchTiming, toast_duration_ms: u64) -> Self {
        Self {
            search: SearchController::new(catalog, timing),
            sidebar: SidebarState::default(),
            toasts: ToastQueue::new(),
            toast_duration_ms,
        }
    }

    pub fn toast_duration_ms(&self) -> u64 {
        self.toast_duration_ms
    }

    pub fn notify(&mut self, message: &str, kind: ToastKind, now_ms: u64) -> ToastId {
        self.toasts.show(message, kind, self.toast_duration_ms, now_ms)
    }

    /// Navigation links in the sidebar close it.
    pub fn nav_item_clicked(&mut self) {
        self.sidebar.close();
    }

    /// Runs all due timers. Returns `true` when the result panel changed or a
    /// toast was removed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let search_changed = self.search.tick(now_ms);
        let removed = self.toasts.tick(now_ms);
        search_changed || !removed.is_empty()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Catalog::builtin(), SearchTiming::default(), toast::DEFAULT_TOAST_DURATION_MS)
    }
}
