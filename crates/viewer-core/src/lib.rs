pub mod base_path;
pub mod params;
pub mod state;

pub use base_path::{BasePath, DEFAULT_SEGMENT};
pub use params::{PageLocation, ViewerError, ViewerMode, ViewerParams};
pub use state::{
    Thumbnail, ViewerAction, ViewerFrame, ViewerPage, ViewerPanel, ViewerState,
    IMAGE_MODE_ONLY_MESSAGE,
};

/// Result of a slide image request. Failures are absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoad {
    Loaded,
    Failed,
}

/// Slide numbers (1-based) worth fetching ahead of time, nearest first.
pub fn preload_slides(current: u32, total: u32, radius: u32) -> Vec<u32> {
    if total == 0 || current == 0 {
        return Vec::new();
    }

    // Offsets past the farther deck edge cannot yield a slide.
    let reach = radius.min((current - 1).max(total.saturating_sub(current)));
    let mut slides = Vec::new();

    for offset in 1..=reach {
        if let Some(lower) = current.checked_sub(offset).filter(|lower| *lower >= 1) {
            slides.push(lower);
        }

        let upper = current.saturating_add(offset);
        if upper <= total && upper != current {
            slides.push(upper);
        }
    }

    slides
}
