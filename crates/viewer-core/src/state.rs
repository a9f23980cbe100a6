use crate::base_path::{BasePath, DEFAULT_SEGMENT};
use crate::params::{PageLocation, ViewerMode, ViewerParams};
use crate::{preload_slides, ImageLoad};
use serde::Serialize;

pub const IMAGE_MODE_ONLY_MESSAGE: &str = "Only Image Mode is supported in this static version.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Next,
    Previous,
    GoTo(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerState {
    pub mode: ViewerMode,
    pub base: BasePath,
    pub src: String,
    pub download: Option<String>,
    pub prefix: String,
    pub ext: String,
    current: u32,
    total: u32,
    loading: bool,
}

/// Everything the page shows for the current slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerFrame {
    pub image_src: String,
    pub counter: String,
    pub active_thumbnail: u32,
    pub scroll_to: u32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub preload: Vec<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub number: u32,
    pub src: String,
    pub active: bool,
}

impl ViewerState {
    pub fn new(params: ViewerParams, base: BasePath) -> Self {
        Self {
            mode: params.mode,
            base,
            src: params.src,
            download: params.download,
            prefix: params.prefix,
            ext: params.ext,
            current: 1,
            total: params.count.max(1),
            loading: true,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Image URL for slide `number`: `{src}/{prefix}{number}{ext}` on the site base.
    pub fn slide_src(&self, number: u32) -> String {
        let mut dir = self.src.clone();
        if !dir.is_empty() && !dir.ends_with('/') {
            dir.push('/');
        }

        self.base.with_base(&format!("{dir}{}{number}{}", self.prefix, self.ext))
    }

    /// Applies a navigation action. Returns `false` when the slide did not change.
    pub fn apply(&mut self, action: ViewerAction) -> bool {
        let target = match action {
            ViewerAction::Next if self.current < self.total => self.current + 1,
            ViewerAction::Previous if self.current > 1 => self.current - 1,
            ViewerAction::GoTo(number) if (1..=self.total).contains(&number) => number,
            _ => {
                tracing::debug!(
                    ?action,
                    current = self.current,
                    total = self.total,
                    "navigation ignored"
                );
                return false;
            }
        };

        if target == self.current {
            return false;
        }

        self.current = target;
        self.loading = true;
        tracing::debug!(current = self.current, total = self.total, "slide changed");
        true
    }

    pub fn next(&mut self) -> bool {
        self.apply(ViewerAction::Next)
    }

    pub fn previous(&mut self) -> bool {
        self.apply(ViewerAction::Previous)
    }

    pub fn go_to(&mut self, number: u32) -> bool {
        self.apply(ViewerAction::GoTo(number))
    }

    /// Main image finished (or failed) loading; either way the spinner goes away.
    pub fn finish_image_load(&mut self, outcome: ImageLoad) {
        if let ImageLoad::Failed = outcome {
            tracing::debug!(src = %self.slide_src(self.current), "slide image failed to load");
        }
        self.loading = false;
    }

    pub fn frame(&self) -> ViewerFrame {
        self.frame_with_radius(1)
    }

    pub fn frame_with_radius(&self, preload_radius: u32) -> ViewerFrame {
        let preload = preload_slides(self.current, self.total, preload_radius)
            .into_iter()
            .map(|number| self.slide_src(number))
            .collect();

        ViewerFrame {
            image_src: self.slide_src(self.current),
            counter: format!("{} / {}", self.current, self.total),
            active_thumbnail: self.current,
            scroll_to: self.current,
            prev_disabled: self.current <= 1,
            next_disabled: self.current >= self.total,
            preload,
            loading: self.loading,
        }
    }

    pub fn thumbnails(&self) -> impl Iterator<Item = Thumbnail> + '_ {
        (1..=self.total).map(move |number| Thumbnail {
            number,
            src: self.slide_src(number),
            active: number == self.current,
        })
    }

    pub fn download_button(&self) -> Option<&str> {
        self.download.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewerPanel {
    Image,
    Message { text: String },
}

/// The viewer page as built at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerPage {
    pub state: ViewerState,
    pub panel: ViewerPanel,
}

impl ViewerPage {
    pub fn load(location: &PageLocation) -> Self {
        Self::load_with_segment(location, DEFAULT_SEGMENT)
    }

    pub fn load_with_segment(location: &PageLocation, segment: &str) -> Self {
        let base = BasePath::detect(&location.pathname, segment);
        let params = ViewerParams::from_query(&location.query, &base);
        let state = ViewerState::new(params, base);

        let panel = match state.mode {
            ViewerMode::Image => ViewerPanel::Image,
            ViewerMode::Default => {
                ViewerPanel::Message { text: IMAGE_MODE_ONLY_MESSAGE.to_owned() }
            }
        };

        tracing::debug!(
            base = state.base.as_str(),
            total = state.total,
            mode = ?state.mode,
            "viewer loaded"
        );

        Self { state, panel }
    }
}
