//! Site base path handling.

use serde::Serialize;

/// Project segment the portal is published under on GitHub Pages.
pub const DEFAULT_SEGMENT: &str = "/class_notes/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl BasePath {
    pub fn root() -> Self {
        Self("/".to_owned())
    }

    pub fn new(base: &str) -> Self {
        let mut base = base.to_owned();
        if !base.starts_with('/') {
            base.insert(0, '/');
        }
        if !base.ends_with('/') {
            base.push('/');
        }
        Self(base)
    }

    /// Picks the project segment when the page path contains it, the root otherwise.
    pub fn detect(pathname: &str, segment: &str) -> Self {
        let candidate = Self::new(segment);
        if pathname.contains(candidate.as_str()) {
            candidate
        } else {
            Self::root()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Rewrites a relative asset URL onto this base.
    ///
    /// Absolute `http(s)` URLs and URLs already under the base are returned
    /// unchanged, so applying this twice gives the same result as once.
    pub fn with_base(&self, url: &str) -> String {
        if url.is_empty() {
            return String::new();
        }

        if url.starts_with("http") {
            return url.to_owned();
        }

        if url.starts_with(self.as_str()) || url.starts_with(DEFAULT_SEGMENT) {
            return url.to_owned();
        }

        let clean_url = url.strip_prefix('/').unwrap_or(url);
        format!("{}{clean_url}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_project_segment_from_page_path() {
        let base = BasePath::detect("/class_notes/viewer.html", DEFAULT_SEGMENT);
        assert_eq!(base.as_str(), "/class_notes/");

        let root = BasePath::detect("/viewer.html", DEFAULT_SEGMENT);
        assert!(root.is_root());
    }

    #[test]
    fn new_normalizes_slashes() {
        assert_eq!(BasePath::new("docs").as_str(), "/docs/");
        assert_eq!(BasePath::new("/docs/").as_str(), "/docs/");
    }

    #[test]
    fn rewrites_relative_urls_under_the_base() {
        let base = BasePath::new(DEFAULT_SEGMENT);

        assert_eq!(base.with_base("/public/a.pdf"), "/class_notes/public/a.pdf");
        assert_eq!(base.with_base("public/a.pdf"), "/class_notes/public/a.pdf");
        assert_eq!(base.with_base("/class_notes/public/a.pdf"), "/class_notes/public/a.pdf");
    }

    #[test]
    fn root_base_keeps_paths_root_relative() {
        let base = BasePath::root();

        assert_eq!(base.with_base("public/a.pdf"), "/public/a.pdf");
        assert_eq!(base.with_base("/public/a.pdf"), "/public/a.pdf");
    }

    #[test]
    fn absolute_and_empty_urls_pass_through() {
        let base = BasePath::new(DEFAULT_SEGMENT);

        assert_eq!(base.with_base(""), "");
        assert_eq!(
            base.with_base("https://cdn.example.org/a.jpg"),
            "https://cdn.example.org/a.jpg"
        );
    }

    #[test]
    fn with_base_is_idempotent() {
        let urls = ["", "a.jpg", "/a.jpg", "x/y/Slide3.png", "http://h/a", "/class_notes/a"];

        for base in [BasePath::root(), BasePath::new(DEFAULT_SEGMENT), BasePath::new("/site")] {
            for url in urls {
                let once = base.with_base(url);
                assert_eq!(base.with_base(&once), once, "base={} url={url}", base.as_str());
            }
        }
    }
}
