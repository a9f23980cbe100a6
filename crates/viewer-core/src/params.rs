//! Viewer query-string parameters.

use crate::base_path::BasePath;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

pub const DEFAULT_PREFIX: &str = "Slide";
pub const DEFAULT_EXT: &str = ".jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerMode {
    #[default]
    Default,
    Image,
}

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("invalid viewer URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerParams {
    pub mode: ViewerMode,
    pub src: String,
    pub count: u32,
    pub prefix: String,
    pub ext: String,
    pub download: Option<String>,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            mode: ViewerMode::Default,
            src: String::new(),
            count: 1,
            prefix: DEFAULT_PREFIX.to_owned(),
            ext: DEFAULT_EXT.to_owned(),
            download: None,
        }
    }
}

impl ViewerParams {
    /// Parses `mode`, `src`, `count`, `prefix`, `ext` and `download`.
    ///
    /// Missing or unusable values fall back to the defaults; the download link
    /// is rewritten onto `base`.
    pub fn from_query(query: &str, base: &BasePath) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        // First occurrence wins, as with URLSearchParams::get.
        let mut values: HashMap<String, String> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            values.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }

        let non_empty = |key: &str| values.get(key).filter(|value| !value.is_empty()).cloned();

        let mode = match values.get("mode").map(String::as_str) {
            Some("image") => ViewerMode::Image,
            _ => ViewerMode::Default,
        };

        let count = values.get("count").and_then(|raw| parse_leading_int(raw)).unwrap_or(1);

        let download = non_empty("download").map(|url| base.with_base(&url));

        Self {
            mode,
            src: values.get("src").cloned().unwrap_or_default(),
            count,
            prefix: non_empty("prefix").unwrap_or_else(|| DEFAULT_PREFIX.to_owned()),
            ext: non_empty("ext").unwrap_or_else(|| DEFAULT_EXT.to_owned()),
            download,
        }
    }
}

/// Where the viewer page was opened: path plus query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub pathname: String,
    pub query: String,
}

impl PageLocation {
    pub fn new(pathname: &str, query: &str) -> Self {
        Self { pathname: pathname.to_owned(), query: query.to_owned() }
    }

    /// Accepts absolute URLs as well as site-relative ones like `/viewer.html?mode=image`.
    pub fn parse(input: &str) -> Result<Self, ViewerError> {
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin = Url::parse("http://localhost/")?;
                origin.join(input)?
            }
            Err(error) => return Err(error.into()),
        };

        Ok(Self {
            pathname: url.path().to_owned(),
            query: url.query().unwrap_or_default().to_owned(),
        })
    }
}

/// Leading-digit integer parse; values below 1 are rejected and values past
/// `u32::MAX` saturate.
fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut value: Option<u32> = None;
    for digit in unsigned.chars().map_while(|ch| ch.to_digit(10)) {
        let current = value.unwrap_or(0);
        value = Some(current.saturating_mul(10).saturating_add(digit));
    }

    value.filter(|count| *count >= 1)
}
