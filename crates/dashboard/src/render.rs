//! HTML for the search result panel and toasts.

use crate::results::{ResultRow, ResultsView};
use crate::search::{highlight_segments, Highlight};
use crate::toast::{Toast, ToastKind, ToastPhase};
use class_notes_doc_model::IconKind;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escaped `text` with every occurrence of `query` wrapped in `<mark>`.
pub fn highlight_html(text: &str, query: &str) -> String {
    highlight_segments(text, query)
        .into_iter()
        .map(|segment| match segment {
            Highlight::Plain(plain) => escape_html(plain),
            Highlight::Match(matched) => format!("<mark>{}</mark>", escape_html(matched)),
        })
        .collect()
}

pub fn icon_svg(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Pdf => concat!(
            r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
            r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"></path>"#,
            r#"<polyline points="14 2 14 8 20 8"></polyline></svg>"#,
        ),
        IconKind::Slides => concat!(
            r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
            r#"<rect x="3" y="3" width="18" height="18" rx="2" ry="2"></rect>"#,
            r#"<line x1="9" y1="3" x2="9" y2="21"></line></svg>"#,
        ),
        IconKind::Subject => concat!(
            r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
            r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"></path>"#,
            r#"<path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"></path></svg>"#,
        ),
    }
}

const NO_RESULTS_ICON: &str = concat!(
    r#"<svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">"#,
    r#"<circle cx="11" cy="11" r="8"></circle><line x1="21" y1="21" x2="16.65" y2="16.65"></line></svg>"#,
);

/// Markup for the result panel; empty when the panel is hidden.
pub fn render_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Hidden => String::new(),
        ResultsView::Loading => {
            r#"<div class="search-loading"><div class="spinner"></div><p>Searching...</p></div>"#
                .to_owned()
        }
        ResultsView::NoResults { query } => format!(
            r#"<div class="search-no-results">{NO_RESULTS_ICON}<p>No results found for "{}"</p></div>"#,
            escape_html(query)
        ),
        ResultsView::Results { query, header, rows, .. } => {
            let mut html = format!(r#"<div class="search-results-header">{header}</div>"#);
            for (position, row) in rows.iter().enumerate() {
                render_row(&mut html, position, row, query);
            }
            html
        }
    }
}

fn render_row(html: &mut String, position: usize, row: &ResultRow, query: &str) {
    let class = if row.active { "search-result-item active" } else { "search-result-item" };
    let target = if row.new_tab { r#" target="_blank" rel="noopener noreferrer""# } else { "" };

    html.push_str(&format!(
        r#"<a href="{href}" class="{class}" data-index="{position}"{target}><div class="result-icon {icon_class}">{icon}</div><div class="result-content"><div class="result-title">{title}</div><div class="result-subtitle">{subtitle}</div></div></a>"#,
        href = escape_html(&row.url),
        icon_class = row.icon.css_class(),
        icon = icon_svg(row.icon),
        title = highlight_html(&row.title, query),
        subtitle = escape_html(&row.subtitle),
    ));
}

pub fn render_toast(toast: &Toast) -> String {
    let icon = match toast.kind {
        ToastKind::Success => concat!(
            r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
            r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path><polyline points="22 4 12 14.01 9 11.01"></polyline></svg>"#,
        ),
        ToastKind::Error => concat!(
            r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
            r#"<circle cx="12" cy="12" r="10"></circle><line x1="12" y1="8" x2="12" y2="12"></line>"#,
            r#"<line x1="12" y1="16" x2="12.01" y2="16"></line></svg>"#,
        ),
    };

    let show = if toast.phase == ToastPhase::Showing { " show" } else { "" };

    format!(
        r#"<div class="toast {kind}{show}"><div class="toast-icon">{icon}</div><div class="toast-content"><div class="toast-title">{title}</div><div class="toast-message">{message}</div></div></div>"#,
        kind = toast.kind.css_class(),
        title = toast.kind.title(),
        message = escape_html(&toast.message),
    )
}
