//! Search box controller.

use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
use crate::search::{filter_indices, normalize_query};
use crate::shortcuts::{GlobalKey, Key};
use class_notes_doc_model::{Catalog, IconKind, SearchItem};
use serde::Serialize;

/// Pause between showing the loading state and showing results.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTiming {
    pub debounce_ms: u64,
    pub search_delay_ms: u64,
}

impl Default for SearchTiming {
    fn default() -> Self {
        Self { debounce_ms: DEFAULT_DEBOUNCE_MS, search_delay_ms: DEFAULT_SEARCH_DELAY_MS }
    }
}

/// Where selecting a result takes the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub url: String,
    pub new_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Panel inactive or key not bound.
    Ignored,
    Handled,
    Navigate(Navigation),
    /// Panel closed and the input lost focus.
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Panel {
    Hidden,
    Loading { query: String, ready_at_ms: u64 },
    Ready { query: String, matches: Vec<usize> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputState {
    pub value: String,
    pub has_value: bool,
    pub focused: bool,
    pub text_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub index: usize,
    pub title: String,
    pub subtitle: String,
    pub url: String,
    pub icon: IconKind,
    pub new_tab: bool,
    pub active: bool,
}

impl ResultRow {
    fn from_item(index: usize, item: &SearchItem, active: bool) -> Self {
        Self {
            index,
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            url: item.url.clone(),
            icon: item.icon,
            new_tab: item.opens_in_new_tab(),
            active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultsView {
    Hidden,
    Loading,
    NoResults { query: String },
    Results { query: String, header: String, rows: Vec<ResultRow>, active: Option<usize> },
}

impl ResultsView {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

pub fn results_header(count: usize) -> String {
    if count == 1 {
        "1 result".to_owned()
    } else {
        format!("{count} results")
    }
}

#[derive(Debug, Clone)]
pub struct SearchController {
    catalog: Catalog,
    timing: SearchTiming,
    input: InputState,
    debouncer: Debouncer<String>,
    panel: Panel,
    active: Option<usize>,
}

impl SearchController {
    pub fn new(catalog: Catalog, timing: SearchTiming) -> Self {
        Self {
            catalog,
            timing,
            input: InputState::default(),
            debouncer: Debouncer::new(timing.debounce_ms),
            panel: Panel::Hidden,
            active: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.panel, Panel::Hidden)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Next instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        let loading = match self.panel {
            Panel::Loading { ready_at_ms, .. } => Some(ready_at_ms),
            _ => None,
        };

        match (self.debouncer.deadline(), loading) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn input(&mut self, value: &str, now_ms: u64) {
        self.input.value = value.to_owned();
        self.input.has_value = !value.is_empty();
        self.input.text_selected = false;
        self.debouncer.push(value.to_owned(), now_ms);
    }

    pub fn focus(&mut self, now_ms: u64) {
        self.input.focused = true;
        if !self.input.value.trim().is_empty() {
            self.debouncer.push(self.input.value.clone(), now_ms);
        }
    }

    /// Handles a page-wide key press. Returns `true` when it was the search shortcut.
    pub fn global_key(&mut self, key: &GlobalKey, now_ms: u64) -> bool {
        if !key.is_focus_search_shortcut() {
            return false;
        }

        self.focus(now_ms);
        self.input.text_selected = true;
        true
    }

    /// Runs due timers. Returns `true` when the visible panel changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = false;

        if let Some(raw) = self.debouncer.poll(now_ms) {
            let query = normalize_query(&raw);
            if query.is_empty() {
                self.hide();
            } else {
                tracing::debug!(%query, "search scheduled");
                self.panel = Panel::Loading {
                    query,
                    ready_at_ms: now_ms.saturating_add(self.timing.search_delay_ms),
                };
            }
            changed = true;
        }

        if let Panel::Loading { query, ready_at_ms } = &self.panel {
            if now_ms >= *ready_at_ms {
                let query = query.clone();
                let matches = filter_indices(&self.catalog, &query);
                tracing::debug!(%query, matches = matches.len(), "search finished");

                self.active = None;
                self.panel = Panel::Ready { query, matches };
                changed = true;
            }
        }

        changed
    }

    pub fn key(&mut self, key: &Key) -> KeyOutcome {
        if !self.is_active() {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::ArrowDown => {
                self.move_active(true);
                KeyOutcome::Handled
            }
            Key::ArrowUp => {
                self.move_active(false);
                KeyOutcome::Handled
            }
            Key::Enter => match self.select_active() {
                Some(navigation) => KeyOutcome::Navigate(navigation),
                None => KeyOutcome::Handled,
            },
            Key::Escape => {
                self.hide();
                self.input.focused = false;
                KeyOutcome::Dismissed
            }
            Key::Other(_) => KeyOutcome::Ignored,
        }
    }

    /// Click on the result at `position` in the visible list.
    pub fn click_result(&mut self, position: usize) -> Option<Navigation> {
        let navigation = self.navigation_at(position)?;
        self.hide();
        Some(navigation)
    }

    /// Clear button: empties the box and keeps focus in it.
    pub fn clear(&mut self) {
        self.input.value.clear();
        self.input.has_value = false;
        self.input.text_selected = false;
        self.input.focused = true;
        self.debouncer.cancel();
        self.hide();
    }

    pub fn click_outside(&mut self) {
        self.hide();
    }

    pub fn view(&self) -> ResultsView {
        match &self.panel {
            Panel::Hidden => ResultsView::Hidden,
            Panel::Loading { .. } => ResultsView::Loading,
            Panel::Ready { query, matches } if matches.is_empty() => {
                ResultsView::NoResults { query: query.clone() }
            }
            Panel::Ready { query, matches } => {
                let rows = matches
                    .iter()
                    .enumerate()
                    .filter_map(|(position, index)| {
                        let item = self.catalog.get(*index)?;
                        Some(ResultRow::from_item(*index, item, self.active == Some(position)))
                    })
                    .collect();

                ResultsView::Results {
                    query: query.clone(),
                    header: results_header(matches.len()),
                    rows,
                    active: self.active,
                }
            }
        }
    }

    fn matches(&self) -> &[usize] {
        match &self.panel {
            Panel::Ready { matches, .. } => matches.as_slice(),
            _ => &[],
        }
    }

    fn move_active(&mut self, down: bool) {
        let len = self.matches().len();
        if len == 0 {
            return;
        }

        self.active = Some(match (self.active, down) {
            (Some(current), true) if current + 1 < len => current + 1,
            (_, true) => 0,
            (Some(current), false) if current > 0 => current - 1,
            (_, false) => len - 1,
        });
    }

    fn select_active(&mut self) -> Option<Navigation> {
        let navigation = self.navigation_at(self.active?)?;
        self.hide();
        Some(navigation)
    }

    fn navigation_at(&self, position: usize) -> Option<Navigation> {
        let index = *self.matches().get(position)?;
        let item = self.catalog.get(index)?;
        Some(Navigation { url: item.url.clone(), new_tab: item.opens_in_new_tab() })
    }

    fn hide(&mut self) {
        self.panel = Panel::Hidden;
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SearchController {
        SearchController::new(Catalog::builtin(), SearchTiming::default())
    }

    fn search(controller: &mut SearchController, query: &str) {
        controller.input(query, 0);
        controller.tick(300);
        controller.tick(400);
    }

    #[test]
    fn typing_is_debounced_then_loading_then_results() {
        let mut controller = controller();
        controller.input("w", 0);
        controller.input("wt", 100);

        assert!(!controller.tick(399));
        assert_eq!(controller.view(), ResultsView::Hidden);

        assert!(controller.tick(400));
        assert_eq!(controller.view(), ResultsView::Loading);

        assert!(controller.tick(500));
        let ResultsView::Results { header, rows, .. } = controller.view() else {
            panic!("results expected");
        };
        assert_eq!(header, "8 results");
        assert!(rows.iter().all(|row| row.subtitle == "Web Technologies"));
    }

    #[test]
    fn next_deadline_tracks_pending_timers() {
        let mut controller = controller();
        assert_eq!(controller.next_deadline(), None);

        controller.input("os", 50);
        assert_eq!(controller.next_deadline(), Some(350));

        controller.tick(350);
        assert_eq!(controller.next_deadline(), Some(450));
    }

    #[test]
    fn unmatched_query_shows_no_results_state() {
        let mut controller = controller();
        search(&mut controller, "zzz");
        assert_eq!(controller.view(), ResultsView::NoResults { query: "zzz".to_owned() });
    }

    #[test]
    fn blank_input_hides_results() {
        let mut controller = controller();
        search(&mut controller, "os");
        assert!(controller.is_active());

        controller.input("   ", 1_000);
        controller.tick(1_300);
        assert_eq!(controller.view(), ResultsView::Hidden);
        assert!(controller.input_state().has_value);
    }

    #[test]
    fn single_match_uses_singular_header() {
        assert_eq!(results_header(1), "1 result");
        assert_eq!(results_header(0), "0 results");

        let mut controller = controller();
        search(&mut controller, "entrepreneurship");
        let ResultsView::Results { header, .. } = controller.view() else {
            panic!("results expected");
        };
        assert_eq!(header, "1 result");
    }

    #[test]
    fn arrow_keys_wrap_around_results() {
        let mut controller = controller();
        search(&mut controller, "machine");

        assert_eq!(controller.key(&Key::ArrowUp), KeyOutcome::Handled);
        assert_eq!(controller.active_index(), Some(2));

        controller.key(&Key::ArrowDown);
        assert_eq!(controller.active_index(), Some(0));

        controller.key(&Key::ArrowDown);
        controller.key(&Key::ArrowDown);
        controller.key(&Key::ArrowDown);
        assert_eq!(controller.active_index(), Some(0));
    }

    #[test]
    fn enter_navigates_to_highlighted_result() {
        let mut controller = controller();
        search(&mut controller, "syllabus");

        assert_eq!(controller.key(&Key::Enter), KeyOutcome::Handled);

        controller.key(&Key::ArrowDown);
        let outcome = controller.key(&Key::Enter);
        assert_eq!(
            outcome,
            KeyOutcome::Navigate(Navigation {
                url: "/public/subjects/ML_Syllabus.pdf".to_owned(),
                new_tab: true,
            })
        );
        assert!(!controller.is_active());
        assert_eq!(controller.active_index(), None);
    }

    #[test]
    fn subjects_open_in_same_tab() {
        let mut controller = controller();
        search(&mut controller, "cyber security");

        let navigation = controller.click_result(0).expect("first result expected");
        assert_eq!(navigation.url, "/subjects/CS_CL.html");
        assert!(!navigation.new_tab);
    }

    #[test]
    fn keys_are_ignored_while_panel_hidden() {
        let mut controller = controller();
        assert_eq!(controller.key(&Key::ArrowDown), KeyOutcome::Ignored);
        assert_eq!(controller.key(&Key::Escape), KeyOutcome::Ignored);
    }

    #[test]
    fn escape_hides_and_blurs() {
        let mut controller = controller();
        controller.focus(0);
        search(&mut controller, "os");

        assert_eq!(controller.key(&Key::Escape), KeyOutcome::Dismissed);
        assert!(!controller.is_active());
        assert!(!controller.input_state().focused);
    }

    #[test]
    fn clear_resets_input_and_cancels_pending_search() {
        let mut controller = controller();
        controller.input("os", 0);
        controller.clear();

        assert!(!controller.tick(1_000));
        assert_eq!(controller.view(), ResultsView::Hidden);
        assert_eq!(controller.input_state().value, "");
        assert!(!controller.input_state().has_value);
        assert!(controller.input_state().focused);
    }

    #[test]
    fn refocusing_reruns_previous_query() {
        let mut controller = controller();
        search(&mut controller, "os");
        controller.click_outside();
        assert!(!controller.is_active());

        controller.focus(2_000);
        controller.tick(2_300);
        controller.tick(2_400);
        assert!(controller.is_active());
    }

    #[test]
    fn shortcut_focuses_and_selects_input() {
        let mut controller = controller();
        assert!(!controller.global_key(&GlobalKey::new("p", true, false), 0));
        assert!(controller.global_key(&GlobalKey::new("k", false, true), 0));

        let input = controller.input_state();
        assert!(input.focused);
        assert!(input.text_selected);
    }

    #[test]
    fn active_row_is_flagged_in_view() {
        let mut controller = controller();
        search(&mut controller, "machine");
        controller.key(&Key::ArrowDown);
        controller.key(&Key::ArrowDown);

        let ResultsView::Results { rows, active, .. } = controller.view() else {
            panic!("results expected");
        };
        assert_eq!(active, Some(1));
        assert!(rows[1].active);
        assert!(!rows[0].active);
        assert_eq!(rows[1].title, "ML Syllabus");
    }
}
