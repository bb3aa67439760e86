use crossterm::event::KeyEvent;

use crate::catalog::Catalog;
use crate::engine::filter::{TAG_SENTINEL, filter_by_keywords, filter_by_text};
use crate::ui::line_input::LineInput;

/// Rows above the first item: filter/title line, status line, spacer.
pub const LIST_HEADER_ROWS: u16 = 3;
/// Rows per item: title, description, spacer.
pub const ITEM_HEIGHT: u16 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterState {
    Unfiltered,
    /// The filter prompt is open and receives typed characters.
    Filtering,
    /// A filter is in effect but the prompt is closed.
    FilterApplied,
}

/// Items that fit in a list `rows` tall; never less than one.
fn page_capacity(rows: u16) -> usize {
    (rows.saturating_sub(LIST_HEADER_ROWS) / ITEM_HEIGHT).max(1) as usize
}

/// State of the searchable problem list: which catalog entries are shown,
/// where the cursor is, and the filter text that produced them.
#[derive(Clone, Debug)]
pub struct SearchList {
    items: Vec<usize>,
    cursor: usize,
    input: LineInput,
    applied_text: String,
    state: FilterState,
    width: u16,
    height: u16,
}

impl SearchList {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            items: catalog.all_indices(),
            cursor: 0,
            input: LineInput::default(),
            applied_text: String::new(),
            state: FilterState::Unfiltered,
            width: 0,
            height: 0,
        }
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter_state(&self) -> FilterState {
        self.state
    }

    pub fn is_filtering(&self) -> bool {
        self.state == FilterState::Filtering
    }

    pub fn filter_text(&self) -> &str {
        self.input.value()
    }

    pub fn input(&self) -> &LineInput {
        &self.input
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Number of items that fit in the list's current height.
    pub fn items_per_page(&self) -> usize {
        page_capacity(self.height)
    }

    /// Items on the cursor's page, as positions into [`Self::items`].
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        self.visible_range_in(self.height)
    }

    /// Same as [`Self::visible_range`] for a list drawn `rows` tall.
    pub fn visible_range_in(&self, rows: u16) -> std::ops::Range<usize> {
        let per_page = page_capacity(rows);
        let start = (self.cursor / per_page) * per_page;
        start..(start + per_page).min(self.items.len())
    }

    /// (current page, total pages), both 1-based.
    pub fn page_info(&self) -> (usize, usize) {
        self.page_info_in(self.height)
    }

    pub fn page_info_in(&self, rows: u16) -> (usize, usize) {
        let per_page = page_capacity(rows);
        let pages = self.items.len().div_ceil(per_page).max(1);
        (self.cursor / per_page + 1, pages)
    }

    pub fn start_filtering(&mut self) {
        self.state = FilterState::Filtering;
    }

    /// Feed a key to the filter prompt and refilter if the text changed.
    pub fn edit_filter(&mut self, catalog: &Catalog, key: KeyEvent) {
        self.input.handle(key);
        let text = self.input.value().to_string();
        self.on_filter_text_changed(catalog, &text);
    }

    /// Recompute the item set for new filter text.
    ///
    /// Text starting with the tag sentinel is an AND tag query; anything else
    /// is a substring title match.
    pub fn on_filter_text_changed(&mut self, catalog: &Catalog, text: &str) {
        if text == self.applied_text {
            return;
        }
        self.applied_text = text.to_string();

        self.items = if text.starts_with(TAG_SENTINEL) {
            filter_by_keywords(catalog.problems(), text)
        } else {
            filter_by_text(catalog.problems(), text)
        };
        if !self.items.is_empty() {
            self.cursor = 0;
        }
        self.clamp_cursor();
    }

    /// Close the prompt, keeping the filter (or dropping it if empty).
    pub fn accept_filter(&mut self) {
        self.state = if self.input.value().is_empty() {
            FilterState::Unfiltered
        } else {
            FilterState::FilterApplied
        };
    }

    pub fn cancel_filter(&mut self, catalog: &Catalog) {
        self.input.clear();
        self.on_filter_text_changed(catalog, "");
        self.state = FilterState::Unfiltered;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn page_down(&mut self) {
        self.move_cursor(self.items_per_page() as isize);
    }

    pub fn page_up(&mut self) {
        self.move_cursor(-(self.items_per_page() as isize));
    }

    pub fn goto_first(&mut self) {
        self.cursor = 0;
    }

    pub fn goto_last(&mut self) {
        self.cursor = self.items.len().saturating_sub(1);
    }

    /// Catalog index under the cursor, if anything is listed.
    pub fn select_current(&self) -> Option<usize> {
        self.items.get(self.cursor).copied()
    }

    pub fn reset_to_full_catalog(&mut self, catalog: &Catalog) {
        self.input.clear();
        self.applied_text.clear();
        self.items = catalog.all_indices();
        self.state = FilterState::Unfiltered;
        self.cursor = 0;
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Problem;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn catalog() -> Catalog {
        let problem = |title: &str, keywords: &[&str]| Problem {
            title: title.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Problem::default()
        };
        Catalog::from_problems(vec![
            problem("Two Sum", &["array", "hash-map"]),
            problem("Valid Parens", &["stack"]),
            problem("Three Sum", &["array", "two-pointers"]),
            problem("Min Stack", &["stack", "design"]),
        ])
    }

    fn type_text(list: &mut SearchList, catalog: &Catalog, text: &str) {
        for ch in text.chars() {
            list.edit_filter(catalog, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
    }

    #[test]
    fn starts_with_full_catalog() {
        let catalog = catalog();
        let list = SearchList::new(&catalog);
        assert_eq!(list.items(), &[0, 1, 2, 3]);
        assert_eq!(list.select_current(), Some(0));
        assert_eq!(list.filter_state(), FilterState::Unfiltered);
    }

    #[test]
    fn cursor_is_clamped() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.move_cursor(-1);
        assert_eq!(list.cursor(), 0);
        list.move_cursor(10);
        assert_eq!(list.cursor(), 3);
        list.move_cursor(-2);
        assert_eq!(list.cursor(), 1);
    }

    #[test]
    fn tag_filter_resets_cursor() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.move_cursor(3);
        list.start_filtering();
        type_text(&mut list, &catalog, "#stack");
        assert_eq!(list.items(), &[1, 3]);
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.select_current(), Some(1));
    }

    #[test]
    fn plain_text_uses_title_filter() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.start_filtering();
        type_text(&mut list, &catalog, "sum");
        assert_eq!(list.items(), &[0, 2]);
    }

    #[test]
    fn empty_result_selects_nothing() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.start_filtering();
        type_text(&mut list, &catalog, "#array,stack");
        assert!(list.items().is_empty());
        assert_eq!(list.select_current(), None);
        list.move_cursor(1);
        list.page_down();
        assert_eq!(list.select_current(), None);
    }

    #[test]
    fn unchanged_text_keeps_cursor() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.on_filter_text_changed(&catalog, "#array");
        list.move_cursor(1);
        list.on_filter_text_changed(&catalog, "#array");
        assert_eq!(list.cursor(), 1);
    }

    #[test]
    fn bare_sentinel_shows_everything() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.start_filtering();
        type_text(&mut list, &catalog, "#");
        assert_eq!(list.items(), &[0, 1, 2, 3]);
    }

    #[test]
    fn accept_and_cancel() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.start_filtering();
        type_text(&mut list, &catalog, "#array");
        list.accept_filter();
        assert_eq!(list.filter_state(), FilterState::FilterApplied);
        assert_eq!(list.items(), &[0, 2]);

        list.cancel_filter(&catalog);
        assert_eq!(list.filter_state(), FilterState::Unfiltered);
        assert_eq!(list.items(), &[0, 1, 2, 3]);
        assert_eq!(list.filter_text(), "");
    }

    #[test]
    fn accepting_empty_filter_is_unfiltered() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.start_filtering();
        list.accept_filter();
        assert_eq!(list.filter_state(), FilterState::Unfiltered);
    }

    #[test]
    fn reset_restores_catalog_and_cursor() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.start_filtering();
        type_text(&mut list, &catalog, "#stack");
        list.move_cursor(1);
        list.reset_to_full_catalog(&catalog);
        assert_eq!(list.items(), &[0, 1, 2, 3]);
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.filter_text(), "");
        assert_eq!(list.filter_state(), FilterState::Unfiltered);

        // The same filter typed again must refilter.
        list.start_filtering();
        type_text(&mut list, &catalog, "#stack");
        assert_eq!(list.items(), &[1, 3]);
    }

    #[test]
    fn paging_follows_height() {
        let catalog = catalog();
        let mut list = SearchList::new(&catalog);
        list.set_size(40, LIST_HEADER_ROWS + ITEM_HEIGHT * 2);
        assert_eq!(list.items_per_page(), 2);
        assert_eq!(list.visible_range(), 0..2);
        assert_eq!(list.page_info(), (1, 2));

        list.page_down();
        assert_eq!(list.cursor(), 2);
        assert_eq!(list.visible_range(), 2..4);
        assert_eq!(list.page_info(), (2, 2));

        list.goto_last();
        assert_eq!(list.cursor(), 3);
        list.page_up();
        assert_eq!(list.cursor(), 1);
        list.goto_first();
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn drawn_height_overrides_stored_height() {
        let catalog = catalog();
        let list = SearchList::new(&catalog);
        let rows = LIST_HEADER_ROWS + ITEM_HEIGHT * 4;
        assert_eq!(list.visible_range_in(rows), 0..4);
        assert_eq!(list.page_info_in(rows), (1, 1));
        assert_eq!(list.page_info(), (1, 4));
    }

    #[test]
    fn zero_height_still_shows_one_item_per_page() {
        let catalog = catalog();
        let list = SearchList::new(&catalog);
        assert_eq!(list.items_per_page(), 1);
        assert_eq!(list.visible_range(), 0..1);
    }
}
