use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use tracing::debug;

use crate::catalog::{Catalog, Problem};
use crate::config::Config;
use crate::event::AppEvent;
use crate::render::MarkdownRenderer;
use crate::session::detail::{DetailPanes, Pane, SolutionVariant};
use crate::session::search_list::{FilterState, SearchList};
use crate::ui::layout::{self, HEADER_HEIGHT, KeyHint, LayoutMode, SessionLayout, footer_height};
use crate::ui::theme::Theme;

pub const APP_TITLE: &str = "LeetCode Finder";

const FILTERING_HINTS: &[KeyHint] = &[
    KeyHint::new("ctrl+j/k", "navigate"),
    KeyHint::new("enter", "select"),
    KeyHint::new("esc", "cancel"),
];

const LISTING_HINTS: &[KeyHint] = &[
    KeyHint::new("/", "search"),
    KeyHint::new("enter", "select"),
    KeyHint::new("ctrl+c", "quit"),
];

const FILTERED_LISTING_HINTS: &[KeyHint] = &[
    KeyHint::new("/", "search"),
    KeyHint::new("esc", "clear filter"),
    KeyHint::new("enter", "select"),
    KeyHint::new("ctrl+c", "quit"),
];

const VIEWING_HINTS: &[KeyHint] = &[
    KeyHint::new("tab", "switch pane"),
    KeyHint::new("c", "toggle solution"),
    KeyHint::new("/", "search"),
    KeyHint::new("esc", "back"),
];

/// Top-level mode. A problem is open exactly when the screen is `Viewing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Listing,
    Viewing { problem: usize, focus: Pane },
}

pub struct App {
    pub screen: AppScreen,
    pub catalog: Catalog,
    pub list: SearchList,
    pub detail: DetailPanes,
    pub theme: &'static Theme,
    pub width: u16,
    pub height: u16,
    /// Set once the first window size is known.
    pub ready: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        catalog: Catalog,
        config: &Config,
        theme: &'static Theme,
        renderer: Box<dyn MarkdownRenderer>,
    ) -> Self {
        let list = SearchList::new(&catalog);
        let detail = DetailPanes::new(
            renderer,
            theme,
            &config.code_language,
            config.mouse_wheel_lines,
        );
        Self {
            screen: AppScreen::Listing,
            catalog,
            list,
            detail,
            theme,
            width: 0,
            height: 0,
            ready: false,
            should_quit: false,
        }
    }

    /// Apply one input event to the session.
    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            AppEvent::Resize(width, height) => self.resize(width, height),
        }
    }

    pub fn active_problem(&self) -> Option<&Problem> {
        match self.screen {
            AppScreen::Listing => None,
            AppScreen::Viewing { problem, .. } => self.catalog.get(problem),
        }
    }

    pub fn focused_pane(&self) -> Option<Pane> {
        match self.screen {
            AppScreen::Listing => None,
            AppScreen::Viewing { focus, .. } => Some(focus),
        }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        match self.screen {
            AppScreen::Listing => LayoutMode::Listing,
            AppScreen::Viewing { .. } => LayoutMode::Viewing,
        }
    }

    pub fn header_title(&self) -> &str {
        self.active_problem()
            .map_or(APP_TITLE, |problem| problem.title.as_str())
    }

    pub fn header_info(&self) -> String {
        match self.active_problem() {
            Some(problem) => format!(
                "{} Time | {} Space",
                problem.complexity.time.notation, problem.complexity.space.notation
            ),
            None => format!("v{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn footer_hints(&self) -> &'static [KeyHint] {
        match self.screen {
            AppScreen::Viewing { .. } => VIEWING_HINTS,
            AppScreen::Listing => match self.list.filter_state() {
                FilterState::Filtering => FILTERING_HINTS,
                FilterState::FilterApplied => FILTERED_LISTING_HINTS,
                FilterState::Unfiltered => LISTING_HINTS,
            },
        }
    }

    /// Resize the list and panes to fit the current window and chrome.
    fn apply_layout(&mut self) -> SessionLayout {
        let footer = footer_height(self.footer_hints(), self.width);
        let layout = layout::compute(
            self.width,
            self.height,
            HEADER_HEIGHT,
            footer,
            self.layout_mode(),
        );
        self.list.set_size(layout.list.width, layout.list.height);
        if let Some(panes) = layout.panes {
            self.detail.set_size(panes.width, panes.height);
        }
        layout
    }

    fn resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "window resized");
        self.width = width;
        self.height = height;
        self.ready = true;
        self.apply_layout();
        if let AppScreen::Viewing { problem, .. } = self.screen {
            self.rebuild_panes(problem, self.detail.variant());
        }
    }

    fn rebuild_panes(&mut self, index: usize, variant: SolutionVariant) {
        if let Some(problem) = self.catalog.get(index) {
            let width = self.detail.content_width();
            self.detail.rebuild(problem, variant, width);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            debug!("quit requested");
            self.should_quit = true;
            return;
        }

        match self.screen {
            AppScreen::Listing => {
                self.handle_listing_key(key);
                // Footer hints follow the filter state, which changes the body height.
                if self.screen == AppScreen::Listing {
                    self.apply_layout();
                }
            }
            AppScreen::Viewing { .. } => self.handle_viewing_key(key),
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.list.is_filtering() {
            match key.code {
                KeyCode::Enter => {
                    if self.list.select_current().is_some() {
                        self.list.accept_filter();
                        self.open_selected();
                    }
                }
                KeyCode::Esc => self.list.cancel_filter(&self.catalog),
                KeyCode::Down => self.list.move_cursor(1),
                KeyCode::Up => self.list.move_cursor(-1),
                KeyCode::Char('j') if ctrl => self.list.move_cursor(1),
                KeyCode::Char('k') if ctrl => self.list.move_cursor(-1),
                _ => self.list.edit_filter(&self.catalog, key),
            }
            return;
        }

        match key.code {
            KeyCode::Char('/') => {
                debug!("filter prompt opened");
                self.list.start_filtering();
            }
            KeyCode::Esc => {
                if self.list.filter_state() == FilterState::FilterApplied {
                    self.list.cancel_filter(&self.catalog);
                }
            }
            KeyCode::Enter => self.open_selected(),
            KeyCode::Down | KeyCode::Char('j') => self.list.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.list.move_cursor(-1),
            KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l') => self.list.page_down(),
            KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h') => self.list.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.list.goto_first(),
            KeyCode::End | KeyCode::Char('G') => self.list.goto_last(),
            _ => {}
        }
    }

    fn handle_viewing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') | KeyCode::Esc => {
                self.back_to_listing();
                return;
            }
            KeyCode::Tab => {
                if let AppScreen::Viewing { focus, .. } = &mut self.screen {
                    *focus = focus.toggled();
                }
            }
            KeyCode::Char('c') => {
                if let AppScreen::Viewing { problem, .. } = self.screen {
                    if let Some(problem) = self.catalog.get(problem) {
                        self.detail.toggle_variant(problem);
                        debug!(variant = ?self.detail.variant(), "solution toggled");
                    }
                }
            }
            _ => {}
        }
        self.detail.forward_key(key);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if matches!(self.screen, AppScreen::Viewing { .. }) {
            self.detail.forward_mouse(mouse);
        }
    }

    /// Open the highlighted problem; a no-op when the list is empty.
    fn open_selected(&mut self) {
        let Some(index) = self.list.select_current() else {
            debug!("select ignored, nothing listed");
            return;
        };
        self.screen = AppScreen::Viewing {
            problem: index,
            focus: Pane::Left,
        };
        self.apply_layout();
        self.rebuild_panes(index, SolutionVariant::Manual);
        debug!(index, title = %self.header_title(), "problem opened");
    }

    fn back_to_listing(&mut self) {
        self.list.reset_to_full_catalog(&self.catalog);
        self.screen = AppScreen::Listing;
        self.apply_layout();
        debug!("returned to listing");
    }
}
