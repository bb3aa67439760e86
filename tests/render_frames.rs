use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::text::Line;

use leetfinder::app::App;
use leetfinder::catalog::{Catalog, Problem};
use leetfinder::config::Config;
use leetfinder::event::AppEvent;
use leetfinder::render::{MarkdownRenderer, RenderError};
use leetfinder::ui::theme::Theme;
use leetfinder::ui::view;

struct PlainRenderer;

impl MarkdownRenderer for PlainRenderer {
    fn render(&self, markdown: &str, _width: usize) -> Result<Vec<Line<'static>>, RenderError> {
        Ok(markdown.lines().map(|l| Line::from(l.to_string())).collect())
    }
}

fn app() -> App {
    let mut two_sum = Problem {
        title: "Two Sum".to_string(),
        keywords: vec!["array".to_string(), "hash-map".to_string()],
        whiteboard: "store complements".to_string(),
        manual_solution: "seen = {}".to_string(),
        ..Problem::default()
    };
    two_sum.complexity.time.notation = "O(n)".to_string();
    two_sum.complexity.space.notation = "O(n)".to_string();
    let parens = Problem {
        title: "Valid Parens".to_string(),
        keywords: vec!["stack".to_string()],
        ..Problem::default()
    };

    let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
    App::new(
        Catalog::from_problems(vec![two_sum, parens]),
        &Config::default(),
        theme,
        Box::new(PlainRenderer),
    )
}

fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| view::render(frame, app))
        .expect("draw succeeds");
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn placeholder_before_first_resize() {
    let app = app();
    let rows = draw(&app, 40, 10);
    assert!(rows[0].starts_with("Initializing..."));
}

#[test]
fn listing_frame_shows_chrome_and_titles() {
    let mut app = app();
    app.handle(AppEvent::Resize(80, 20));
    let rows = draw(&app, 80, 20);

    assert!(rows[1].contains("LeetCode Finder"));
    assert!(rows[1].contains(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    assert!(rows[3].starts_with("  Problems"));
    assert!(rows[6].starts_with("  │ Two Sum"));
    assert!(rows[7].contains("array, hash-map"));
    assert!(rows[9].contains("Valid Parens"));
    assert!(rows[19].contains("search"));
    assert!(rows[19].contains("quit"));
}

#[test]
fn viewing_frame_shows_both_panes() {
    let mut app = app();
    app.handle(AppEvent::Resize(80, 20));
    app.handle(AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    let rows = draw(&app, 80, 20);

    assert!(rows[1].contains("Two Sum"));
    assert!(rows[1].contains("O(n) Time | O(n) Space"));
    assert!(rows[4].contains("WHITEBOARD"));
    assert!(rows[4].contains("MANUAL SOLUTION"));
    assert!(rows[19].contains("switch pane"));
}
