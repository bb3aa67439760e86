use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, AppScreen};
use crate::ui::components::detail_view::DetailView;
use crate::ui::components::footer::Footer;
use crate::ui::components::header::Header;
use crate::ui::components::problem_list::ProblemList;
use crate::ui::layout::{HEADER_HEIGHT, LIST_MARGIN_X, footer_height};

/// Draw the whole session: header, list or panes, footer.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()).fg(colors.fg()));
    frame.render_widget(bg, area);

    if !app.ready {
        frame.render_widget(Paragraph::new("Initializing..."), area);
        return;
    }

    let hints = app.footer_hints();
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer_height(hints, area.width)),
    ])
    .areas(area);

    let info = app.header_info();
    frame.render_widget(Header::new(app.header_title(), &info, app.theme), header_area);

    match app.screen {
        AppScreen::Listing => {
            let list_area = body_area.inner(Margin::new(LIST_MARGIN_X, 0));
            frame.render_widget(ProblemList::new(&app.list, &app.catalog, app.theme), list_area);
        }
        AppScreen::Viewing { focus, .. } => {
            frame.render_widget(DetailView::new(&app.detail, focus, app.theme), body_area);
        }
    }

    frame.render_widget(Footer::new(hints, app.theme), footer_area);
}
