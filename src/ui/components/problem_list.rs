use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::catalog::{Catalog, ListEntry};
use crate::session::search_list::{FilterState, SearchList};
use crate::ui::theme::Theme;

const SELECTED_MARKER: &str = "│ ";
const UNSELECTED_MARKER: &str = "  ";

pub struct ProblemList<'a> {
    list: &'a SearchList,
    catalog: &'a Catalog,
    theme: &'a Theme,
}

impl<'a> ProblemList<'a> {
    pub fn new(list: &'a SearchList, catalog: &'a Catalog, theme: &'a Theme) -> Self {
        Self {
            list,
            catalog,
            theme,
        }
    }

    fn prompt_line(&self) -> Line<'a> {
        let colors = &self.theme.colors;
        match self.list.filter_state() {
            FilterState::Filtering => {
                let (before, cursor, after) = self.list.input().render_parts();
                let cursor = cursor.map_or_else(|| " ".to_string(), String::from);
                Line::from(vec![
                    Span::styled("Search: ", Style::default().fg(colors.filter_prompt())),
                    Span::styled(before, Style::default().fg(colors.fg())),
                    Span::styled(
                        cursor,
                        Style::default().fg(colors.fg()).add_modifier(Modifier::REVERSED),
                    ),
                    Span::styled(after, Style::default().fg(colors.fg())),
                ])
            }
            FilterState::FilterApplied => Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(colors.text_dim())),
                Span::styled(self.list.filter_text(), Style::default().fg(colors.fg())),
            ]),
            FilterState::Unfiltered => Line::from(Span::styled(
                "Problems",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
        }
    }

    fn status_line(&self, rows: u16) -> Line<'a> {
        let shown = self.list.items().len();
        let total = self.catalog.len();
        let mut status = if shown == 0 {
            "No problems match".to_string()
        } else if self.list.filter_state() == FilterState::Unfiltered {
            format!("{shown} problems")
        } else {
            format!("{shown} of {total} problems")
        };
        let (page, pages) = self.list.page_info_in(rows);
        if pages > 1 {
            status.push_str(&format!("  •  page {page}/{pages}"));
        }
        Line::from(Span::styled(
            status,
            Style::default().fg(self.theme.colors.text_dim()),
        ))
    }
}

impl Widget for ProblemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut lines = vec![
            self.prompt_line(),
            self.status_line(area.height),
            Line::default(),
        ];

        for pos in self.list.visible_range_in(area.height) {
            let Some(problem) = self
                .list
                .items()
                .get(pos)
                .and_then(|&index| self.catalog.get(index))
            else {
                continue;
            };
            let (marker, title_style, desc_style) = if pos == self.list.cursor() {
                (
                    SELECTED_MARKER,
                    Style::default()
                        .fg(colors.selected_title())
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(colors.selected_desc()),
                )
            } else {
                (
                    UNSELECTED_MARKER,
                    Style::default().fg(colors.fg()),
                    Style::default().fg(colors.text_dim()),
                )
            };
            lines.push(Line::from(vec![
                Span::styled(marker, title_style),
                Span::styled(problem.display_title(), title_style),
            ]));
            lines.push(Line::from(vec![
                Span::styled(marker, title_style),
                Span::styled(problem.description(), desc_style),
            ]));
            lines.push(Line::default());
        }

        Paragraph::new(lines).render(area, buf);
    }
}
