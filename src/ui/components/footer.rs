use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::layout::{KeyHint, pack_hint_lines};
use crate::ui::theme::Theme;

/// Key hint bar. Hints wrap onto extra rows when the window is narrow; the
/// caller sizes the area with [`crate::ui::layout::footer_height`].
pub struct Footer<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let base = Style::default().fg(colors.footer_fg()).bg(colors.footer_bg());
        let badge = Style::default()
            .fg(colors.key_fg())
            .bg(colors.key_bg())
            .add_modifier(Modifier::BOLD);

        let lines: Vec<Line> = pack_hint_lines(self.hints, area.width as usize)
            .into_iter()
            .map(|row| {
                let mut spans = vec![Span::raw(" ")];
                for (i, hint) in row.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(format!(" {} ", hint.key), badge));
                    spans.push(Span::raw(format!(" {}", hint.action)));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).style(base).render(area, buf);
    }
}
