use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::text::Span;
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

/// Title box on the left, info box on the right, joined by a rule.
pub struct Header<'a> {
    title: &'a str,
    info: &'a str,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, info: &'a str, theme: &'a Theme) -> Self {
        Self { title, info, theme }
    }
}

/// Box width for `text`: borders plus one column of padding on each side.
fn box_width(text: &str) -> u16 {
    (UnicodeWidthStr::width(text) + 4).min(u16::MAX as usize) as u16
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let colors = &self.theme.colors;
        let border_style = Style::default().fg(colors.border());
        let text_style = Style::default()
            .fg(colors.header_fg())
            .add_modifier(Modifier::BOLD);
        let height = area.height.min(3);

        let title_width = box_width(self.title).min(area.width);
        let info_width = box_width(self.info).min(area.width - title_width);

        let title_area = Rect::new(area.x, area.y, title_width, height);
        let info_area = Rect::new(area.right() - info_width, area.y, info_width, height);

        Paragraph::new(Span::styled(self.title, text_style))
            .block(
                Block::bordered()
                    .border_set(border::Set {
                        vertical_right: "├",
                        ..border::ROUNDED
                    })
                    .border_style(border_style)
                    .padding(Padding::horizontal(1)),
            )
            .render(title_area, buf);

        if info_width > 0 {
            Paragraph::new(Span::styled(self.info, Style::default().fg(colors.text_dim())))
                .block(
                    Block::bordered()
                        .border_set(border::Set {
                            vertical_left: "┤",
                            ..border::ROUNDED
                        })
                        .border_style(border_style)
                        .padding(Padding::horizontal(1)),
                )
                .render(info_area, buf);
        }

        let rule_width = area.width - title_width - info_width;
        if rule_width > 0 && height >= 2 {
            buf.set_string(
                area.x + title_width,
                area.y + height / 2,
                "─".repeat(rule_width as usize),
                border_style,
            );
        }
    }
}
