use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Widget};

use crate::session::detail::{DetailPanes, Pane};
use crate::ui::theme::Theme;

/// Notes and solution side by side; the focused pane gets a heavier border.
pub struct DetailView<'a> {
    panes: &'a DetailPanes,
    focus: Pane,
    theme: &'a Theme,
}

impl<'a> DetailView<'a> {
    pub fn new(panes: &'a DetailPanes, focus: Pane, theme: &'a Theme) -> Self {
        Self {
            panes,
            focus,
            theme,
        }
    }

    fn pane_block(&self, pane: Pane) -> Block<'static> {
        let colors = &self.theme.colors;
        if pane == self.focus {
            Block::bordered()
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(colors.border_focused()))
        } else {
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors.border()))
        }
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Length(area.width / 2), Constraint::Min(0)])
                .areas(area);

        for (pane, pane_area) in [(Pane::Left, left_area), (Pane::Right, right_area)] {
            let block = self.pane_block(pane);
            let inner = block.inner(pane_area);
            block.render(pane_area, buf);
            let viewport = match pane {
                Pane::Left => &self.panes.left,
                Pane::Right => &self.panes.right,
            };
            viewport.render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Problem;
    use crate::render::{MarkdownRenderer, RenderError};
    use crate::session::detail::SolutionVariant;
    use ratatui::text::Line;

    struct PlainRenderer;

    impl MarkdownRenderer for PlainRenderer {
        fn render(&self, markdown: &str, _width: usize) -> Result<Vec<Line<'static>>, RenderError> {
            Ok(markdown.lines().map(|l| Line::from(l.to_string())).collect())
        }
    }

    #[test]
    fn focused_pane_has_thick_border() {
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        let mut panes = DetailPanes::new(Box::new(PlainRenderer), theme, "python", 3);
        panes.set_size(18, 8);
        let problem = Problem {
            whiteboard: "hash it".to_string(),
            manual_solution: "x = 1".to_string(),
            ..Problem::default()
        };
        panes.rebuild(&problem, SolutionVariant::Manual, 16);

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        DetailView::new(&panes, Pane::Right, theme).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert_eq!(buf[(20, 0)].symbol(), "┏");
        let left_top: String = (1..19).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(left_top.starts_with("WHITEBOARD"));
        let right_top: String = (21..39).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(right_top.starts_with("MANUAL SOLUTION"));
    }
}
