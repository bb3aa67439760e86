use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use tracing::warn;

use crate::catalog::Problem;
use crate::render::markdown::{MarkdownRenderer, fenced};
use crate::render::wrap::{wrap_chars, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewport::Viewport;

/// Columns kept free at the right edge of each pane.
const CONTENT_GUTTER: u16 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Left,
    Right,
}

impl Pane {
    pub fn toggled(self) -> Self {
        match self {
            Pane::Left => Pane::Right,
            Pane::Right => Pane::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionVariant {
    Manual,
    Generated,
}

impl SolutionVariant {
    pub fn toggled(self) -> Self {
        match self {
            SolutionVariant::Manual => SolutionVariant::Generated,
            SolutionVariant::Generated => SolutionVariant::Manual,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            SolutionVariant::Manual => "Manual Solution",
            SolutionVariant::Generated => "AI Solution",
        }
    }

    fn source(self, problem: &Problem) -> &str {
        match self {
            SolutionVariant::Manual => &problem.manual_solution,
            SolutionVariant::Generated => &problem.ia_solution,
        }
    }
}

/// The two scrollable panes of the problem view: study notes on the left,
/// a solution on the right.
pub struct DetailPanes {
    pub left: Viewport,
    pub right: Viewport,
    variant: SolutionVariant,
    renderer: Box<dyn MarkdownRenderer>,
    theme: &'static Theme,
    language: String,
    wheel_lines: u16,
}

impl DetailPanes {
    pub fn new(
        renderer: Box<dyn MarkdownRenderer>,
        theme: &'static Theme,
        language: &str,
        wheel_lines: u16,
    ) -> Self {
        Self {
            left: Viewport::default(),
            right: Viewport::default(),
            variant: SolutionVariant::Manual,
            renderer,
            theme,
            language: language.to_string(),
            wheel_lines,
        }
    }

    pub fn variant(&self) -> SolutionVariant {
        self.variant
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.left.set_size(width, height);
        self.right.set_size(width, height);
    }

    /// Width the pane content is wrapped to.
    pub fn content_width(&self) -> u16 {
        self.left.width().saturating_sub(CONTENT_GUTTER)
    }

    /// Rebuild both panes for `problem` and scroll them back to the top.
    pub fn rebuild(&mut self, problem: &Problem, variant: SolutionVariant, width: u16) {
        self.variant = variant;
        let width = width as usize;

        let notes = self.notes_lines(problem, width);
        self.left.set_content(notes);
        self.left.goto_top();

        let solution = self.solution_lines(problem, variant, width);
        self.right.set_content(solution);
        self.right.goto_top();
    }

    pub fn toggle_variant(&mut self, problem: &Problem) {
        let width = self.content_width();
        self.rebuild(problem, self.variant.toggled(), width);
    }

    /// Both panes receive every scroll key; focus only changes emphasis.
    pub fn forward_key(&mut self, key: KeyEvent) {
        self.left.handle_key(key);
        self.right.handle_key(key);
    }

    pub fn forward_mouse(&mut self, mouse: MouseEvent) {
        self.left.handle_mouse(mouse, self.wheel_lines);
        self.right.handle_mouse(mouse, self.wheel_lines);
    }

    fn heading(&self, title: &str) -> Line<'static> {
        Line::from(Span::styled(
            title.to_uppercase(),
            Style::default()
                .fg(self.theme.colors.heading())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))
    }

    fn notes_lines(&self, problem: &Problem, width: usize) -> Vec<Line<'static>> {
        let body = Style::default().fg(self.theme.colors.fg());
        let sections = [
            ("Whiteboard", problem.whiteboard.clone()),
            ("Dry Run", problem.dry_run.clone()),
            ("Test Cases", problem.test_cases.clone()),
            ("Time Complexity", problem.complexity.time.summary()),
            ("Space Complexity", problem.complexity.space.summary()),
        ];

        let mut lines = Vec::new();
        for (i, (title, text)) in sections.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(self.heading(title));
            lines.extend(wrap_text(text, width, body));
        }
        lines
    }

    fn solution_lines(
        &self,
        problem: &Problem,
        variant: SolutionVariant,
        width: usize,
    ) -> Vec<Line<'static>> {
        let source = variant.source(problem);
        let mut lines = vec![self.heading(variant.heading()), Line::default()];

        match self.renderer.render(&fenced(source, &self.language), width) {
            Ok(rendered) => lines.extend(rendered),
            Err(err) => {
                warn!(
                    error = %err,
                    title = %problem.title,
                    "solution render failed, showing raw text"
                );
                let raw = Style::default().fg(self.theme.colors.fg());
                for source_line in source.lines() {
                    lines.extend(wrap_chars(
                        Line::from(Span::styled(source_line.replace('\t', "    "), raw)),
                        width,
                    ));
                }
            }
        }
        lines
    }
}
