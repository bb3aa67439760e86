use pulldown_cmark::{
    CodeBlockKind, Event as MdEvent, Options as MdOptions, Parser as MdParser, Tag, TagEnd,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme as SyntaxTheme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use thiserror::Error;

use crate::render::wrap::{wrap_chars, wrap_words};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),
}

/// Turns markdown source into styled terminal lines no wider than `width`.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str, width: usize) -> Result<Vec<Line<'static>>, RenderError>;
}

/// Wrap `code` in a fenced block tagged with `language`.
pub fn fenced(code: &str, language: &str) -> String {
    format!("```{language}\n{code}\n```")
}

/// Markdown renderer backed by pulldown-cmark, with syntect highlighting for
/// fenced code blocks.
pub struct HighlightRenderer {
    syntaxes: SyntaxSet,
    theme: SyntaxTheme,
}

impl HighlightRenderer {
    pub fn new(theme_name: &str) -> Self {
        let mut themes = ThemeSet::load_defaults().themes;
        let theme = themes
            .remove(theme_name)
            .or_else(|| themes.remove("base16-ocean.dark"))
            .unwrap_or_default();
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }

    fn highlight(
        &self,
        code: &str,
        language: &str,
        width: usize,
    ) -> Result<Vec<Line<'static>>, RenderError> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(language)
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        let mut out = Vec::new();
        for source in LinesWithEndings::from(code) {
            let ranges = highlighter.highlight_line(source, &self.syntaxes)?;
            let spans: Vec<Span<'static>> = ranges
                .into_iter()
                .filter_map(|(style, text)| {
                    let text = text.trim_end_matches(['\n', '\r']);
                    if text.is_empty() {
                        return None;
                    }
                    Some(Span::styled(text.replace('\t', "    "), to_terminal_style(style)))
                })
                .collect();
            out.extend(wrap_chars(Line::from(spans), width));
        }
        Ok(out)
    }
}

fn to_terminal_style(style: syntect::highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut out = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}

#[derive(Clone, Copy)]
enum ListKind {
    Bullet,
    Ordered(u64),
}

impl MarkdownRenderer for HighlightRenderer {
    fn render(&self, markdown: &str, width: usize) -> Result<Vec<Line<'static>>, RenderError> {
        let mut options = MdOptions::empty();
        options.insert(MdOptions::ENABLE_STRIKETHROUGH);

        let mut out: Vec<Line<'static>> = Vec::new();
        let mut pending: Vec<Span<'static>> = Vec::new();
        let mut code: Option<(String, String)> = None;
        let mut list_stack: Vec<ListKind> = Vec::new();
        let mut bold = 0usize;
        let mut italic = 0usize;
        let mut heading = false;

        let flush = |pending: &mut Vec<Span<'static>>, out: &mut Vec<Line<'static>>| {
            if !pending.is_empty() {
                out.extend(wrap_words(Line::from(std::mem::take(pending)), width));
            }
        };

        for event in MdParser::new_ext(markdown, options) {
            if let Some((language, body)) = code.as_mut() {
                match event {
                    MdEvent::Text(text) => body.push_str(&text),
                    MdEvent::End(TagEnd::CodeBlock) => {
                        let lines = self.highlight(body, language, width)?;
                        out.extend(lines);
                        out.push(Line::default());
                        code = None;
                    }
                    _ => {}
                }
                continue;
            }

            match event {
                MdEvent::Start(Tag::CodeBlock(kind)) => {
                    flush(&mut pending, &mut out);
                    let language = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().unwrap_or("").to_string()
                        }
                        CodeBlockKind::Indented => String::new(),
                    };
                    code = Some((language, String::new()));
                }
                MdEvent::Start(Tag::Heading { .. }) => {
                    flush(&mut pending, &mut out);
                    heading = true;
                }
                MdEvent::End(TagEnd::Heading(_)) => {
                    flush(&mut pending, &mut out);
                    heading = false;
                    out.push(Line::default());
                }
                MdEvent::Start(Tag::Strong) => bold += 1,
                MdEvent::End(TagEnd::Strong) => bold = bold.saturating_sub(1),
                MdEvent::Start(Tag::Emphasis) => italic += 1,
                MdEvent::End(TagEnd::Emphasis) => italic = italic.saturating_sub(1),
                MdEvent::Start(Tag::List(start)) => {
                    flush(&mut pending, &mut out);
                    list_stack.push(match start {
                        Some(n) => ListKind::Ordered(n),
                        None => ListKind::Bullet,
                    });
                }
                MdEvent::End(TagEnd::List(_)) => {
                    flush(&mut pending, &mut out);
                    list_stack.pop();
                    if list_stack.is_empty() {
                        out.push(Line::default());
                    }
                }
                MdEvent::Start(Tag::Item) => {
                    flush(&mut pending, &mut out);
                    let indent = "  ".repeat(list_stack.len().saturating_sub(1));
                    let marker = match list_stack.last_mut() {
                        Some(ListKind::Ordered(n)) => {
                            let marker = format!("{indent}{n}. ");
                            *n += 1;
                            marker
                        }
                        _ => format!("{indent}• "),
                    };
                    pending.push(Span::raw(marker));
                }
                MdEvent::End(TagEnd::Item) => flush(&mut pending, &mut out),
                MdEvent::End(TagEnd::Paragraph) => {
                    flush(&mut pending, &mut out);
                    if list_stack.is_empty() {
                        out.push(Line::default());
                    }
                }
                MdEvent::Text(text) => {
                    let mut style = Style::default();
                    if bold > 0 || heading {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    if italic > 0 {
                        style = style.add_modifier(Modifier::ITALIC);
                    }
                    pending.push(Span::styled(text.to_string(), style));
                }
                MdEvent::Code(text) => {
                    pending.push(Span::styled(
                        text.to_string(),
                        Style::default().add_modifier(Modifier::REVERSED),
                    ));
                }
                MdEvent::SoftBreak => pending.push(Span::raw(" ")),
                MdEvent::HardBreak => flush(&mut pending, &mut out),
                MdEvent::Rule => {
                    flush(&mut pending, &mut out);
                    out.push(Line::from("─".repeat(width.clamp(1, 48))));
                }
                _ => {}
            }
        }

        flush(&mut pending, &mut out);
        while out.last().is_some_and(|line| line.width() == 0) {
            out.pop();
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::wrap::line_text;

    fn renderer() -> HighlightRenderer {
        HighlightRenderer::new("base16-ocean.dark")
    }

    #[test]
    fn fenced_code_keeps_every_line() {
        let code = "def f(x):\n    return x + 1\n\nprint(f(2))";
        let lines = renderer().render(&fenced(code, "python"), 80).unwrap();
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(
            text,
            vec!["def f(x):", "    return x + 1", "", "print(f(2))"]
        );
    }

    #[test]
    fn code_is_colored() {
        let lines = renderer().render(&fenced("x = 1", "python"), 80).unwrap();
        assert!(
            lines[0]
                .spans
                .iter()
                .any(|span| matches!(span.style.fg, Some(Color::Rgb(..))))
        );
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text() {
        let lines = renderer()
            .render(&fenced("some text", "not-a-language"), 80)
            .unwrap();
        assert_eq!(line_text(&lines[0]), "some text");
    }

    #[test]
    fn long_code_lines_are_hard_wrapped() {
        let lines = renderer()
            .render(&fenced("abcdefghijkl", "python"), 5)
            .unwrap();
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text, vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn prose_is_wrapped_and_styled() {
        let lines = renderer()
            .render("some **bold** words here", 10)
            .unwrap();
        assert!(lines.iter().all(|line| line.width() <= 10));
        assert!(lines.iter().flat_map(|l| l.spans.iter()).any(|s| {
            s.content == "bold" && s.style.add_modifier.contains(Modifier::BOLD)
        }));
    }

    #[test]
    fn lists_get_markers() {
        let lines = renderer().render("- one\n- two\n\n1. first", 40).unwrap();
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert!(text.contains(&"• one".to_string()));
        assert!(text.contains(&"• two".to_string()));
        assert!(text.contains(&"1. first".to_string()));
    }

    #[test]
    fn rendering_is_deterministic() {
        let source = fenced("for i in range(3):\n    print(i)", "python");
        let r = renderer();
        assert_eq!(r.render(&source, 30).unwrap(), r.render(&source, 30).unwrap());
    }
}
