use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Word-wrap plain text to `width` columns, one source line at a time.
///
/// Blank source lines are kept and leading indentation survives on the first
/// row of each source line.
pub fn wrap_text(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for source in text.lines() {
        let expanded = source.replace('\t', "    ");
        out.extend(wrap_words(
            Line::from(Span::styled(expanded, style)),
            width,
        ));
    }
    if out.is_empty() {
        out.push(Line::default());
    }
    out
}

/// Greedy word wrap that keeps each span's style. Whitespace at the start of
/// a continuation row is dropped; words wider than `width` are split.
pub fn wrap_words(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line];
    }

    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0usize;

    for span in line.spans {
        let style = span.style;
        for token in split_tokens(&span.content) {
            let token_width = UnicodeWidthStr::width(token);
            let is_space = token.chars().all(char::is_whitespace);

            if is_space && row_width == 0 && !rows.is_empty() {
                continue;
            }
            if row_width + token_width <= width {
                row.push(Span::styled(token.to_string(), style));
                row_width += token_width;
                continue;
            }
            if is_space {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
                continue;
            }
            if row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            if token_width <= width {
                row.push(Span::styled(token.to_string(), style));
                row_width = token_width;
                continue;
            }
            for chunk in split_by_width(token, width) {
                let chunk_width = UnicodeWidthStr::width(chunk.as_str());
                if row_width + chunk_width > width && row_width > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(Span::styled(chunk, style));
                row_width += chunk_width;
            }
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows.into_iter().map(Line::from).collect()
}

/// Hard wrap at exactly `width` columns, for code where word boundaries
/// carry no meaning.
pub fn wrap_chars(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line];
    }

    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0usize;

    for span in line.spans {
        let style = span.style;
        let mut current = String::new();
        for ch in span.content.chars() {
            let ch_width = char_width(ch);
            if row_width + ch_width > width && row_width > 0 {
                if !current.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut current), style));
                }
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            current.push(ch);
            row_width += ch_width;
        }
        if !current.is_empty() {
            row.push(Span::styled(current, style));
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows.into_iter().map(Line::from).collect()
}

fn char_width(ch: char) -> usize {
    let mut buf = [0u8; 4];
    UnicodeWidthStr::width(&*ch.encode_utf8(&mut buf))
}

/// Alternating runs of whitespace and non-whitespace.
fn split_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;
    for (i, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

fn split_by_width(word: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0usize;
    for ch in word.chars() {
        let w = char_width(ch);
        if chunk_width + w > width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(ch);
        chunk_width += w;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// Plain text of a line, for comparisons and fallbacks.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
