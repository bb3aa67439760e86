use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

/// Scrollable buffer of pre-wrapped lines.
///
/// The viewport knows nothing about what it shows; callers rebuild the
/// content whenever its width changes.
#[derive(Clone, Debug, Default)]
pub struct Viewport {
    lines: Vec<Line<'static>>,
    width: u16,
    height: u16,
    offset: usize,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            lines: Vec::new(),
            width,
            height,
            offset: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_content(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    pub fn visible_lines(&self) -> &[Line<'static>] {
        let end = (self.offset + self.height as usize).min(self.lines.len());
        &self.lines[self.offset.min(end)..end]
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    fn page(&self) -> usize {
        (self.height as usize).max(1)
    }

    fn half_page(&self) -> usize {
        (self.height as usize / 2).max(1)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Down => self.scroll_down(1),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Char('j') if !ctrl => self.scroll_down(1),
            KeyCode::Char('k') if !ctrl => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(self.page()),
            KeyCode::PageUp => self.scroll_up(self.page()),
            KeyCode::Char(' ') | KeyCode::Char('f') if !ctrl => self.scroll_down(self.page()),
            KeyCode::Char('b') if !ctrl => self.scroll_up(self.page()),
            KeyCode::Char('d') => self.scroll_down(self.half_page()),
            KeyCode::Char('u') => self.scroll_up(self.half_page()),
            KeyCode::Home => self.goto_top(),
            KeyCode::End => self.goto_bottom(),
            KeyCode::Char('g') if !ctrl => self.goto_top(),
            KeyCode::Char('G') if !ctrl => self.goto_bottom(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, wheel_lines: u16) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_down(wheel_lines as usize),
            MouseEventKind::ScrollUp => self.scroll_up(wheel_lines as usize),
            _ => {}
        }
    }
}

impl Widget for &Viewport {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.visible_lines().to_vec()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize, height: u16) -> Viewport {
        let mut viewport = Viewport::new(20, height);
        viewport.set_content((0..count).map(|i| Line::from(format!("line {i}"))).collect());
        viewport
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn wheel(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut viewport = filled(10, 4);
        viewport.scroll_down(100);
        assert_eq!(viewport.offset(), 6);
        viewport.scroll_up(100);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut viewport = filled(2, 4);
        viewport.handle_key(key(KeyCode::Down));
        viewport.handle_key(key(KeyCode::End));
        assert_eq!(viewport.offset(), 0);
        assert_eq!(viewport.visible_lines().len(), 2);
    }

    #[test]
    fn keymap_moves_by_line_page_and_half_page() {
        let mut viewport = filled(50, 10);
        viewport.handle_key(key(KeyCode::Char('j')));
        assert_eq!(viewport.offset(), 1);
        viewport.handle_key(key(KeyCode::PageDown));
        assert_eq!(viewport.offset(), 11);
        viewport.handle_key(key(KeyCode::Char('d')));
        assert_eq!(viewport.offset(), 16);
        viewport.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(viewport.offset(), 11);
        viewport.handle_key(key(KeyCode::Char('b')));
        assert_eq!(viewport.offset(), 1);
        viewport.handle_key(key(KeyCode::Char('G')));
        assert_eq!(viewport.offset(), 40);
        viewport.handle_key(key(KeyCode::Char('g')));
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut viewport = filled(50, 10);
        viewport.handle_key(key(KeyCode::Tab));
        viewport.handle_key(key(KeyCode::Char('c')));
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn mouse_wheel_scrolls() {
        let mut viewport = filled(50, 10);
        viewport.handle_mouse(wheel(MouseEventKind::ScrollDown), 3);
        assert_eq!(viewport.offset(), 3);
        viewport.handle_mouse(wheel(MouseEventKind::ScrollUp), 1);
        assert_eq!(viewport.offset(), 2);
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut viewport = filled(50, 10);
        viewport.goto_bottom();
        viewport.set_content(vec![Line::from("only")]);
        assert_eq!(viewport.offset(), 0);
        assert_eq!(viewport.visible_lines().len(), 1);
    }

    #[test]
    fn visible_window_follows_offset() {
        let mut viewport = filled(10, 3);
        viewport.scroll_down(2);
        let visible: Vec<String> = viewport
            .visible_lines()
            .iter()
            .map(|l| l.spans[0].content.to_string())
            .collect();
        assert_eq!(visible, vec!["line 2", "line 3", "line 4"]);
    }
}
