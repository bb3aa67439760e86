use unicode_width::UnicodeWidthStr;

/// Columns reserved on each side of the problem list.
pub const LIST_MARGIN_X: u16 = 2;
/// Total border thickness around a detail pane, per axis.
pub const PANE_BORDER: u16 = 2;
/// Rows taken by the bordered header boxes.
pub const HEADER_HEIGHT: u16 = 3;

/// Footer hint packing: one column of padding on each side, one between hints.
const FOOTER_PADDING: usize = 2;
const HINT_SEPARATOR: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Listing,
    Viewing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionLayout {
    pub list: Size,
    /// Size of each detail viewport; only present while viewing a problem.
    pub panes: Option<Size>,
}

/// Pane and list sizes for a window, given the measured chrome heights.
pub fn compute(
    width: u16,
    height: u16,
    header_height: u16,
    footer_height: u16,
    mode: LayoutMode,
) -> SessionLayout {
    let body_height = height
        .saturating_sub(header_height)
        .saturating_sub(footer_height);

    let list = Size {
        width: width.saturating_sub(LIST_MARGIN_X * 2),
        height: body_height,
    };

    let panes = match mode {
        LayoutMode::Listing => None,
        LayoutMode::Viewing => Some(Size {
            width: (width / 2).saturating_sub(PANE_BORDER),
            height: body_height.saturating_sub(PANE_BORDER),
        }),
    };

    SessionLayout { list, panes }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }

    /// Rendered width: a one-column margin, the padded key badge, a space and the action.
    pub fn width(&self) -> usize {
        1 + UnicodeWidthStr::width(self.key) + 2 + 1 + UnicodeWidthStr::width(self.action)
    }
}

/// Pack hints into as few footer rows as fit in `width`.
pub fn pack_hint_lines(hints: &[KeyHint], width: usize) -> Vec<Vec<KeyHint>> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let mut out: Vec<Vec<KeyHint>> = Vec::new();
    let mut current: Vec<KeyHint> = Vec::new();
    let mut used = FOOTER_PADDING;

    for hint in hints {
        let candidate = if current.is_empty() {
            used + hint.width()
        } else {
            used + HINT_SEPARATOR + hint.width()
        };
        if candidate <= width || current.is_empty() {
            current.push(*hint);
            used = candidate;
        } else {
            out.push(std::mem::take(&mut current));
            current.push(*hint);
            used = FOOTER_PADDING + hint.width();
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Footer height for `hints` at `width`; never less than one row.
pub fn footer_height(hints: &[KeyHint], width: u16) -> u16 {
    pack_hint_lines(hints, width as usize).len().max(1) as u16
}
