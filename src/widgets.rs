//! Click-aware building blocks.
//!
//! Each widget draws itself and registers the click targets for what it
//! drew, so a tappable label can never drift away from its hit region.
//!
//! - [`PillRow`] — a single row of selectable pills.
//! - [`ClickableList`] — lines of text, some of which are buttons.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── PillRow ────────────────────────────────────────────────────

/// A row of pills, one of which is active.
///
/// ```ignore
/// PillRow::new()
///     .pill("Backend", true, PICK_FOCUS_BASE)
///     .pill("Frontend", false, PICK_FOCUS_BASE + 1)
///     .render(f, area, &mut cs);
/// ```
pub struct PillRow {
    pills: Vec<(String, bool, u16)>,
    gap: u16,
}

impl PillRow {
    pub fn new() -> Self {
        Self {
            pills: Vec::new(),
            gap: 1,
        }
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn pill(mut self, label: impl Into<String>, active: bool, action_id: u16) -> Self {
        self.pills.push((label.into(), active, action_id));
        self
    }

    fn style(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        }
    }

    /// Draw into the first row of `area` and register one target per pill.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut spans = Vec::with_capacity(self.pills.len() * 2);
        let mut widths = Vec::with_capacity(self.pills.len());
        let gap = " ".repeat(self.gap as usize);

        for (i, (label, active, action_id)) in self.pills.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(gap.clone()));
            }
            let padded = format!(" {} ", label);
            widths.push((Line::from(padded.as_str()).width() as u16, action_id));
            spans.push(Span::styled(padded, Self::style(active)));
        }

        let row = Rect { height: area.height.min(1), ..area };
        f.render_widget(Paragraph::new(Line::from(spans)), row);
        cs.register_pill_targets(&widths, self.gap, row);
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Lines for a [`Paragraph`], each optionally bound to an action.
///
/// Targets follow their line: pushing extra lines above a button moves its
/// hit row with it.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)`
    actions: Vec<(usize, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len(), action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Visual rows each line occupies at `width` columns. With `wrap` off,
    /// every line is one row.
    fn row_heights(&self, width: u16, wrap: bool) -> Vec<u16> {
        let w = width.max(1) as usize;
        self.lines
            .iter()
            .map(|line| {
                let lw = line.width();
                if !wrap || lw <= w {
                    1
                } else {
                    lw.div_ceil(w) as u16
                }
            })
            .collect()
    }

    /// Total visual rows at `width` columns.
    pub fn visual_rows(&self, width: u16, wrap: bool) -> u16 {
        self.row_heights(width, wrap)
            .into_iter()
            .fold(0u16, |acc, h| acc.saturating_add(h))
    }

    /// Register targets for every clickable line.
    ///
    /// `content` is the area the lines are drawn into (inside any borders),
    /// `scroll` the paragraph's vertical scroll in rows. Rows scrolled out or
    /// below `content` get no target.
    pub fn register_targets(&self, content: Rect, cs: &mut ClickState, scroll: u16, wrap: bool) {
        let heights = self.row_heights(content.width, wrap);
        let mut starts = Vec::with_capacity(heights.len());
        let mut acc = 0u16;
        for h in &heights {
            starts.push(acc);
            acc = acc.saturating_add(*h);
        }

        for &(idx, action_id) in &self.actions {
            let (Some(&start), Some(&height)) = (starts.get(idx), heights.get(idx)) else {
                continue;
            };
            for vr in start..start + height {
                if vr < scroll {
                    continue;
                }
                let row = content.y + (vr - scroll);
                if row >= content.bottom() {
                    break;
                }
                cs.add_row_target(content, row, action_id);
            }
        }
    }
}
