//! Input normalization and click hit-testing.
//!
//! The renderer registers a [`ClickTarget`] for everything tappable it draws;
//! the mouse handler maps a pixel position to a terminal cell and asks
//! [`ClickState::hit_test`] which action lives there.

use ratzilla::ratatui::layout::Rect;

/// Keyboard and pointer input, reduced to what the controller dispatches on.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press. Enter and Esc arrive as the controller's sentinel chars.
    Key(char),
    /// A tap/click on a registered target, identified by its action ID.
    Click(u16),
}

/// A tappable region in terminal cell coordinates.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Click targets for the frame currently on screen, plus the terminal size
/// needed to convert pixels to cells.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    /// Called at the start of every frame; targets are rebuilt by the renderer.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        if rect.width > 0 && rect.height > 0 {
            self.targets.push(ClickTarget { rect, action_id });
        }
    }

    /// A full-width, one-row target. Rows outside `area` are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.bottom() {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Targets for a row of pills laid out left to right.
    ///
    /// `pills` holds `(display_width, action_id)` for each padded label, and
    /// `gap` is the width drawn between neighbours. Each target covers its
    /// label plus half of each adjacent gap; the first and last pills stretch
    /// to the edges of `area` so the whole row is tappable.
    pub fn register_pill_targets(&mut self, pills: &[(u16, u16)], gap: u16, area: Rect) {
        if pills.is_empty() || area.width == 0 {
            return;
        }

        let mut start = 0u16;
        let mut spans: Vec<(u16, u16)> = Vec::with_capacity(pills.len());
        for &(w, _) in pills {
            spans.push((start, start + w));
            start += w + gap;
        }

        let last = pills.len() - 1;
        for (i, &(_, action_id)) in pills.iter().enumerate() {
            let left = if i == 0 { 0 } else { spans[i].0 - gap / 2 - gap % 2 };
            let right = if i == last {
                area.width
            } else {
                (spans[i].1 + gap / 2).min(area.width)
            };
            if right > left {
                self.add_click_target(
                    Rect::new(area.x + left, area.y, right - left, area.height.max(1)),
                    action_id,
                );
            }
        }
    }

    /// Action under `(col, row)`. Later registrations sit on top and win
    /// when targets overlap.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets
            .iter()
            .rev()
            .find(|t| {
                col >= t.rect.x && col < t.rect.right() && row >= t.rect.y && row < t.rect.bottom()
            })
            .map(|t| t.action_id)
    }
}

/// Screens narrower than this collapse borders and shrink bars.
pub const NARROW_WIDTH: u16 = 60;

pub fn is_narrow_layout(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// Map a pixel offset inside the grid (`click_y` from its top edge) to a row.
/// `None` if outside the grid or the grid has no size yet.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    pixel_to_cell(click_y, grid_height, terminal_rows)
}

/// Horizontal counterpart of [`pixel_y_to_row`].
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    pixel_to_cell(click_x, grid_width, terminal_cols)
}

fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}
