//! SkillPulse rendering (read-only from state).
//!
//! Layout: top bar (back + brand) over one of the three screens.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, PillRow};

use super::actions::*;
use super::filters::{FilterOption, FilterState, FocusArea};
use super::nav::Screen;
use super::registry::{ResultDataset, SkillEntry};
use super::SkillPulse;

const BRAND: &str = "SkillPulse";
const BACK_LABEL: &str = " ← Back ";

pub fn render(
    app: &SkillPulse,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(6)])
        .split(area);

    let mut cs = click_state.borrow_mut();
    render_top_bar(app, f, chunks[0], &mut cs);
    match app.screen() {
        Screen::Landing => render_landing(f, chunks[1], &mut cs),
        Screen::SelectFocus => render_select_focus(app.filters(), f, chunks[1], &mut cs),
        Screen::Results => render_results(app, f, chunks[1], &mut cs),
    }
}

fn content_borders(area: Rect) -> Borders {
    if is_narrow_layout(area.width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    }
}

fn button_line(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}  ", label),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn gray(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::Gray)))
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

// ── Top bar ────────────────────────────────────────────────────────────

fn render_top_bar(app: &SkillPulse, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let back_width = Line::from(BACK_LABEL).width() as u16;
    let brand = Span::styled(
        BRAND,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    // Keep the brand in the same column whether or not Back is shown
    let lead = if app.can_go_back() {
        Span::styled(BACK_LABEL, Style::default().fg(Color::Yellow))
    } else {
        Span::raw(" ".repeat(back_width as usize))
    };
    let line = Line::from(vec![lead, Span::raw("  "), brand]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(line).block(block), area);

    if app.can_go_back() {
        cs.add_click_target(Rect::new(area.x, area.y, back_width + 1, area.height), BACK);
    }
}

// ── Landing ────────────────────────────────────────────────────────────

fn render_landing(f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let block = Block::default()
        .borders(content_borders(area))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled("See the Top Skills Employers Want for", heading)));
    cl.push(Line::from(Span::styled(
        "Junior Software Engineers",
        heading.fg(Color::Cyan),
    )));
    cl.push(Line::from(""));
    cl.push(gray("Get fast, clear insights based on real job postings from the last 30 days."));
    cl.push(gray("Know exactly which hard skills matter most for your next role."));
    cl.push(Line::from(""));
    cl.push_clickable(button_line("Select a Role →"), SELECT_ROLE);
    cl.push(Line::from(""));
    cl.push(hint("Data refreshed weekly from real junior software engineering job postings"));

    let top_pad = inner.height.saturating_sub(cl.visual_rows(inner.width, true)) / 2;
    let content = Rect {
        y: inner.y + top_pad,
        height: inner.height - top_pad,
        ..inner
    };
    cl.register_targets(content, cs, 0, true);

    let widget = Paragraph::new(cl.into_lines())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, content);
}

// ── Select Focus ───────────────────────────────────────────────────────

fn field_label(label: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", label),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// A field label followed by one radio line per option.
fn push_options<T: FilterOption>(
    cl: &mut ClickableList<'static>,
    label: &'static str,
    selected: T,
    action_base: u16,
) {
    cl.push(field_label(label));
    for (i, &option) in T::ALL.iter().enumerate() {
        let (mark, style) = if option == selected {
            (
                "(•)",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("( )", Style::default().fg(Color::White))
        };
        let line = Line::from(Span::styled(format!("   {} {}", mark, option.label()), style));
        cl.push_clickable(line, action_base + i as u16);
    }
}

fn render_select_focus(filters: &FilterState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let block = Block::default()
        .borders(content_borders(area))
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Select Your Focus ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut cl = ClickableList::new();
    cl.push(gray(" Choose the area you're most interested in pursuing"));
    cl.push(Line::from(""));
    push_options(&mut cl, "Role", filters.role, PICK_ROLE_BASE);
    cl.push(Line::from(""));
    cl.push(field_label("Focus Area"));
    // Drawn over by the pill row below
    let pill_row = cl.len() as u16;
    cl.push(Line::from(""));
    cl.push(Line::from(""));
    push_options(&mut cl, "Location", filters.location, PICK_LOCATION_BASE);
    cl.push(Line::from(""));
    push_options(&mut cl, "Level", filters.level, PICK_LEVEL_BASE);
    cl.push(Line::from(""));
    cl.push_clickable(button_line("View Top Skills →"), VIEW_SKILLS);
    cl.push(Line::from(""));
    cl.push(hint(" 1-3/f focus · r role · l/L location · v level"));
    cl.push(hint(" Enter view skills · Esc back"));

    cl.register_targets(inner, cs, 0, false);
    f.render_widget(Paragraph::new(cl.into_lines()), inner);

    let y = inner.y + pill_row;
    if y < inner.bottom() {
        // Three pills need 35 columns with a 2-wide gap
        let gap = if is_narrow_layout(area.width) { 1 } else { 2 };
        let mut pills = PillRow::new().gap(gap);
        for (i, &focus) in FocusArea::ALL.iter().enumerate() {
            pills = pills.pill(
                focus.label(),
                focus == filters.focus_area,
                PICK_FOCUS_BASE + i as u16,
            );
        }
        let row = Rect::new(inner.x + 3, y, inner.width.saturating_sub(3), 1);
        pills.render(f, row, cs);
    }
}

// ── Results ────────────────────────────────────────────────────────────

fn pct_label(skill: &SkillEntry) -> String {
    format!("{}%", skill.pct)
}

fn progress_bar(pct: u8, width: usize) -> String {
    let filled = ((pct as usize * width + 50) / 100).min(width);
    "█".repeat(filled) + &"░".repeat(width - filled)
}

/// Three lines per skill: rank/name/percentage, caption, bar.
fn skill_lines(rank: usize, skill: &SkillEntry, width: u16, bar_width: usize) -> Vec<Line<'static>> {
    let rank_label = format!(" {} ", rank);
    let name = format!(" {}", skill.name);
    let pct = pct_label(skill);
    let used = Line::from(rank_label.as_str()).width()
        + Line::from(name.as_str()).width()
        + pct.len()
        + 1;
    let pad = (width as usize).saturating_sub(used).max(1);

    vec![
        Line::from(vec![
            Span::styled(
                rank_label,
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            Span::styled(
                name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad)),
            Span::styled(
                pct.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        gray(format!("     Appears in {} of postings", pct)),
        Line::from(vec![
            Span::raw("     "),
            Span::styled(progress_bar(skill.pct, bar_width), Style::default().fg(Color::Cyan)),
        ]),
    ]
}

fn results_lines(ds: &ResultDataset, width: u16, narrow: bool) -> Vec<Line<'static>> {
    let bar_width = (if narrow { 16 } else { 30 }).min((width as usize).saturating_sub(6));
    let rule = Line::from(Span::styled(
        "─".repeat(width as usize),
        Style::default().fg(Color::DarkGray),
    ));

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", ds.title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        gray(format!(" {}", ds.subtitle)),
        rule.clone(),
    ];
    for (i, skill) in ds.skills.iter().enumerate() {
        if i > 0 {
            lines.push(rule.clone());
        }
        lines.extend(skill_lines(i + 1, skill, width, bar_width));
    }
    lines.push(Line::from(""));
    lines.push(hint(
        " These insights are compiled from real job postings for junior software engineering \
         roles. Skills are ranked by frequency of appearance across all analyzed postings.",
    ));
    lines
}

fn render_results(app: &SkillPulse, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let block = Block::default()
        .borders(content_borders(area))
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            " Top 5 In-Demand Skills ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = results_lines(app.dataset(), inner.width, is_narrow_layout(area.width));
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total = widget.line_count(inner.width) as u16;

    // Reserve a row for the scroll controls only when the card overflows
    let (body, controls) = if total > inner.height {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);
        (chunks[0], Some(chunks[1]))
    } else {
        (inner, None)
    };

    let max_scroll = total.saturating_sub(body.height);
    app.set_results_max_scroll(max_scroll);
    let scroll = app.results_scroll().min(max_scroll);
    f.render_widget(widget.scroll((scroll, 0)), body);

    if let Some(row) = controls {
        PillRow::new()
            .gap(2)
            .pill("▲ up", scroll > 0, SCROLL_UP)
            .pill("▼ down", scroll < max_scroll, SCROLL_DOWN)
            .render(f, row, cs);
    }
}
