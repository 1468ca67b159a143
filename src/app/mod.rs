//! SkillPulse — pick a role, focus, location and level, then see the skills
//! employers ask for most.
//!
//! Three screens: Landing → SelectFocus → Results, with back navigation from
//! anywhere but Landing. Keys: Enter/[S] moves forward, [Q]/Esc goes back.

pub mod actions;
pub mod filters;
pub mod nav;
pub mod registry;
pub mod render;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::console;
use crate::input::{ClickState, InputEvent};

use actions::*;
use filters::{FilterOption, FilterPatch, FilterState, FocusArea, Level, Location, Role};
use nav::{History, Screen};
use registry::{Registry, ResultDataset};

/// Key the host sends for Enter.
pub const KEY_ENTER: char = '\n';
/// Key the host sends for Esc / Backspace.
pub const KEY_BACK: char = 'q';

/// The view flow controller. Owns the filter state and the screen history;
/// views only ever see them by reference.
pub struct SkillPulse {
    filters: FilterState,
    history: History,
    registry: Registry,
    results_scroll: u16,
    /// Largest useful scroll offset for Results, recorded by the renderer.
    results_max_scroll: Cell<u16>,
}

impl SkillPulse {
    pub fn new() -> Self {
        let registry = Registry::builtin();
        console::log(&format!("skillpulse: {} datasets + default", registry.len()));
        Self {
            filters: FilterState::default(),
            history: History::new(),
            registry,
            results_scroll: 0,
            results_max_scroll: Cell::new(u16::MAX),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn update_filters(&mut self, patch: FilterPatch) -> FilterState {
        self.filters.update(patch)
    }

    pub fn screen(&self) -> Screen {
        self.history.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Dataset for the current filters.
    pub fn dataset(&self) -> &'static ResultDataset {
        self.registry.resolve(&self.filters)
    }

    pub fn results_scroll(&self) -> u16 {
        self.results_scroll
    }

    pub(crate) fn set_results_max_scroll(&self, max: u16) {
        self.results_max_scroll.set(max);
    }

    pub fn go(&mut self, screen: Screen) {
        console::log(&format!("nav: {} -> {}", self.screen().name(), screen.name()));
        if screen == Screen::Results {
            self.results_scroll = 0;
            if self.registry.lookup_exact(&self.filters).is_none() {
                console::warn(&format!(
                    "no dataset for \"{}\", showing default",
                    self.filters.key()
                ));
            }
        }
        self.history.push(screen);
    }

    /// Returns `false` when already on the initial screen.
    pub fn back(&mut self) -> bool {
        let from = self.screen();
        if !self.history.back() {
            return false;
        }
        console::log(&format!("nav: {} <- {}", self.screen().name(), from.name()));
        true
    }

    fn scroll_results(&mut self, down: bool) -> bool {
        let max = self.results_max_scroll.get();
        let next = if down {
            self.results_scroll.saturating_add(1).min(max)
        } else {
            self.results_scroll.saturating_sub(1)
        };
        let moved = next != self.results_scroll;
        self.results_scroll = next;
        moved
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        if key == KEY_BACK {
            return self.back();
        }

        match self.screen() {
            Screen::Landing => match key {
                KEY_ENTER | 's' => {
                    self.go(Screen::SelectFocus);
                    true
                }
                _ => false,
            },
            Screen::SelectFocus => {
                let f = self.filters;
                let patch = match key {
                    '1' | '2' | '3' => {
                        let idx = (key as u8 - b'1') as usize;
                        FilterPatch::focus_area(FocusArea::ALL[idx])
                    }
                    'f' => FilterPatch::focus_area(f.focus_area.next()),
                    'F' => FilterPatch::focus_area(f.focus_area.prev()),
                    'r' => FilterPatch::role(f.role.next()),
                    'R' => FilterPatch::role(f.role.prev()),
                    'l' => FilterPatch::location(f.location.next()),
                    'L' => FilterPatch::location(f.location.prev()),
                    'v' => FilterPatch::level(f.level.next()),
                    'V' => FilterPatch::level(f.level.prev()),
                    KEY_ENTER | 's' => {
                        self.go(Screen::Results);
                        return true;
                    }
                    _ => return false,
                };
                self.update_filters(patch);
                true
            }
            Screen::Results => match key {
                'j' => self.scroll_results(true),
                'k' => self.scroll_results(false),
                _ => false,
            },
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        if action_id == BACK {
            return self.back();
        }

        match self.screen() {
            Screen::Landing => match action_id {
                SELECT_ROLE => {
                    self.go(Screen::SelectFocus);
                    true
                }
                _ => false,
            },
            Screen::SelectFocus => match action_id {
                VIEW_SKILLS => {
                    self.go(Screen::Results);
                    true
                }
                id => match pick_patch(id) {
                    Some(patch) => {
                        self.update_filters(patch);
                        true
                    }
                    None => false,
                },
            },
            Screen::Results => match action_id {
                SCROLL_UP => self.scroll_results(false),
                SCROLL_DOWN => self.scroll_results(true),
                _ => false,
            },
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}

/// Map an option click (`PICK_*_BASE + index`) to the patch it applies.
fn pick_patch(id: u16) -> Option<FilterPatch> {
    fn pick<T: FilterOption>(id: u16, base: u16) -> Option<T> {
        let idx = id.checked_sub(base)? as usize;
        T::ALL.get(idx).copied()
    }

    match id {
        id if (PICK_ROLE_BASE..PICK_FOCUS_BASE).contains(&id) => {
            pick::<Role>(id, PICK_ROLE_BASE).map(FilterPatch::role)
        }
        id if (PICK_FOCUS_BASE..PICK_LOCATION_BASE).contains(&id) => {
            pick::<FocusArea>(id, PICK_FOCUS_BASE).map(FilterPatch::focus_area)
        }
        id if (PICK_LOCATION_BASE..PICK_LEVEL_BASE).contains(&id) => {
            pick::<Location>(id, PICK_LOCATION_BASE).map(FilterPatch::location)
        }
        id if (PICK_LEVEL_BASE..VIEW_SKILLS).contains(&id) => {
            pick::<Level>(id, PICK_LEVEL_BASE).map(FilterPatch::level)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(app: &mut SkillPulse, c: char) -> bool {
        app.handle_input(&InputEvent::Key(c))
    }

    fn click(app: &mut SkillPulse, id: u16) -> bool {
        app.handle_input(&InputEvent::Click(id))
    }

    #[test]
    fn starts_on_landing_with_defaults() {
        let app = SkillPulse::new();
        assert_eq!(app.screen(), Screen::Landing);
        assert_eq!(*app.filters(), FilterState::default());
        assert!(!app.can_go_back());
    }

    #[test]
    fn forward_flow_via_keys() {
        let mut app = SkillPulse::new();
        assert!(key(&mut app, KEY_ENTER));
        assert_eq!(app.screen(), Screen::SelectFocus);
        assert!(key(&mut app, 's'));
        assert_eq!(app.screen(), Screen::Results);
    }

    #[test]
    fn forward_flow_via_clicks() {
        let mut app = SkillPulse::new();
        assert!(click(&mut app, SELECT_ROLE));
        assert_eq!(app.screen(), Screen::SelectFocus);
        assert!(click(&mut app, VIEW_SKILLS));
        assert_eq!(app.screen(), Screen::Results);
    }

    #[test]
    fn actions_only_apply_on_their_screen() {
        let mut app = SkillPulse::new();
        assert!(!click(&mut app, VIEW_SKILLS));
        assert_eq!(app.screen(), Screen::Landing);
        assert!(!click(&mut app, PICK_FOCUS_BASE + 1));
        assert_eq!(app.filters().focus_area, FocusArea::Backend);
    }

    #[test]
    fn back_from_results_keeps_filters() {
        let mut app = SkillPulse::new();
        click(&mut app, SELECT_ROLE);
        click(&mut app, PICK_FOCUS_BASE + 2);
        click(&mut app, PICK_LOCATION_BASE + 3);
        let before = *app.filters();

        click(&mut app, VIEW_SKILLS);
        assert!(click(&mut app, BACK));
        assert_eq!(app.screen(), Screen::SelectFocus);
        assert_eq!(*app.filters(), before);
    }

    #[test]
    fn back_via_key_unwinds_to_landing() {
        let mut app = SkillPulse::new();
        key(&mut app, KEY_ENTER);
        key(&mut app, KEY_ENTER);
        assert!(key(&mut app, KEY_BACK));
        assert!(key(&mut app, KEY_BACK));
        assert_eq!(app.screen(), Screen::Landing);
        // Nothing left to pop
        assert!(!key(&mut app, KEY_BACK));
        assert!(!click(&mut app, BACK));
    }

    #[test]
    fn focus_keys_pick_directly() {
        let mut app = SkillPulse::new();
        key(&mut app, KEY_ENTER);
        key(&mut app, '3');
        assert_eq!(app.filters().focus_area, FocusArea::FullStack);
        key(&mut app, '2');
        assert_eq!(app.filters().focus_area, FocusArea::Frontend);
        key(&mut app, 'f');
        assert_eq!(app.filters().focus_area, FocusArea::FullStack);
        key(&mut app, 'f');
        assert_eq!(app.filters().focus_area, FocusArea::Backend);
        key(&mut app, 'F');
        assert_eq!(app.filters().focus_area, FocusArea::FullStack);
    }

    #[test]
    fn single_option_dimensions_cycle_onto_themselves() {
        let mut app = SkillPulse::new();
        key(&mut app, KEY_ENTER);
        let before = *app.filters();
        for c in ['r', 'R', 'v', 'V'] {
            assert!(key(&mut app, c), "{c} not handled");
            assert_eq!(*app.filters(), before, "{c} changed the filters");
        }
        assert_eq!(app.screen(), Screen::SelectFocus);
    }

    #[test]
    fn location_keys_cycle_both_ways() {
        let mut app = SkillPulse::new();
        key(&mut app, KEY_ENTER);
        key(&mut app, 'l');
        assert_eq!(app.filters().location, Location::DallasFortWorth);
        key(&mut app, 'L');
        key(&mut app, 'L');
        assert_eq!(app.filters().location, Location::Austin);
    }

    #[test]
    fn option_clicks_patch_one_dimension() {
        let mut app = SkillPulse::new();
        click(&mut app, SELECT_ROLE);
        assert!(click(&mut app, PICK_LOCATION_BASE + 2));
        assert_eq!(app.filters().location, Location::NewYorkCity);
        assert_eq!(app.filters().focus_area, FocusArea::Backend);

        assert!(click(&mut app, PICK_ROLE_BASE));
        assert!(click(&mut app, PICK_LEVEL_BASE));
        // Past the end of an option list
        assert!(!click(&mut app, PICK_LOCATION_BASE + 9));
        assert!(!click(&mut app, PICK_ROLE_BASE + 1));
    }

    #[test]
    fn default_selection_resolves_to_backend_dataset() {
        let mut app = SkillPulse::new();
        click(&mut app, SELECT_ROLE);
        click(&mut app, VIEW_SKILLS);
        let ds = app.dataset();
        assert_eq!(ds.title, "Junior Backend Software Engineer");
        assert_eq!(ds.skills[0].name, "Python");
        assert_eq!(ds.skills[0].pct, 68);
    }

    #[test]
    fn other_selection_resolves_to_default_dataset() {
        let mut app = SkillPulse::new();
        click(&mut app, SELECT_ROLE);
        click(&mut app, PICK_FOCUS_BASE + 1);
        click(&mut app, VIEW_SKILLS);
        assert_eq!(app.dataset().title, "Junior Software Engineer");
    }

    #[test]
    fn results_scroll_is_clamped() {
        let mut app = SkillPulse::new();
        key(&mut app, KEY_ENTER);
        key(&mut app, KEY_ENTER);
        app.set_results_max_scroll(2);

        assert!(!key(&mut app, 'k'));
        assert!(key(&mut app, 'j'));
        assert!(click(&mut app, SCROLL_DOWN));
        assert!(!key(&mut app, 'j'));
        assert_eq!(app.results_scroll(), 2);
        assert!(click(&mut app, SCROLL_UP));
        assert_eq!(app.results_scroll(), 1);
    }

    #[test]
    fn entering_results_resets_scroll() {
        let mut app = SkillPulse::new();
        key(&mut app, KEY_ENTER);
        key(&mut app, KEY_ENTER);
        app.set_results_max_scroll(5);
        key(&mut app, 'j');
        key(&mut app, 'j');
        key(&mut app, KEY_BACK);
        key(&mut app, KEY_ENTER);
        assert_eq!(app.results_scroll(), 0);
    }

    #[test]
    fn pick_patch_ranges() {
        assert_eq!(pick_patch(PICK_FOCUS_BASE), Some(FilterPatch::focus_area(FocusArea::Backend)));
        assert_eq!(
            pick_patch(PICK_LOCATION_BASE + 4),
            Some(FilterPatch::location(Location::Austin))
        );
        assert_eq!(pick_patch(SELECT_ROLE), None);
        assert_eq!(pick_patch(VIEW_SKILLS), None);
    }
}
