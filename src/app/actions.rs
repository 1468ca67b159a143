//! Semantic action IDs for SkillPulse click targets.

// ── Top bar ──────────────────────────────────────────────────
pub const BACK: u16 = 1;

// ── Landing ──────────────────────────────────────────────────
pub const SELECT_ROLE: u16 = 10;

// ── SelectFocus (base + option index) ────────────────────────
pub const PICK_ROLE_BASE: u16 = 20;
pub const PICK_FOCUS_BASE: u16 = 30;
pub const PICK_LOCATION_BASE: u16 = 40;
pub const PICK_LEVEL_BASE: u16 = 50;
pub const VIEW_SKILLS: u16 = 60;

// ── Results ──────────────────────────────────────────────────
pub const SCROLL_UP: u16 = 70;
pub const SCROLL_DOWN: u16 = 71;
