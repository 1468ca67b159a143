//! Filter dimensions and the filter state the SelectFocus screen edits.

/// Separator between the four labels of a composite registry key.
pub const KEY_SEPARATOR: char = '|';

/// A closed set of options for one filter dimension.
pub trait FilterOption: Copy + PartialEq + 'static {
    /// Every option in display order.
    const ALL: &'static [Self];

    /// Human-readable label, also used to build composite keys.
    fn label(self) -> &'static str;

    /// Position within [`ALL`](FilterOption::ALL).
    fn index(self) -> usize {
        Self::ALL.iter().position(|&o| o == self).unwrap_or(0)
    }

    /// Next option in display order, wrapping around.
    fn next(self) -> Self {
        let all = Self::ALL;
        all[(self.index() + 1) % all.len()]
    }

    /// Previous option in display order, wrapping around.
    fn prev(self) -> Self {
        let all = Self::ALL;
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    SoftwareEngineer,
}

impl FilterOption for Role {
    const ALL: &'static [Self] = &[Role::SoftwareEngineer];

    fn label(self) -> &'static str {
        match self {
            Role::SoftwareEngineer => "Software Engineer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusArea {
    Backend,
    Frontend,
    FullStack,
}

impl FilterOption for FocusArea {
    const ALL: &'static [Self] = &[FocusArea::Backend, FocusArea::Frontend, FocusArea::FullStack];

    fn label(self) -> &'static str {
        match self {
            FocusArea::Backend => "Backend",
            FocusArea::Frontend => "Frontend",
            FocusArea::FullStack => "Full Stack",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    SanFranciscoBayArea,
    DallasFortWorth,
    NewYorkCity,
    Seattle,
    Austin,
}

impl FilterOption for Location {
    const ALL: &'static [Self] = &[
        Location::SanFranciscoBayArea,
        Location::DallasFortWorth,
        Location::NewYorkCity,
        Location::Seattle,
        Location::Austin,
    ];

    fn label(self) -> &'static str {
        match self {
            Location::SanFranciscoBayArea => "San Francisco Bay Area",
            Location::DallasFortWorth => "Dallas-Fort Worth",
            Location::NewYorkCity => "New York City",
            Location::Seattle => "Seattle",
            Location::Austin => "Austin",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    JuniorNewGrad,
}

impl FilterOption for Level {
    const ALL: &'static [Self] = &[Level::JuniorNewGrad];

    fn label(self) -> &'static str {
        match self {
            Level::JuniorNewGrad => "Junior / New Grad",
        }
    }
}

/// The (role, focus area, location, level) tuple the user has selected.
///
/// Always fully populated. The only way to change it is [`update`](Self::update).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub role: Role,
    pub focus_area: FocusArea,
    pub location: Location,
    pub level: Level,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            role: Role::SoftwareEngineer,
            focus_area: FocusArea::Backend,
            location: Location::SanFranciscoBayArea,
            level: Level::JuniorNewGrad,
        }
    }
}

impl FilterState {
    /// Shallow merge: fields set in `patch` overwrite, the rest are kept.
    /// Returns the resulting state.
    pub fn update(&mut self, patch: FilterPatch) -> FilterState {
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(focus_area) = patch.focus_area {
            self.focus_area = focus_area;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        *self
    }

    /// Composite key: the four labels joined by [`KEY_SEPARATOR`].
    pub fn key(&self) -> String {
        [
            self.role.label(),
            self.focus_area.label(),
            self.location.label(),
            self.level.label(),
        ]
        .join(&KEY_SEPARATOR.to_string())
    }
}

/// A partial [`FilterState`]. `None` fields leave the current value alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub role: Option<Role>,
    pub focus_area: Option<FocusArea>,
    pub location: Option<Location>,
    pub level: Option<Level>,
}

impl FilterPatch {
    pub fn role(role: Role) -> Self {
        Self { role: Some(role), ..Self::default() }
    }

    pub fn focus_area(focus_area: FocusArea) -> Self {
        Self { focus_area: Some(focus_area), ..Self::default() }
    }

    pub fn location(location: Location) -> Self {
        Self { location: Some(location), ..Self::default() }
    }

    pub fn level(level: Level) -> Self {
        Self { level: Some(level), ..Self::default() }
    }
}


#[cfg(test)]
pub(crate) mod proptests {
    use super::*;
    use proptest::prelude::*;

    // ── Strategy helpers ──────────────────────────────────

    fn arb_option<T: FilterOption + std::fmt::Debug>() -> impl Strategy<Value = T> {
        (0..T::ALL.len()).prop_map(|i| T::ALL[i])
    }

    pub fn arb_filters() -> impl Strategy<Value = FilterState> {
        (
            arb_option::<Role>(),
            arb_option::<FocusArea>(),
            arb_option::<Location>(),
            arb_option::<Level>(),
        )
            .prop_map(|(role, focus_area, location, level)| FilterState {
                role,
                focus_area,
                location,
                level,
            })
    }

    pub fn arb_patch() -> impl Strategy<Value = FilterPatch> {
        (
            proptest::option::of(arb_option::<Role>()),
            proptest::option::of(arb_option::<FocusArea>()),
            proptest::option::of(arb_option::<Location>()),
            proptest::option::of(arb_option::<Level>()),
        )
            .prop_map(|(role, focus_area, location, level)| FilterPatch {
                role,
                focus_area,
                location,
                level,
            })
    }

    proptest! {
        #[test]
        fn prop_update_keeps_unpatched_fields(start in arb_filters(), patch in arb_patch()) {
            let mut f = start;
            f.update(patch);
            prop_assert_eq!(f.role, patch.role.unwrap_or(start.role));
            prop_assert_eq!(f.focus_area, patch.focus_area.unwrap_or(start.focus_area));
            prop_assert_eq!(f.location, patch.location.unwrap_or(start.location));
            prop_assert_eq!(f.level, patch.level.unwrap_or(start.level));
        }

        #[test]
        fn prop_second_patch_wins(start in arb_filters(), a in arb_patch(), b in arb_patch()) {
            let mut f = start;
            f.update(a);
            f.update(b);
            prop_assert_eq!(f.focus_area, b.focus_area.or(a.focus_area).unwrap_or(start.focus_area));
            prop_assert_eq!(f.location, b.location.or(a.location).unwrap_or(start.location));
        }

        #[test]
        fn prop_key_has_four_parts(f in arb_filters()) {
            prop_assert_eq!(f.key().split(KEY_SEPARATOR).count(), 4);
        }

        #[test]
        fn prop_next_then_prev_is_identity(loc in arb_option::<Location>()) {
            prop_assert_eq!(loc.next().prev(), loc);
        }
    }
}
