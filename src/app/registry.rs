//! Precomputed skill datasets keyed by filter tuple.

use super::filters::{FilterState, FocusArea, Level, Location, Role};

/// Number of skills every dataset ranks.
pub const TOP_SKILLS: usize = 5;

/// One ranked skill and the share of postings that mention it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    /// 0..=100
    pub pct: u8,
}

/// What the Results screen shows for one filter tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultDataset {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Display order is rank order.
    pub skills: [SkillEntry; TOP_SKILLS],
}

const fn skill(name: &'static str, pct: u8) -> SkillEntry {
    SkillEntry { name, pct }
}

const SF_BACKEND_JUNIOR: FilterState = FilterState {
    role: Role::SoftwareEngineer,
    focus_area: FocusArea::Backend,
    location: Location::SanFranciscoBayArea,
    level: Level::JuniorNewGrad,
};

static SKILLSETS: [(FilterState, ResultDataset); 1] = [(
    SF_BACKEND_JUNIOR,
    ResultDataset {
        title: "Junior Backend Software Engineer",
        subtitle: "Based on 312 job postings in San Francisco Bay Area from the last 30 days",
        skills: [
            skill("Python", 68),
            skill("SQL / Databases", 64),
            skill("REST APIs", 59),
            skill("Git / Version Control", 52),
            skill("Docker / Containers", 43),
        ],
    },
)];

/// Returned for every combination without its own dataset.
static DEFAULT_SKILLSET: ResultDataset = ResultDataset {
    title: "Junior Software Engineer",
    subtitle: "Based on recent junior software engineering job postings from the last 30 days",
    skills: [
        skill("Git / Version Control", 55),
        skill("REST APIs", 51),
        skill("SQL / Databases", 49),
        skill("Testing (Unit / Integration)", 44),
        skill("Docker / Containers", 38),
    ],
};

/// Exact-match table from filter tuple to dataset, plus a default record.
pub struct Registry {
    entries: &'static [(FilterState, ResultDataset)],
    default: &'static ResultDataset,
}

impl Registry {
    /// The compiled-in fixture data.
    pub fn builtin() -> Self {
        Self::new(&SKILLSETS, &DEFAULT_SKILLSET)
    }

    pub fn new(
        entries: &'static [(FilterState, ResultDataset)],
        default: &'static ResultDataset,
    ) -> Self {
        Self { entries, default }
    }

    /// Dataset registered for exactly this tuple, if any.
    pub fn lookup_exact(&self, filters: &FilterState) -> Option<&'static ResultDataset> {
        self.entries
            .iter()
            .find(|(key, _)| key == filters)
            .map(|(_, dataset)| dataset)
    }

    /// Total lookup: the exact match, or the default record.
    pub fn resolve(&self, filters: &FilterState) -> &'static ResultDataset {
        self.lookup_exact(filters).unwrap_or(self.default)
    }

    #[cfg(test)]
    pub fn default_dataset(&self) -> &'static ResultDataset {
        self.default
    }

    /// Number of tuples with their own dataset (the default is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filters::FilterPatch;

    #[test]
    fn sf_backend_junior_has_its_own_dataset() {
        let reg = Registry::builtin();
        let ds = reg.resolve(&FilterState::default());
        assert_eq!(ds.title, "Junior Backend Software Engineer");
        assert_eq!(ds.skills.len(), 5);
        assert_eq!(ds.skills[0], SkillEntry { name: "Python", pct: 68 });
        assert_eq!(ds.skills[4], SkillEntry { name: "Docker / Containers", pct: 43 });
    }

    #[test]
    fn other_combinations_fall_back_to_default() {
        let reg = Registry::builtin();
        let mut f = FilterState::default();
        f.update(FilterPatch::location(Location::NewYorkCity));
        let ds = reg.resolve(&f);
        assert_eq!(ds.title, "Junior Software Engineer");
        assert_eq!(ds.skills[0], SkillEntry { name: "Git / Version Control", pct: 55 });
        assert!(reg.lookup_exact(&f).is_none());
        assert!(std::ptr::eq(ds, reg.default_dataset()));
    }

    #[test]
    fn builtin_counts_exact_entries_only() {
        assert_eq!(Registry::builtin().len(), 1);
    }

    #[test]
    fn skills_are_ranked_by_descending_pct() {
        for ds in SKILLSETS.iter().map(|(_, d)| d).chain([&DEFAULT_SKILLSET]) {
            assert!(
                ds.skills.windows(2).all(|w| w[0].pct >= w[1].pct),
                "{}",
                ds.title
            );
            assert!(ds.skills.iter().all(|s| s.pct <= 100));
        }
    }

    #[test]
    fn custom_registry_uses_its_own_default() {
        static EMPTY: [(FilterState, ResultDataset); 0] = [];
        let reg = Registry::new(&EMPTY, &DEFAULT_SKILLSET);
        assert_eq!(reg.len(), 0);
        assert_eq!(reg.resolve(&FilterState::default()).title, "Junior Software Engineer");
    }
}
