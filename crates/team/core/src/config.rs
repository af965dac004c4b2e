/// Fixed team-building rules.
///
/// These are compile-time constants: the catalog service and the analysis
/// service assume the same values, so they are not runtime-tunable.
pub struct TeamRules;

impl TeamRules {
    /// Number of slots in a team.
    pub const TEAM_SIZE: usize = 6;
    /// Number of move positions in a slot.
    pub const MOVES_PER_SLOT: usize = 4;
    /// Number of talent stats per slot.
    pub const TALENT_STATS: usize = 6;
    /// Upper bound on stats with a boost greater than zero.
    pub const MAX_BOOSTED_STATS: usize = 3;
    /// Lower bound on boosted stats for a slot to count as complete.
    pub const MIN_BOOSTED_STATS: usize = 1;
    /// Discrete boost values a talent stat may hold.
    pub const ALLOWED_BOOSTS: [u8; 5] = [0, 7, 8, 9, 10];
}

/// Runtime-tunable builder settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Name given to a fresh or reset team.
    pub default_team_name: String,
    /// Appended to the saved name when a team is loaded as a copy.
    pub copy_suffix: String,
    /// Base name used for copies of teams saved without a name.
    pub copy_fallback_name: String,
}

impl BuilderConfig {
    pub const DEFAULT_TEAM_NAME: &'static str = "My Team";
    pub const DEFAULT_COPY_SUFFIX: &'static str = " (Copy)";
    pub const DEFAULT_COPY_FALLBACK_NAME: &'static str = "Team";

    pub fn new() -> Self {
        Self {
            default_team_name: Self::DEFAULT_TEAM_NAME.to_owned(),
            copy_suffix: Self::DEFAULT_COPY_SUFFIX.to_owned(),
            copy_fallback_name: Self::DEFAULT_COPY_FALLBACK_NAME.to_owned(),
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}
