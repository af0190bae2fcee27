use crate::config::aliases::{AliasEntry, get_aliases};
use crate::normalizer::NormalizeMode;

pub struct RatingSettings {
    pub default_rating: i32,
    pub k_factor: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            default_rating: 1500,
            k_factor: 32.0,
        }
    }
}

pub struct NormalizerSettings {
    pub mode: NormalizeMode,
    pub aliases: Vec<AliasEntry>,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            mode: NormalizeMode::Aliases,
            aliases: get_aliases(),
        }
    }
}

pub struct ReportSettings {
    pub trailing_weeks: usize,
    pub active_window_days: i64,
    pub last_month_grace_days: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            trailing_weeks: 5,      // progression chart depth
            active_window_days: 35, // five full weeks
            last_month_grace_days: 7,
        }
    }
}

pub struct AppConfig {
    pub rating: RatingSettings,
    pub names: NormalizerSettings,
    pub reports: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            names: NormalizerSettings::default(),
            reports: ReportSettings::default(),
        }
    }
}

// Lazy static or just regular instantiation?
// Since we are refactoring for "small methods/classes", we should prefer
// passing the config explicitly (Dependency Injection) rather than globals.
