pub mod aliases;
pub mod settings;

pub use aliases::{AliasEntry, get_aliases};
pub use settings::AppConfig;
