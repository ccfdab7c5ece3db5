pub mod colours;
pub mod logging;

pub use colours::colours;

/// The colour questionnaire in declarative form, equivalent to [`colours()`].
pub const COLOURS_TOML: &str = include_str!("../definitions/colours.toml");
