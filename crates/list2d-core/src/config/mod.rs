//! Configuration system for list2d.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod histogram_config;
pub mod manipulator_config;
pub mod normalize_config;
pub mod replace_config;

pub use histogram_config::HistogramConfig;
pub use manipulator_config::{ConfigOverrides, ManipulatorConfig};
pub use normalize_config::NormalizeConfig;
pub use replace_config::ReplaceConfig;
