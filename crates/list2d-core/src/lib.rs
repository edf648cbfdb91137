//! list2d-core: shared foundations for the list2d table helpers.
//!
//! - Types: `Value` cells, `Row` / `List2D` tables, insertion-ordered `DictOfLists`
//! - Errors: one `thiserror` enum per concern, each with a stable error code
//! - Config: layered TOML configuration (`list2d.toml`, `LIST2D_*` env vars)
//! - Tracing: `LIST2D_LOG`-driven subscriber setup
//! - Constants: compiled defaults

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{ConfigOverrides, ManipulatorConfig};
pub use errors::{ConfigError, ExpressionError, List2DErrorCode, ManipulationError, NormalizeError};
pub use types::{DictOfLists, List2D, Row, Value};
