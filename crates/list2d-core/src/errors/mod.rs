//! Error handling for list2d.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod expression_error;
pub mod manipulation_error;
pub mod normalize_error;

pub use config_error::ConfigError;
pub use error_code::List2DErrorCode;
pub use expression_error::ExpressionError;
pub use manipulation_error::ManipulationError;
pub use normalize_error::NormalizeError;
