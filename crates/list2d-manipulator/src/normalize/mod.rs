//! Soft scalar normalization.
//!
//! `value_to_unicode` and `value_to_int` never fail loudly: anything that
//! cannot be normalized comes back as `None`. The `try_` variants expose the
//! reason as a [`NormalizeError`](list2d_core::NormalizeError).

mod integer;
mod text;

pub use integer::{try_value_to_int, value_to_int};
pub(crate) use integer::float_to_int;
pub use text::{strip_value, try_value_to_unicode, value_to_unicode};
