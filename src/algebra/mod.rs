//! Matrix and view types, arithmetic, and the elimination algorithms.

mod error_types;
pub use error_types::*;

mod floats;
pub use floats::*;

mod matrix_traits;
pub use matrix_traits::*;

mod dense;
pub use dense::*;
