mod block_concatenate;
mod core;
mod gauss;
mod io;
mod matrix_math;
pub use self::matrix_math::*;
mod select;
mod types;
pub use self::types::*;
mod view;
pub use self::view::*;
