use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Main trait for floating point types used throughout the library.
///
/// All numeric code is generic over `FloatT`, with implementations
/// provided for the native `f32` and `f64` types via a blanket impl.
/// Most constituent bounds come from [`num_traits`](num_traits); the
/// [`FromStr`] bound exists for the text-format matrix parser.
pub trait FloatT:
    'static + Send + Float + NumAssign + FromPrimitive + FromStr + Display + Debug + Sized
{
}

impl<T> FloatT for T where
    T: 'static + Send + Float + NumAssign + FromPrimitive + FromStr + Display + Debug + Sized
{
}
