mod input;

pub use input::{parse_length, parse_shape_key, LengthInputError, ShapeInputHandler};
pub use input::{MAX_LENGTH, MIN_LENGTH};
