mod number_utils;
mod type_utils;

pub use number_utils::*;
pub use type_utils::*;
