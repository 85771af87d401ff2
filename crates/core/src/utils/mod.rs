pub mod number_utils;
pub mod time_utils;

pub use number_utils::*;
pub use time_utils::*;
