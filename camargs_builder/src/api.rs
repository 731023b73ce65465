mod capture;
mod core;
mod parameter;

pub use self::core::*;
pub use capture::*;
pub use parameter::*;
