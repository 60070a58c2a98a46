pub mod input;
pub mod locale;

pub use input::*;
pub use locale::*;
