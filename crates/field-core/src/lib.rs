pub mod constants;
pub mod field;
pub mod render;
pub mod theme;

pub use constants::*;
pub use field::*;
pub use render::*;
pub use theme::*;
