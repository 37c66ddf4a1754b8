pub mod format;
pub mod position;
pub mod style;
pub mod theme;
