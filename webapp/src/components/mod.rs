pub mod card;
pub mod cast;
pub mod collage;
pub mod grid;
pub mod layout;
pub mod list;
pub mod progress;
pub mod rating;
