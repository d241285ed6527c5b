pub mod directory;
pub mod hub;
