pub mod badge;
pub mod select;

pub use badge::StatusBadge;
pub use select::FacetSelect;
