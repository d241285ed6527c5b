pub mod item_card;
pub mod state;
pub mod widget;

pub use widget::DomainDirectory;
