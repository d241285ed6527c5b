pub mod cards;
pub mod page;

pub use page::DomainHub;
