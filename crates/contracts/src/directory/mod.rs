//! Directory model: данные, фильтрация, избранное и отображение статусов.
//!
//! Один обобщённый модуль, который параметризуется конфигурацией домена
//! (фикстура, список поддоменов, метка домена).

pub mod favorites;
pub mod filter;
pub mod item;
pub mod presentation;
pub mod state;
pub mod store;

// Re-exports
pub use favorites::FavoriteSet;
pub use filter::{apply, facet_options, DerivedView, Facet, FacetOption, FilterState, MATCH_ALL};
pub use item::{DirectoryItem, ItemId, ItemKind, ItemStatus};
pub use presentation::{heart_class, BadgeVariant, StatusStyle};
pub use state::{DirectoryAction, DirectoryState};
pub use store::{DirectoryConfig, DirectoryStore, SubdomainCount};
