pub mod home;
pub mod navigation_search;
pub mod not_found;
