pub mod card_animated;
pub mod filter_panel;
pub mod page_header;
pub mod ui;
