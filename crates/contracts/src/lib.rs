//! Общие типы каталога дашбордов: модель данных, фильтрация, избранное,
//! хабы доменов и встроенные каталоги.

pub mod catalog;
pub mod directory;
pub mod error;
pub mod hub;

pub use error::DirectoryError;
