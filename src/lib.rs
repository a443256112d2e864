pub mod config;
pub mod core;

pub use crate::core::converter::{transliterate, Transliterator};
pub use crate::core::table::{MappingTable, TableError};
pub use crate::core::tables::{CYRILLIC_LATIN, RUSSIAN_ASCII};
