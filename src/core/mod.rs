pub mod converter;
pub mod table;
pub mod tables;
pub mod unicode;
