pub mod plain;
pub mod terminal;
