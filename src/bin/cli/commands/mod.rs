pub mod check;
pub mod drill;
pub mod list;
