pub mod categories;
pub mod handlers;
