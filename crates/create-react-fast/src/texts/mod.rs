pub mod summary;
pub mod templates;
