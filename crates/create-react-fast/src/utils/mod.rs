pub mod child;
pub mod command;
pub(crate) mod error_messages;
pub mod log;
pub(crate) mod which;
