pub mod catalog;
pub mod server;
pub mod suggest;
