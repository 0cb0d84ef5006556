pub mod client;
pub mod config;
pub mod page;
pub mod ui;
