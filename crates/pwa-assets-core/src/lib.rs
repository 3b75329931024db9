pub mod config;
pub mod logging;

pub mod catalog;
pub mod error;
pub mod imaging;
