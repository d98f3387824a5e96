pub mod collector;
pub mod config;
