pub mod config;
pub mod display;
pub mod list;
pub mod parser;
pub mod pricing;
pub mod unit;
