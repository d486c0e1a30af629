pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod render;
pub mod report;
