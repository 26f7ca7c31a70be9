pub mod area;
pub mod completions;
pub mod config;
pub mod total;
