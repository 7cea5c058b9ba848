pub mod completions;
pub mod config;
pub mod item;
pub mod review;
pub mod session;
pub mod simulate;
