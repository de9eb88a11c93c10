pub mod common;
pub mod config;
pub mod describe;
pub mod duration;
pub mod generate;
pub mod payload;
