pub mod alphabet;
pub mod config;
