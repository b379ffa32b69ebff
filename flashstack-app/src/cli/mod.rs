pub mod commands;
pub mod console;
pub mod opts;
pub mod quiz;
