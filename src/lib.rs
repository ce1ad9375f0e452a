// SyriaBiz - lib.rs
//
// Library entry point, exposing all modules for integration testing
// and for the `syriabiz` command-line binary.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
