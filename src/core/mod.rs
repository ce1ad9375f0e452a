// SyriaBiz - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: app, platform, or any file I/O.

pub mod builder;
pub mod export;
pub mod filter;
pub mod i18n;
pub mod model;
pub mod seed;
pub mod status;
