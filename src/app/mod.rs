// SyriaBiz - app/mod.rs
//
// Application layer: catalog store and session state.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod catalog;
pub mod state;
