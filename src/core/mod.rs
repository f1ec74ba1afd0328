// logtally - core/mod.rs
//
// Core business logic layer: parse -> load -> aggregate/filter -> render.
// Pure logic over explicit inputs; no console output, no process exit.
// Must NOT depend on the CLI layer.

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parser;
pub mod render;
pub mod stats;
pub mod totals;
