// logtally - lib.rs
//
// Library entry point, exposing the core pipeline and utility modules for
// integration testing and programmatic use.
//
// The CLI entry point lives in `main.rs` and is not part of the library
// surface: the core never prints to the console or exits the process.

pub mod core;
pub mod util;
