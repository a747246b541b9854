// ABOUTME: Library root for semire — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod assistant;
pub mod config;
pub mod repl;
pub mod router;
pub mod session;
