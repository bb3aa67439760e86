// The binary in main.rs drives the terminal; everything it uses lives here so
// integration tests and benchmarks can reach it.
pub mod app;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod event;
pub mod render;
pub mod session;
pub mod ui;
