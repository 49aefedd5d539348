// Library target exists so integration tests can import the core via
// `vocadr::engine::*` / `vocadr::session::*` / `vocadr::store::*`.
// The binary entry point is main.rs; this file re-declares the module tree.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod engine;
pub mod import;
pub mod session;
pub mod store;

// Private: required transitively (won't compile without them)
mod app;
mod config;
mod event;
mod ui;
