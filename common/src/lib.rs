//! Shared building blocks for the clinic records desk.
//!
//! Everything here is target independent: the Yew frontend drives these types
//! from wasm, the host serves [`config::ClientConfig`], and the unit tests run
//! natively against a fake [`api::Transport`].

pub mod api;
pub mod config;
pub mod drafts;
pub mod error;
pub mod model;
pub mod requests;
pub mod views;
