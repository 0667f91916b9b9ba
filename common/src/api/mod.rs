//! Client for the records REST surface.
//!
//! Routing and decoding live here; moving bytes is delegated to a
//! [`Transport`] so the same client runs over `gloo-net` in the browser and
//! over a scripted fake in tests.

mod client;
mod resource;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{RecordsClient, References};
pub use resource::Resource;
pub use transport::{ApiReply, ApiRequest, Method, Transport};
