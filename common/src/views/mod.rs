//! Target-independent state machines behind the list and form views.
//!
//! Views never call the network themselves. State transitions hand back
//! commands, the component runs each command against a
//! [`RecordsClient`](crate::api::RecordsClient) and feeds the reply back in.

pub mod form;
pub mod list;
