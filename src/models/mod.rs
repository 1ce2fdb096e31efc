//! Domain models for projgen.
//!
//! The service is stateless: [`ProjectRequest`] is the only entity. It is
//! built once per request and nothing derived from it outlives the
//! response stream.

mod request;

pub use request::*;
