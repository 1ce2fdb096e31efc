//! Spring Boot project scaffolding service.
//!
//! Takes a [`models::ProjectRequest`] (package name, group identifier,
//! description, pre-formatted dependency block) and returns a zip archive
//! containing a minimal Spring Boot project skeleton.
//!
//! The pipeline has two halves:
//!
//! - [`render`]: pure string builders producing the literal content of each
//!   generated file. No I/O, no clock, no randomness.
//! - [`staging`]: the per-request staging directory — unique name, best-effort
//!   file writes, and recursive deletion guaranteed on drop.
//!
//! The [`api`] layer wires them together: the generate handler materializes
//! the tree, then streams it entry-by-entry into the response body as a
//! deflate-compressed zip, and the staging tree is removed on every exit
//! path, including mid-stream failure and client disconnect.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod staging;
