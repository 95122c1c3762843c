//! scribble-core - Core library for Scribble
//!
//! This crate contains the shared models, database layer, and repositories
//! used by the Scribble server and its components.

pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod util;

pub use error::{Error, Result};
pub use models::{NoteId, NoteSummary, OwnerNotes, UserId};
