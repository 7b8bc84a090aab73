//! Event Model - Conference event domain entities
//!
//! This crate defines the read-only view of the host application's event
//! data that the document exports consume: events, contributions, linked
//! persons, and accepted paper revisions. The host owns and populates these
//! structures; the exports only traverse them.

mod contribution;
mod error;
mod event;
mod paper;
mod person;
mod store;

pub use contribution::*;
pub use error::*;
pub use event::*;
pub use paper::*;
pub use person::*;
pub use store::*;
