//! Data models for the Lost & Found service.
//!
//! These mirror the JSON bodies of the REST API. The service owns every entity;
//! the client only submits creations and reads snapshots.

mod claim;
mod item;
mod retrieval;
mod user;

pub use claim::*;
pub use item::*;
pub use retrieval::*;
pub use user::*;
