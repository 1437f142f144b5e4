//!
//! Entity mappers: per entity, a pure `map_*` transformation composed from
//! the wire and value codecs, plus the thin async operations that invoke
//! the remote actor and decode its responses.
//!
//! Shared rules, enforced everywhere:
//! - a sub-codec failure aborts the whole record; no partial records
//! - collection operations map element-wise, keep input order, never
//!   deduplicate, and fail as a whole if one element fails
//! - write operations encode domain arguments to wire arguments before
//!   invocation and map the raw result (`Nat` id or `Bool`) back
//! - remote rejections pass through verbatim; no retries
//!

pub mod application;
pub mod category;
pub mod license;
pub mod messaging;
pub mod rating;
pub mod transaction;
pub mod user;
