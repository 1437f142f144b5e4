//! franchise-agent is the data marshalling layer for the franchise
//! marketplace actor.
//!
//! The remote actor speaks in wire idioms: optionals as zero-or-one element
//! sequences, repeated fields as cons-lists, enumerations as single-key
//! tagged objects, arbitrary-precision integers for ids and nanosecond
//! timestamps, and identities as checksummed principals. This crate decodes
//! those shapes into normalized domain records and encodes outbound
//! arguments back, without silent precision loss or misinterpretation.
//!
//! Layering, leaves first:
//!
//! - `wire`: the dynamic [`wire::WireValue`] tree plus the structural
//!   codecs (optional, cons-list, tagged variant)
//! - `codec`: value-level codecs (identity, time, fixed-point amounts,
//!   bounded integer promotion)
//! - `domain`: immutable domain records, produced fresh per mapping call
//! - `actor`: the [`actor::FranchiseActor`] capability contract; the
//!   remote side implements it, this crate only consumes it
//! - `ops`: per-entity mappers and the async operations that invoke the
//!   actor and decode its responses
//!
//! The crate performs no caching, no retries, and no authorization; a
//! remote rejection surfaces verbatim as
//! [`error::MarshalError::RemoteCall`].

pub mod actor;
pub mod codec;
pub mod domain;
pub mod error;
pub mod log;
pub mod ops;
pub mod wire;

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Opinionated prelude for callers of the marshalling layer.
///
/// UI-facing code should get everything it needs from here; reaching into
/// the `wire` module directly is only required when implementing a
/// [`actor::FranchiseActor`].
///

pub mod prelude {
    pub use crate::{
        actor::FranchiseActor,
        domain::{
            Account, Application, ApplicationStatus, Category, Comment, Conversation,
            LicenseDuration, Message, MetadataValue, NftLicense, RatingSummary, Role, Subaccount,
            Transaction, User,
        },
        error::{MarshalError, RemoteCallFailure},
        ops,
    };

    pub use candid::{Int, Nat, Principal};
}
