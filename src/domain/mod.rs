//!
//! Normalized, application-facing domain records. Each is an immutable
//! value-typed projection produced fresh by a mapping call; none carries a
//! back-reference to the wire record it came from.
//!

mod account;
mod application;
mod category;
mod license;
mod messaging;
mod rating;
mod transaction;
mod user;

pub use account::{Account, DEFAULT_SUBACCOUNT, Subaccount};
pub use application::{Application, ApplicationStatus};
pub use category::Category;
pub use license::{LicenseDuration, MetadataValue, NftLicense};
pub use messaging::{Conversation, Message};
pub use rating::{Comment, RatingSummary};
pub use transaction::Transaction;
pub use user::{Role, User};

pub(crate) mod prelude {
    pub use candid::Principal;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
