//!
//! Value-level codecs: identity text, calendar instants, fixed-point
//! amounts, and checked integer promotion. All pure and synchronous.
//!

mod amount;
mod identity;
mod num;
mod time;

pub use amount::{MAX_DECIMALS, to_major_units, to_minor_units};
pub use identity::{decode_account, encode_account, principal_from_text, principal_to_text};
pub use num::{int_to_i64, nat_to_u64, nat_to_u128};
pub use time::{from_instant, to_instant};
