//!
//! Wire-level representation of remote actor data plus the structural
//! codecs that decode its idioms: optionals as zero-or-one element
//! sequences, repeated fields as cons-lists, and enumerations as
//! single-key tagged objects.
//!

mod list;
mod opt;
mod value;
mod variant;

pub use list::{decode_list_with, encode_list};
pub use opt::{decode_opt, decode_opt_with, encode_opt};
pub use value::WireValue;
pub use variant::{decode_variant, encode_variant};
