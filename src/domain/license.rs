use crate::domain::{Account, prelude::*};
use candid::{Int, Nat};
use serde_bytes::ByteBuf;

///
/// LicenseDuration
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum LicenseDuration {
    OneTime,
    Years(u64),
}

impl LicenseDuration {
    pub const TAGS: [&'static str; 2] = ["OneTime", "Years"];

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::OneTime => "OneTime",
            Self::Years(_) => "Years",
        }
    }
}

///
/// MetadataValue
///
/// Generic value union carried by license metadata entries.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MetadataValue {
    Nat(Nat),
    Int(Int),
    Text(String),
    Blob(ByteBuf),
}

impl MetadataValue {
    pub const TAGS: [&'static str; 4] = ["Nat", "Int", "Text", "Blob"];
}

///
/// NftLicense
///
/// A license token: ownership slots are full accounts (principal plus
/// optional subaccount), descriptive fields are projected from the token's
/// metadata entries.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NftLicense {
    pub token_id: u64,
    pub franchise_id: u64,
    pub owner: Account,
    pub issuer: Account,
    pub duration: LicenseDuration,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub uri: Option<String>,
}
