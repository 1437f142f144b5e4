use crate::error::MarshalError;
use candid::{Int, Nat, Principal};
use serde_bytes::ByteBuf;
use std::collections::BTreeMap;

///
/// WireValue
///
/// Dynamic tree of everything the remote actor sends or receives, prior to
/// any mapping. Identifiers and timestamps arrive as arbitrary-precision
/// `Nat`s, identities as `Principal`s; the structural idioms (optionals,
/// cons-lists, tagged variants) are layered over `Seq` and `Record` by the
/// codecs in this module's siblings.
///

#[derive(Clone, Debug, PartialEq)]
pub enum WireValue {
    Null,
    Bool(bool),
    Nat(Nat),
    Int(Int),
    Text(String),
    Blob(ByteBuf),
    Principal(Principal),
    Seq(Vec<WireValue>),
    Record(BTreeMap<String, WireValue>),
}

impl WireValue {
    /// Build a record from field pairs; used by encoders and tests.
    #[must_use]
    pub fn record<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Self)>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }

    #[must_use]
    pub fn nat(value: u64) -> Self {
        Self::Nat(Nat::from(value))
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Blob(ByteBuf::from(bytes.into()))
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Nat(_) => "nat",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
            Self::Principal(_) => "principal",
            Self::Seq(_) => "sequence",
            Self::Record(_) => "record",
        }
    }

    /// Look up a record field, reporting both "not a record" and "field
    /// absent" as malformed-record conditions.
    pub fn field(&self, name: &str) -> Result<&Self, MarshalError> {
        match self {
            Self::Record(map) => map
                .get(name)
                .ok_or_else(|| MarshalError::malformed(name, "field to be present")),
            _ => Err(MarshalError::malformed(name, "a record")),
        }
    }

    pub fn as_nat(&self, field: &str) -> Result<&Nat, MarshalError> {
        match self {
            Self::Nat(value) => Ok(value),
            _ => Err(self.mistyped(field, "a nat")),
        }
    }

    pub fn as_int(&self, field: &str) -> Result<&Int, MarshalError> {
        match self {
            Self::Int(value) => Ok(value),
            _ => Err(self.mistyped(field, "an int")),
        }
    }

    pub fn as_text(&self, field: &str) -> Result<&str, MarshalError> {
        match self {
            Self::Text(value) => Ok(value),
            _ => Err(self.mistyped(field, "text")),
        }
    }

    pub fn as_bool(&self, field: &str) -> Result<bool, MarshalError> {
        match self {
            Self::Bool(value) => Ok(*value),
            _ => Err(self.mistyped(field, "a bool")),
        }
    }

    pub fn as_blob(&self, field: &str) -> Result<&[u8], MarshalError> {
        match self {
            Self::Blob(bytes) => Ok(bytes),
            _ => Err(self.mistyped(field, "a blob")),
        }
    }

    pub fn as_principal(&self, field: &str) -> Result<Principal, MarshalError> {
        match self {
            Self::Principal(principal) => Ok(*principal),
            _ => Err(self.mistyped(field, "a principal")),
        }
    }

    pub fn as_seq(&self, field: &str) -> Result<&[Self], MarshalError> {
        match self {
            Self::Seq(items) => Ok(items),
            _ => Err(self.mistyped(field, "a sequence")),
        }
    }

    pub fn as_record(&self, field: &str) -> Result<&BTreeMap<String, Self>, MarshalError> {
        match self {
            Self::Record(map) => Ok(map),
            _ => Err(self.mistyped(field, "a record")),
        }
    }

    fn mistyped(&self, field: &str, expected: &'static str) -> MarshalError {
        MarshalError::MalformedRecord {
            field: format!("{field} ({})", self.kind()),
            expected,
        }
    }
}

impl From<Principal> for WireValue {
    fn from(principal: Principal) -> Self {
        Self::Principal(principal)
    }
}

impl From<Nat> for WireValue {
    fn from(value: Nat) -> Self {
        Self::Nat(value)
    }
}

impl From<bool> for WireValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_reports_missing_and_mistyped() {
        let record = WireValue::record([("id", WireValue::nat(7))]);

        assert_eq!(record.field("id").unwrap(), &WireValue::nat(7));
        assert!(matches!(
            record.field("name"),
            Err(MarshalError::MalformedRecord { .. })
        ));
        assert!(matches!(
            WireValue::nat(1).field("name"),
            Err(MarshalError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn accessors_reject_wrong_kinds() {
        let value = WireValue::text("hello");

        assert_eq!(value.as_text("greeting").unwrap(), "hello");
        assert!(value.as_nat("greeting").is_err());
        assert!(value.as_seq("greeting").is_err());
    }
}
