use thiserror::Error as ThisError;

///
/// MarshalError
///
/// Structured failure taxonomy for the marshalling layer.
///
/// Every failure a codec or mapper can produce is one of these kinds, so
/// calling code can branch on the kind and present a specific message. A
/// mapper aborts the whole record on the first failure; partially-populated
/// domain records are never returned.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MarshalError {
    /// An optional-as-sequence field carried more than one element.
    #[error("optional sequence has {len} elements, expected 0 or 1")]
    MalformedOptional { len: usize },

    /// A tagged object did not carry exactly one recognized tag key.
    #[error("tagged object must carry exactly one of [{expected}], found `{found}`")]
    UnrecognizedVariant { expected: String, found: String },

    /// Cons-list unpacking did not reach the empty marker within the bound.
    #[error("cons list did not terminate within {steps} unpack steps")]
    ListCycle { steps: usize },

    /// Identity text failed to parse or failed its checksum.
    #[error("invalid identity text: {reason}")]
    InvalidIdentity { reason: String },

    /// A numeric conversion would lose information beyond the declared
    /// tolerance; the value is reported, never truncated.
    #[error("conversion of {value} would lose precision: {context}")]
    PrecisionLoss { value: String, context: &'static str },

    /// A wire record was missing a field or carried a mistyped one.
    #[error("wire field `{field}`: expected {expected}")]
    MalformedRecord { field: String, expected: &'static str },

    /// The remote actor call itself rejected; passed through verbatim.
    #[error(transparent)]
    RemoteCall(#[from] RemoteCallFailure),
}

impl MarshalError {
    pub(crate) fn malformed(field: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedRecord {
            field: field.into(),
            expected,
        }
    }
}

///
/// RemoteCallFailure
///
/// A rejected remote actor call (network/protocol/server error). The core
/// reports it unchanged and never reinterprets or retries it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("remote call `{method}` rejected: {message}")]
pub struct RemoteCallFailure {
    pub method: String,
    pub message: String,
}

impl RemoteCallFailure {
    #[must_use]
    pub fn new(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            message: message.into(),
        }
    }
}
