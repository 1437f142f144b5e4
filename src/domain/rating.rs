use crate::domain::prelude::*;

///
/// Comment
///
/// Ratings are anonymous-keyed: a comment is identified by its franchisor
/// and its position in the returned sequence.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Comment {
    pub author: Principal,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

///
/// RatingSummary
///
/// Aggregate of a franchisor's score and whether the caller has already
/// rated them.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RatingSummary {
    pub score: u64,
    pub rated_by_caller: bool,
}
