use crate::domain::prelude::*;
use derive_more::Display;

///
/// ApplicationStatus
///
/// Closed 4-state enumeration. The marshalling layer only codes whichever
/// state the remote actor reports or commands; transition legality is the
/// actor's responsibility.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ApplicationStatus {
    Submitted,
    InReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const TAGS: [&'static str; 4] = ["Submitted", "InReview", "Approved", "Rejected"];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::InReview => "InReview",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Submitted" => Some(Self::Submitted),
            "InReview" => Some(Self::InReview),
            "Approved" => Some(Self::Approved),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

///
/// Application
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Application {
    pub id: u64,
    pub franchise_id: u64,
    pub applicant: Principal,
    pub status: ApplicationStatus,
    pub cover_letter: String,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub rejection_reason: Option<String>,
}
