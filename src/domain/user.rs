use crate::domain::prelude::*;
use derive_more::Display;

///
/// Role
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Role {
    Franchisor,
    Franchisee,
    Admin,
}

impl Role {
    pub const TAGS: [&'static str; 3] = ["Franchisor", "Franchisee", "Admin"];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Franchisor => "Franchisor",
            Self::Franchisee => "Franchisee",
            Self::Admin => "Admin",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Franchisor" => Some(Self::Franchisor),
            "Franchisee" => Some(Self::Franchisee),
            "Admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

///
/// User
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    pub principal: Principal,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub profile_url: String,
    pub social_links: Option<Vec<String>>,
}
