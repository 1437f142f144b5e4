use crate::domain::prelude::*;

///
/// Conversation
///
/// Participants keep the order the wire cons-list carried them in.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Conversation {
    pub id: u64,
    pub participants: Vec<Principal>,
}

///
/// Message
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Message {
    pub id: u64,
    pub conversation_id: u64,
    pub sender: Principal,
    pub recipient: Principal,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}
