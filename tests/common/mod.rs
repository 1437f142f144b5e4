//! Canned remote actor for mapper tests.

use async_trait::async_trait;
use candid::{Nat, Principal};
use franchise_agent::{
    actor::FranchiseActor,
    error::RemoteCallFailure,
    wire::WireValue,
};
use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

type CallResult = Result<WireValue, RemoteCallFailure>;

///
/// MockActor
///
/// Replays queued responses per method name. A call with no queued
/// response panics, which keeps scenario setup honest.
///

#[derive(Default)]
pub struct MockActor {
    responses: Mutex<HashMap<String, VecDeque<CallResult>>>,
}

impl MockActor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: &str, response: CallResult) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn ok(self, method: &str, value: WireValue) -> Self {
        self.respond(method, Ok(value))
    }

    pub fn reject(self, method: &str, message: &str) -> Self {
        self.respond(method, Err(RemoteCallFailure::new(method, message)))
    }

    fn take(&self, method: &str) -> CallResult {
        self.responses
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("no canned response for `{method}`"))
    }
}

#[async_trait]
impl FranchiseActor for MockActor {
    async fn create_category(&self, _name: String, _description: String) -> CallResult {
        self.take("createCategory")
    }

    async fn get_category(&self, _id: Nat) -> CallResult {
        self.take("getCategory")
    }

    async fn apply_for_franchise(&self, _franchise_id: Nat, _cover_letter: String) -> CallResult {
        self.take("applyForFranchise")
    }

    async fn get_application(&self, _id: Nat) -> CallResult {
        self.take("getApplication")
    }

    async fn get_applications_by_owner(&self, _owner: Principal) -> CallResult {
        self.take("getApplicationsByOwner")
    }

    async fn get_applications_by_applicant(&self, _applicant: Principal) -> CallResult {
        self.take("getApplicationsByApplicant")
    }

    async fn approve_application(&self, _id: Nat) -> CallResult {
        self.take("approveApplication")
    }

    async fn reject_application(&self, _id: Nat, _reason: WireValue) -> CallResult {
        self.take("rejectApplication")
    }

    async fn create_conversation(&self, _participants: WireValue) -> CallResult {
        self.take("createConversation")
    }

    async fn get_all_conversations_by_principal(&self, _principal: Principal) -> CallResult {
        self.take("getAllConversationsByPrincipal")
    }

    async fn get_all_messages_by_conversation(&self, _conversation_id: Nat) -> CallResult {
        self.take("getAllMessagesByConversation")
    }

    async fn send_message(
        &self,
        _conversation_id: Nat,
        _recipient: Principal,
        _text: String,
    ) -> CallResult {
        self.take("sendMessage")
    }

    async fn get_nft_license(&self, _token_id: Nat) -> CallResult {
        self.take("getNFTLicense")
    }

    async fn get_tokens_by_franchise(&self, _franchise_id: Nat) -> CallResult {
        self.take("getTokensByFranchise")
    }

    async fn get_franchisor_rating(&self, _franchisor: Principal) -> CallResult {
        self.take("getFranchisorRating")
    }

    async fn check_rate_state(&self, _franchisor: Principal, _rater: Principal) -> CallResult {
        self.take("checkRateState")
    }

    async fn rate_franchisor(&self, _franchisor: Principal, _score: Nat) -> CallResult {
        self.take("rateFranchisor")
    }

    async fn update_rate(&self, _franchisor: Principal, _score: Nat) -> CallResult {
        self.take("updateRate")
    }

    async fn send_comments(&self, _franchisor: Principal, _text: String) -> CallResult {
        self.take("sendComments")
    }

    async fn get_all_comments(&self, _franchisor: Principal) -> CallResult {
        self.take("getAllComments")
    }

    async fn get_transaction(&self, _id: Nat) -> CallResult {
        self.take("getTransaction")
    }

    async fn list_transactions(&self) -> CallResult {
        self.take("listTransactions")
    }

    async fn list_users(&self) -> CallResult {
        self.take("listUsers")
    }

    async fn whoami(&self) -> CallResult {
        self.take("whoami")
    }
}
