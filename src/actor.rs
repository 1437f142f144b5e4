use crate::{error::RemoteCallFailure, wire::WireValue};
use async_trait::async_trait;
use candid::{Nat, Principal};

///
/// FranchiseActor
///
/// Capability contract for the remote marketplace actor. The marshalling
/// layer receives an implementation (agent-backed in production, canned in
/// tests) and never reaches for one globally; it implements none of these
/// methods itself.
///
/// Arguments are wire-level: numeric identifiers travel as
/// arbitrary-precision `Nat`s, identities as `Principal` handles (never
/// plain text), and record/optional/list arguments as pre-encoded
/// [`WireValue`]s. Every method resolves to the raw wire response or the
/// call's rejection, verbatim.
///

type CallResult = Result<WireValue, RemoteCallFailure>;

#[async_trait]
pub trait FranchiseActor: Send + Sync {
    // categories
    async fn create_category(&self, name: String, description: String) -> CallResult;
    async fn get_category(&self, id: Nat) -> CallResult;

    // applications
    async fn apply_for_franchise(&self, franchise_id: Nat, cover_letter: String) -> CallResult;
    async fn get_application(&self, id: Nat) -> CallResult;
    async fn get_applications_by_owner(&self, owner: Principal) -> CallResult;
    async fn get_applications_by_applicant(&self, applicant: Principal) -> CallResult;
    async fn approve_application(&self, id: Nat) -> CallResult;
    async fn reject_application(&self, id: Nat, reason: WireValue) -> CallResult;

    // conversations and messages
    async fn create_conversation(&self, participants: WireValue) -> CallResult;
    async fn get_all_conversations_by_principal(&self, principal: Principal) -> CallResult;
    async fn get_all_messages_by_conversation(&self, conversation_id: Nat) -> CallResult;
    async fn send_message(
        &self,
        conversation_id: Nat,
        recipient: Principal,
        text: String,
    ) -> CallResult;

    // NFT licenses
    async fn get_nft_license(&self, token_id: Nat) -> CallResult;
    async fn get_tokens_by_franchise(&self, franchise_id: Nat) -> CallResult;

    // ratings and comments
    async fn get_franchisor_rating(&self, franchisor: Principal) -> CallResult;
    async fn check_rate_state(&self, franchisor: Principal, rater: Principal) -> CallResult;
    async fn rate_franchisor(&self, franchisor: Principal, score: Nat) -> CallResult;
    async fn update_rate(&self, franchisor: Principal, score: Nat) -> CallResult;
    async fn send_comments(&self, franchisor: Principal, text: String) -> CallResult;
    async fn get_all_comments(&self, franchisor: Principal) -> CallResult;

    // transactions
    async fn get_transaction(&self, id: Nat) -> CallResult;
    async fn list_transactions(&self) -> CallResult;

    // users
    async fn list_users(&self) -> CallResult;
    async fn whoami(&self) -> CallResult;
}
