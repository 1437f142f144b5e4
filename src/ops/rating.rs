use crate::{
    actor::FranchiseActor,
    codec::{nat_to_u64, to_instant},
    domain::{Comment, RatingSummary},
    error::MarshalError,
    log,
    wire::{WireValue, decode_list_with},
};
use candid::{Nat, Principal};
use futures::try_join;

/// map_comment
pub fn map_comment(value: &WireValue) -> Result<Comment, MarshalError> {
    Ok(Comment {
        author: value.field("author")?.as_principal("author")?,
        text: value.field("text")?.as_text("text")?.to_string(),
        created_at: to_instant(
            value.field("createdAt")?.as_nat("createdAt")?,
            "comment createdAt",
        )?,
    })
}

/// get_franchisor_rating
pub async fn get_franchisor_rating(
    actor: &dyn FranchiseActor,
    franchisor: Principal,
) -> Result<u64, MarshalError> {
    let raw = actor.get_franchisor_rating(franchisor).await?;

    nat_to_u64(raw.as_nat("getFranchisorRating result")?, "rating score")
}

/// check_rate_state
/// Whether `rater` has already rated `franchisor`.
pub async fn check_rate_state(
    actor: &dyn FranchiseActor,
    franchisor: Principal,
    rater: Principal,
) -> Result<bool, MarshalError> {
    let raw = actor.check_rate_state(franchisor, rater).await?;

    raw.as_bool("checkRateState result")
}

/// rate_franchisor
pub async fn rate_franchisor(
    actor: &dyn FranchiseActor,
    franchisor: Principal,
    score: u64,
) -> Result<bool, MarshalError> {
    let raw = actor.rate_franchisor(franchisor, Nat::from(score)).await?;
    let accepted = raw.as_bool("rateFranchisor result")?;

    log!("rating", "rated {franchisor} with {score}: {accepted}");

    Ok(accepted)
}

/// update_rate
pub async fn update_rate(
    actor: &dyn FranchiseActor,
    franchisor: Principal,
    score: u64,
) -> Result<bool, MarshalError> {
    let raw = actor.update_rate(franchisor, Nat::from(score)).await?;

    raw.as_bool("updateRate result")
}

/// send_comments
pub async fn send_comments(
    actor: &dyn FranchiseActor,
    franchisor: Principal,
    text: &str,
) -> Result<bool, MarshalError> {
    let raw = actor.send_comments(franchisor, text.to_string()).await?;

    raw.as_bool("sendComments result")
}

/// get_all_comments
pub async fn get_all_comments(
    actor: &dyn FranchiseActor,
    franchisor: Principal,
) -> Result<Vec<Comment>, MarshalError> {
    let raw = actor.get_all_comments(franchisor).await?;

    decode_list_with(&raw, "getAllComments result", map_comment)
}

/// franchisor_rating_summary
/// Issues the score and rate-state sub-calls concurrently and aggregates
/// fail-fast: the first rejection fails the whole operation.
pub async fn franchisor_rating_summary(
    actor: &dyn FranchiseActor,
    franchisor: Principal,
    rater: Principal,
) -> Result<RatingSummary, MarshalError> {
    let (score_raw, state_raw) = try_join!(
        actor.get_franchisor_rating(franchisor),
        actor.check_rate_state(franchisor, rater),
    )?;

    Ok(RatingSummary {
        score: nat_to_u64(score_raw.as_nat("getFranchisorRating result")?, "rating score")?,
        rated_by_caller: state_raw.as_bool("checkRateState result")?,
    })
}
