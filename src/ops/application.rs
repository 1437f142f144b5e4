use crate::{
    actor::FranchiseActor,
    codec::{nat_to_u64, to_instant},
    domain::{Application, ApplicationStatus},
    error::MarshalError,
    log,
    wire::{WireValue, decode_list_with, decode_opt_with, decode_variant, encode_opt},
};
use candid::{Nat, Principal};

fn decode_status(value: &WireValue) -> Result<ApplicationStatus, MarshalError> {
    let (tag, _payload) = decode_variant(value, "status", &ApplicationStatus::TAGS)?;

    ApplicationStatus::from_tag(tag).ok_or_else(|| MarshalError::UnrecognizedVariant {
        expected: ApplicationStatus::TAGS.join(" | "),
        found: tag.to_string(),
    })
}

/// map_application
pub fn map_application(value: &WireValue) -> Result<Application, MarshalError> {
    let rejection_reason = decode_opt_with(value.field("rejectionReason")?, "rejectionReason", |v| {
        Ok(v.as_text("rejectionReason")?.to_string())
    })?;

    Ok(Application {
        id: nat_to_u64(value.field("id")?.as_nat("id")?, "application id")?,
        franchise_id: nat_to_u64(
            value.field("franchiseId")?.as_nat("franchiseId")?,
            "franchise id",
        )?,
        applicant: value.field("applicant")?.as_principal("applicant")?,
        status: decode_status(value.field("status")?)?,
        cover_letter: value.field("coverLetter")?.as_text("coverLetter")?.to_string(),
        submitted_at: to_instant(
            value.field("createdAt")?.as_nat("createdAt")?,
            "application createdAt",
        )?,
        updated_at: to_instant(
            value.field("updatedAt")?.as_nat("updatedAt")?,
            "application updatedAt",
        )?,
        rejection_reason,
    })
}

/// apply_for_franchise
/// Returns the new application's id.
pub async fn apply_for_franchise(
    actor: &dyn FranchiseActor,
    franchise_id: u64,
    cover_letter: &str,
) -> Result<u64, MarshalError> {
    let raw = actor
        .apply_for_franchise(Nat::from(franchise_id), cover_letter.to_string())
        .await?;
    let id = nat_to_u64(raw.as_nat("applyForFranchise result")?, "application id")?;

    log!("application", "submitted application {id} for franchise {franchise_id}");

    Ok(id)
}

/// get_application
pub async fn get_application(
    actor: &dyn FranchiseActor,
    id: u64,
) -> Result<Option<Application>, MarshalError> {
    let raw = actor.get_application(Nat::from(id)).await?;

    decode_opt_with(&raw, "getApplication result", map_application)
}

/// get_applications_by_owner
pub async fn get_applications_by_owner(
    actor: &dyn FranchiseActor,
    owner: Principal,
) -> Result<Vec<Application>, MarshalError> {
    let raw = actor.get_applications_by_owner(owner).await?;

    decode_list_with(&raw, "getApplicationsByOwner result", map_application)
}

/// get_applications_by_applicant
pub async fn get_applications_by_applicant(
    actor: &dyn FranchiseActor,
    applicant: Principal,
) -> Result<Vec<Application>, MarshalError> {
    let raw = actor.get_applications_by_applicant(applicant).await?;

    decode_list_with(&raw, "getApplicationsByApplicant result", map_application)
}

/// approve_application
pub async fn approve_application(
    actor: &dyn FranchiseActor,
    id: u64,
) -> Result<bool, MarshalError> {
    let raw = actor.approve_application(Nat::from(id)).await?;
    let accepted = raw.as_bool("approveApplication result")?;

    log!("application", "approved application {id}: {accepted}");

    Ok(accepted)
}

/// reject_application
/// The optional reason travels as an optional-as-sequence text.
pub async fn reject_application(
    actor: &dyn FranchiseActor,
    id: u64,
    reason: Option<&str>,
) -> Result<bool, MarshalError> {
    let wire_reason = encode_opt(reason.map(WireValue::text));
    let raw = actor.reject_application(Nat::from(id), wire_reason).await?;
    let accepted = raw.as_bool("rejectApplication result")?;

    log!("application", "rejected application {id}: {accepted}");

    Ok(accepted)
}
