use crate::{
    actor::FranchiseActor,
    codec::to_instant,
    domain::{Role, User},
    error::MarshalError,
    wire::{WireValue, decode_list_with, decode_opt_with, decode_variant},
};

fn decode_role(value: &WireValue) -> Result<Role, MarshalError> {
    let (tag, _payload) = decode_variant(value, "role", &Role::TAGS)?;

    Role::from_tag(tag).ok_or_else(|| MarshalError::UnrecognizedVariant {
        expected: Role::TAGS.join(" | "),
        found: tag.to_string(),
    })
}

/// map_user
pub fn map_user(value: &WireValue) -> Result<User, MarshalError> {
    let social_links = decode_opt_with(value.field("socialLinks")?, "socialLinks", |links| {
        decode_list_with(links, "socialLinks", |v| {
            Ok(v.as_text("socialLinks")?.to_string())
        })
    })?;

    Ok(User {
        principal: value.field("principal")?.as_principal("principal")?,
        name: value.field("name")?.as_text("name")?.to_string(),
        email: value.field("email")?.as_text("email")?.to_string(),
        bio: value.field("bio")?.as_text("bio")?.to_string(),
        role: decode_role(value.field("role")?)?,
        created_at: to_instant(
            value.field("createdAt")?.as_nat("createdAt")?,
            "user createdAt",
        )?,
        profile_url: value.field("profileUrl")?.as_text("profileUrl")?.to_string(),
        social_links,
    })
}

/// list_users
pub async fn list_users(actor: &dyn FranchiseActor) -> Result<Vec<User>, MarshalError> {
    let raw = actor.list_users().await?;

    decode_list_with(&raw, "listUsers result", map_user)
}

/// whoami
/// The caller's own principal, as the remote actor sees it.
pub async fn whoami(actor: &dyn FranchiseActor) -> Result<candid::Principal, MarshalError> {
    let raw = actor.whoami().await?;

    raw.as_principal("whoami result")
}
