use crate::{
    actor::FranchiseActor,
    codec::nat_to_u64,
    domain::Category,
    error::MarshalError,
    log,
    wire::{WireValue, decode_opt_with},
};
use candid::Nat;

/// map_category
pub fn map_category(value: &WireValue) -> Result<Category, MarshalError> {
    Ok(Category {
        id: nat_to_u64(value.field("id")?.as_nat("id")?, "category id")?,
        name: value.field("name")?.as_text("name")?.to_string(),
        description: value
            .field("description")?
            .as_text("description")?
            .to_string(),
    })
}

/// create_category
/// Returns the new category's id.
pub async fn create_category(
    actor: &dyn FranchiseActor,
    name: &str,
    description: &str,
) -> Result<u64, MarshalError> {
    let raw = actor
        .create_category(name.to_string(), description.to_string())
        .await?;
    let id = nat_to_u64(raw.as_nat("createCategory result")?, "category id")?;

    log!("category", "created category {id}");

    Ok(id)
}

/// get_category
pub async fn get_category(
    actor: &dyn FranchiseActor,
    id: u64,
) -> Result<Option<Category>, MarshalError> {
    let raw = actor.get_category(Nat::from(id)).await?;

    decode_opt_with(&raw, "getCategory result", map_category)
}
