use crate::{
    actor::FranchiseActor,
    codec::{decode_account, nat_to_u64, to_instant},
    domain::{LicenseDuration, MetadataValue, NftLicense},
    error::MarshalError,
    wire::{WireValue, decode_list_with, decode_opt_with, decode_variant},
};
use candid::Nat;
use serde_bytes::ByteBuf;

fn decode_duration(value: &WireValue) -> Result<LicenseDuration, MarshalError> {
    let (tag, payload) = decode_variant(value, "duration", &LicenseDuration::TAGS)?;

    match tag {
        "Years" => Ok(LicenseDuration::Years(nat_to_u64(
            payload.as_nat("duration.Years")?,
            "license duration years",
        )?)),
        _ => Ok(LicenseDuration::OneTime),
    }
}

fn decode_metadata_value(value: &WireValue) -> Result<MetadataValue, MarshalError> {
    let (tag, payload) = decode_variant(value, "metadata value", &MetadataValue::TAGS)?;

    Ok(match tag {
        "Nat" => MetadataValue::Nat(payload.as_nat("metadata.Nat")?.clone()),
        "Int" => MetadataValue::Int(payload.as_int("metadata.Int")?.clone()),
        "Text" => MetadataValue::Text(payload.as_text("metadata.Text")?.to_string()),
        _ => MetadataValue::Blob(ByteBuf::from(payload.as_blob("metadata.Blob")?.to_vec())),
    })
}

fn decode_metadata_entry(value: &WireValue) -> Result<(String, MetadataValue), MarshalError> {
    let [key, entry] = value.as_seq("metadata entry")? else {
        return Err(MarshalError::malformed(
            "metadata entry",
            "a [key, value] pair",
        ));
    };

    Ok((
        key.as_text("metadata key")?.to_string(),
        decode_metadata_value(entry)?,
    ))
}

/// map_license
/// Descriptive fields are projected out of the metadata entries; entries
/// under other keys are ignored.
pub fn map_license(value: &WireValue) -> Result<NftLicense, MarshalError> {
    let entries = decode_list_with(value.field("metadata")?, "metadata", decode_metadata_entry)?;

    let mut name = None;
    let mut description = None;
    let mut uri = None;

    for (key, entry) in entries {
        match (key.as_str(), entry) {
            ("name", MetadataValue::Text(text)) => name = Some(text),
            ("description", MetadataValue::Text(text)) => description = Some(text),
            ("uri", MetadataValue::Text(text)) => uri = Some(text),
            _ => {}
        }
    }

    let expires_at = decode_opt_with(value.field("expiryDate")?, "expiryDate", |v| {
        to_instant(v.as_nat("expiryDate")?, "license expiryDate")
    })?;

    Ok(NftLicense {
        token_id: nat_to_u64(value.field("tokenId")?.as_nat("tokenId")?, "token id")?,
        franchise_id: nat_to_u64(
            value.field("franchiseId")?.as_nat("franchiseId")?,
            "franchise id",
        )?,
        owner: decode_account(value.field("owner")?, "owner")?,
        issuer: decode_account(value.field("issuer")?, "issuer")?,
        duration: decode_duration(value.field("duration")?)?,
        issued_at: to_instant(
            value.field("issueDate")?.as_nat("issueDate")?,
            "license issueDate",
        )?,
        expires_at,
        name,
        description,
        uri,
    })
}

/// get_nft_license
pub async fn get_nft_license(
    actor: &dyn FranchiseActor,
    token_id: u64,
) -> Result<Option<NftLicense>, MarshalError> {
    let raw = actor.get_nft_license(Nat::from(token_id)).await?;

    decode_opt_with(&raw, "getNFTLicense result", map_license)
}

/// get_tokens_by_franchise
pub async fn get_tokens_by_franchise(
    actor: &dyn FranchiseActor,
    franchise_id: u64,
) -> Result<Vec<NftLicense>, MarshalError> {
    let raw = actor.get_tokens_by_franchise(Nat::from(franchise_id)).await?;

    decode_list_with(&raw, "getTokensByFranchise result", map_license)
}
