use crate::{
    actor::FranchiseActor,
    codec::{nat_to_u64, nat_to_u128, to_instant, to_major_units},
    domain::Transaction,
    error::MarshalError,
    wire::{WireValue, decode_list_with, decode_opt_with},
};
use candid::Nat;
use rust_decimal::Decimal;

/// map_transaction
pub fn map_transaction(value: &WireValue) -> Result<Transaction, MarshalError> {
    let nft_id = decode_opt_with(value.field("nftId")?, "nftId", |v| {
        nat_to_u64(v.as_nat("nftId")?, "related nft id")
    })?;
    let application_id = decode_opt_with(value.field("applicationId")?, "applicationId", |v| {
        nat_to_u64(v.as_nat("applicationId")?, "related application id")
    })?;

    Ok(Transaction {
        id: nat_to_u64(value.field("id")?.as_nat("id")?, "transaction id")?,
        from: value.field("from")?.as_principal("from")?,
        to: value.field("to")?.as_principal("to")?,
        amount: nat_to_u128(value.field("amount")?.as_nat("amount")?, "transaction amount")?,
        timestamp: to_instant(
            value.field("timestamp")?.as_nat("timestamp")?,
            "transaction timestamp",
        )?,
        purpose: value.field("purpose")?.as_text("purpose")?.to_string(),
        nft_id,
        application_id,
    })
}

/// major_amount
/// The transaction's amount in major units for the asset's decimal
/// exponent; exact, via the fixed-point codec.
pub fn major_amount(transaction: &Transaction, decimals: u8) -> Result<Decimal, MarshalError> {
    to_major_units(&Nat::from(transaction.amount), decimals)
}

/// get_transaction
pub async fn get_transaction(
    actor: &dyn FranchiseActor,
    id: u64,
) -> Result<Option<Transaction>, MarshalError> {
    let raw = actor.get_transaction(Nat::from(id)).await?;

    decode_opt_with(&raw, "getTransaction result", map_transaction)
}

/// list_transactions
pub async fn list_transactions(
    actor: &dyn FranchiseActor,
) -> Result<Vec<Transaction>, MarshalError> {
    let raw = actor.list_transactions().await?;

    decode_list_with(&raw, "listTransactions result", map_transaction)
}
