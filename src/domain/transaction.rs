use crate::domain::prelude::*;

///
/// Transaction
///
/// `amount` stays in integer minor units; conversion to a display amount
/// goes through the fixed-point codec with the asset's decimal exponent.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Transaction {
    pub id: u64,
    pub from: Principal,
    pub to: Principal,
    pub amount: u128,
    pub timestamp: DateTime<Utc>,
    pub purpose: String,
    pub nft_id: Option<u64>,
    pub application_id: Option<u64>,
}
