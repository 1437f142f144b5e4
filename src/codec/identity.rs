use crate::{
    domain::{Account, Subaccount},
    error::MarshalError,
    wire::{WireValue, decode_opt_with, encode_opt},
};
use candid::Principal;

/// principal_from_text
/// Parses the canonical textual form of a principal; base32 shape and
/// CRC-32 checksum are both validated.
pub fn principal_from_text(text: &str) -> Result<Principal, MarshalError> {
    Principal::from_text(text).map_err(|err| MarshalError::InvalidIdentity {
        reason: err.to_string(),
    })
}

/// principal_to_text
/// Canonical textual form; `principal_to_text(principal_from_text(s)) == s`
/// for every valid `s`.
#[must_use]
pub fn principal_to_text(principal: &Principal) -> String {
    principal.to_text()
}

/// decode_account
/// An account pairs an owner principal with an optional fixed-length
/// subaccount blob (optional-as-sequence around 32 bytes).
pub fn decode_account(value: &WireValue, field: &str) -> Result<Account, MarshalError> {
    let owner = value.field("owner")?.as_principal("owner")?;

    let subaccount = decode_opt_with(value.field("subaccount")?, "subaccount", |blob| {
        Subaccount::try_from(blob.as_blob("subaccount")?)
            .map_err(|_| MarshalError::malformed(format!("{field}.subaccount"), "a 32-byte blob"))
    })?;

    Ok(Account::new(owner, subaccount))
}

/// encode_account
/// Exact inverse of [`decode_account`].
#[must_use]
pub fn encode_account(account: &Account) -> WireValue {
    WireValue::record([
        ("owner", WireValue::Principal(account.owner)),
        (
            "subaccount",
            encode_opt(account.subaccount.map(|bytes| WireValue::blob(bytes.to_vec()))),
        ),
    ])
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_principal_text_roundtrips() {
        let principal = Principal::from_slice(&[1, 2, 3, 4, 5]);
        let text = principal_to_text(&principal);

        assert_eq!(principal_from_text(&text).unwrap(), principal);
        assert_eq!(principal_to_text(&principal_from_text(&text).unwrap()), text);
    }

    #[test]
    fn rejects_garbage_identity_text() {
        for bad in ["", "hello world", "aaaaa-aa!!", "-----"] {
            assert!(matches!(
                principal_from_text(bad),
                Err(MarshalError::InvalidIdentity { .. })
            ));
        }
    }

    #[test]
    fn rejects_checksum_mismatches() {
        // Hand-roll the textual form with a deliberately wrong CRC-32.
        let payload = [9u8; 10];
        let mut checksum = crc32fast::hash(&payload).wrapping_add(1).to_be_bytes().to_vec();
        checksum.extend_from_slice(&payload);

        let raw = base32::encode(base32::Alphabet::Rfc4648 { padding: false }, &checksum)
            .to_lowercase();
        let grouped = raw
            .as_bytes()
            .chunks(5)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join("-");

        assert!(matches!(
            principal_from_text(&grouped),
            Err(MarshalError::InvalidIdentity { .. })
        ));
    }

    #[test]
    fn account_roundtrips_with_and_without_subaccount() {
        let bare = Account::from(Principal::from_slice(&[7; 8]));
        let with_sub = Account::new(Principal::from_slice(&[8; 8]), Some([0xAB; 32]));

        for account in [bare, with_sub] {
            let encoded = encode_account(&account);
            assert_eq!(decode_account(&encoded, "owner").unwrap(), account);
        }
    }

    #[test]
    fn rejects_short_subaccounts() {
        let encoded = WireValue::record([
            ("owner", WireValue::Principal(Principal::anonymous())),
            ("subaccount", encode_opt(Some(WireValue::blob(vec![1, 2, 3])))),
        ]);

        assert!(matches!(
            decode_account(&encoded, "owner"),
            Err(MarshalError::MalformedRecord { .. })
        ));
    }
}
