use crate::domain::prelude::*;
use icrc_ledger_types::icrc1::account::Account as IcrcAccount;
use std::{
    fmt::{self, Display},
    str::FromStr,
};

///
/// Subaccount
///

pub type Subaccount = [u8; 32];

pub const DEFAULT_SUBACCOUNT: &Subaccount = &[0; 32];

///
/// Account
///
/// A balance/ownership slot on an ICRC-1 ledger: an owner principal plus an
/// optional fixed-length subaccount. Two accounts are equal when their
/// owners match and their effective subaccounts match.
///

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Account {
    pub owner: Principal,
    pub subaccount: Option<Subaccount>,
}

impl Account {
    pub fn new<P: Into<Principal>, S: Into<Subaccount>>(owner: P, subaccount: Option<S>) -> Self {
        Self {
            owner: owner.into(),
            subaccount: subaccount.map(Into::into),
        }
    }

    /// The subaccount if set, otherwise the all-zero default.
    #[inline]
    #[must_use]
    pub fn effective_subaccount(&self) -> &Subaccount {
        self.subaccount.as_ref().unwrap_or(DEFAULT_SUBACCOUNT)
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ICRC-1 textual encoding: default accounts render as the bare
        // principal, the rest as `owner-checksum.subaccount_hex`.
        match &self.subaccount {
            None => write!(f, "{}", self.owner),
            Some(subaccount) if subaccount == DEFAULT_SUBACCOUNT => write!(f, "{}", self.owner),
            Some(subaccount) => {
                let checksum = account_checksum(self.owner.as_slice(), subaccount.as_slice());
                let hex_subaccount = hex::encode(subaccount.as_slice());
                let hex_subaccount = hex_subaccount.trim_start_matches('0');

                write!(f, "{}-{checksum}.{hex_subaccount}", self.owner)
            }
        }
    }
}

impl Eq for Account {}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.effective_subaccount() == other.effective_subaccount()
    }
}

impl From<Principal> for Account {
    fn from(owner: Principal) -> Self {
        Self {
            owner,
            subaccount: None,
        }
    }
}

impl FromStr for Account {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let account = IcrcAccount::from_str(s).map_err(|err| err.to_string())?;

        Ok(Self::new(account.owner, account.subaccount))
    }
}

// CRC-32 of owner+subaccount, base32 without padding, lowercase.
fn account_checksum(owner: &[u8], subaccount: &[u8]) -> String {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(owner);
    hasher.update(subaccount);
    let checksum = hasher.finalize().to_be_bytes();

    base32::encode(base32::Alphabet::Rfc4648 { padding: false }, &checksum).to_lowercase()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_subaccount_renders_as_bare_principal() {
        let account = Account::from(Principal::anonymous());

        assert_eq!(account.to_string(), Principal::anonymous().to_text());
        assert_eq!(account, Account::new(Principal::anonymous(), Some([0u8; 32])));
    }

    #[test]
    fn textual_form_roundtrips() {
        let mut subaccount = [0u8; 32];
        subaccount[31] = 1;
        let account = Account::new(Principal::from_slice(&[1, 2, 3, 4]), Some(subaccount));

        let parsed: Account = account.to_string().parse().unwrap();
        assert_eq!(parsed, account);
    }

    #[test]
    fn rejects_mangled_account_text() {
        assert!("not-an-account.zz".parse::<Account>().is_err());
    }
}
