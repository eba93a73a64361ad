//! Scope selection — which slice of the wallet a list or balance covers.
//!
//! The UI hands the data layer a [`ScopeSelector`]: a single HD account,
//! a single imported legacy address, or a consolidated pseudo-account
//! standing for every account or every imported address at once. A
//! consolidated selection carries an optional kind tag because screens
//! can be wired up before the tag is chosen; resolution turns a selector
//! into the closed [`TxScope`] enum or fails loudly, never silently.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An HD account, identified by its extended public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub label: String,
    pub xpub: String,
}

impl Account {
    pub fn new(label: impl Into<String>, xpub: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            xpub: xpub.into(),
        }
    }
}

/// A single imported (non-HD) address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyAddress {
    pub label: String,
    pub address: String,
}

impl LegacyAddress {
    pub fn new(label: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            address: address.into(),
        }
    }
}

/// Which group a consolidated pseudo-account stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsolidatedKind {
    AllAccounts,
    AllImportedAddresses,
}

/// A virtual account grouping every HD account or every imported address.
///
/// `kind` is optional: the UI constructs these before the user picks a
/// grouping, so an untagged instance can reach the data layer. Resolution
/// rejects it with [`ScopeError::Untyped`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedAccount {
    pub label: String,
    pub kind: Option<ConsolidatedKind>,
}

impl ConsolidatedAccount {
    pub fn new(label: impl Into<String>, kind: ConsolidatedKind) -> Self {
        Self {
            label: label.into(),
            kind: Some(kind),
        }
    }

    /// A consolidated account whose grouping has not been chosen yet.
    pub fn untyped(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: None,
        }
    }
}

/// The scope object handed in by the UI layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeSelector {
    Account(Account),
    Legacy(LegacyAddress),
    Consolidated(ConsolidatedAccount),
}

impl fmt::Display for ScopeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeSelector::Account(a) => write!(f, "account {:?}", a.label),
            ScopeSelector::Legacy(l) => write!(f, "legacy address {:?}", l.label),
            ScopeSelector::Consolidated(c) => write!(f, "consolidated {:?}", c.label),
        }
    }
}

/// Failure to resolve a [`ScopeSelector`] into a [`TxScope`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("consolidated account has no type set")]
    Untyped,
}

/// A fully resolved scope. Every variant maps to exactly one payload
/// accessor, so downstream matches are exhaustive by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxScope {
    /// One HD account, fetched by its xpub.
    Account { xpub: String },
    /// One imported legacy address.
    LegacyAddress { address: String },
    /// Every HD account in the wallet.
    AllAccounts,
    /// Every imported legacy address.
    AllImportedAddresses,
}

impl TxScope {
    /// Resolve a selector into exactly one scope branch.
    ///
    /// The only failure is a consolidated selection with no kind tag;
    /// the other selector shapes always resolve.
    pub fn resolve(selector: &ScopeSelector) -> Result<Self, ScopeError> {
        match selector {
            ScopeSelector::Account(account) => Ok(TxScope::Account {
                xpub: account.xpub.clone(),
            }),
            ScopeSelector::Legacy(legacy) => Ok(TxScope::LegacyAddress {
                address: legacy.address.clone(),
            }),
            ScopeSelector::Consolidated(consolidated) => match consolidated.kind {
                Some(ConsolidatedKind::AllAccounts) => Ok(TxScope::AllAccounts),
                Some(ConsolidatedKind::AllImportedAddresses) => Ok(TxScope::AllImportedAddresses),
                None => Err(ScopeError::Untyped),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_resolves_to_xpub_scope() {
        let selector = ScopeSelector::Account(Account::new("Savings", "xpub6CUGRU"));
        assert_eq!(
            TxScope::resolve(&selector),
            Ok(TxScope::Account {
                xpub: "xpub6CUGRU".into()
            })
        );
    }

    #[test]
    fn legacy_resolves_to_address_scope() {
        let selector = ScopeSelector::Legacy(LegacyAddress::new(
            "Imported",
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        ));
        assert_eq!(
            TxScope::resolve(&selector),
            Ok(TxScope::LegacyAddress {
                address: "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".into()
            })
        );
    }

    #[test]
    fn consolidated_resolves_by_kind() {
        let all = ScopeSelector::Consolidated(ConsolidatedAccount::new(
            "All",
            ConsolidatedKind::AllAccounts,
        ));
        assert_eq!(TxScope::resolve(&all), Ok(TxScope::AllAccounts));

        let imported = ScopeSelector::Consolidated(ConsolidatedAccount::new(
            "Imported",
            ConsolidatedKind::AllImportedAddresses,
        ));
        assert_eq!(
            TxScope::resolve(&imported),
            Ok(TxScope::AllImportedAddresses)
        );
    }

    #[test]
    fn untyped_consolidated_is_an_error() {
        let selector = ScopeSelector::Consolidated(ConsolidatedAccount::untyped("All"));
        assert_eq!(TxScope::resolve(&selector), Err(ScopeError::Untyped));
    }

    #[test]
    fn untyped_error_message() {
        assert_eq!(
            ScopeError::Untyped.to_string(),
            "consolidated account has no type set"
        );
    }
}
