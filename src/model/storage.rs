use std::fmt;
use std::str::FromStr;

use anyhow::Error;
use serde::{Deserialize, Serialize};

use super::AccountPatch;

// Storage model, field names match the persisted JSON snapshot
#[derive(Debug, Hash, Eq, PartialEq, Clone, Serialize, Deserialize)]
pub struct LabelItem {
    pub text: String,
}

impl LabelItem {
    pub fn new<T: Into<String>>(text: T) -> Self {
        LabelItem { text: text.into() }
    }
}

/// Kind of credential an account holds.
///
/// Local accounts keep their password in the store, LDAP accounts may leave it
/// to the directory.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "LDAP")]
    Ldap,
    #[serde(rename = "Локальная", alias = "Local")]
    Local,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Ldap => write!(f, "LDAP"),
            AccountType::Local => write!(f, "Local"),
        }
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ldap" => Ok(AccountType::Ldap),
            "local" | "локальная" => Ok(AccountType::Local),
            other => Err(Error::msg(format!(
                "Unknown account type '{}', expected 'ldap' or 'local'", other
            ))),
        }
    }
}

#[derive(Debug, Hash, Eq, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub labels: Vec<LabelItem>,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub login: String,
    #[serde(default)]
    pub password: Option<String>,
    pub labels_string: String,
}

impl Account {
    /// Fresh account as created from the "add" action: local, everything empty.
    pub fn blank<T: Into<String>>(id: T) -> Self {
        Account {
            id: id.into(),
            labels: vec![],
            account_type: AccountType::Local,
            login: String::new(),
            password: Some(String::new()),
            labels_string: String::new(),
        }
    }

    /// Replace only the fields the patch carries. The id never changes.
    pub fn apply(&mut self, patch: AccountPatch) {
        let AccountPatch { labels, account_type, login, password, labels_string } = patch;
        if let Some(labels) = labels {
            self.labels = labels;
        }
        if let Some(account_type) = account_type {
            self.account_type = account_type;
        }
        if let Some(login) = login {
            self.login = login;
        }
        if let Some(password) = password {
            self.password = password;
        }
        if let Some(labels_string) = labels_string {
            self.labels_string = labels_string;
        }
    }
}
