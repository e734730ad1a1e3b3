use super::{AccountType, LabelItem};

/// Partial account update. Fields left as `None` are kept as they are.
///
/// `password` is doubly optional: `Some(None)` clears the password, `None`
/// leaves it alone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountPatch {
    pub labels: Option<Vec<LabelItem>>,
    pub account_type: Option<AccountType>,
    pub login: Option<String>,
    pub password: Option<Option<String>>,
    pub labels_string: Option<String>,
}

impl AccountPatch {
    pub fn labels(mut self, labels: Vec<LabelItem>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    pub fn login<T: Into<String>>(mut self, login: T) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn password(mut self, password: Option<String>) -> Self {
        self.password = Some(password);
        self
    }

    pub fn labels_string<T: Into<String>>(mut self, labels_string: T) -> Self {
        self.labels_string = Some(labels_string.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &AccountPatch::default()
    }
}
