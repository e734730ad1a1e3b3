use crate::model::{Account, AccountType};

/// Reasons an account would not pass the form check. Empty when it is valid.
pub fn validation_problems(account: &Account) -> Vec<&'static str> {
    let mut problems = vec![];
    if account.login.trim().is_empty() {
        problems.push("login is empty");
    }
    if account.account_type == AccountType::Local
        && account.password.as_deref().map_or(true, str::is_empty)
    {
        problems.push("local account has no password");
    }
    problems
}

/// LDAP passwords are not checked, neither is agreement between `labels` and
/// `labelsString`.
pub fn validate_account(account: &Account) -> bool {
    validation_problems(account).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(account_type: AccountType, login: &str, password: Option<&str>) -> Account {
        Account {
            id: "1".to_owned(),
            labels: vec![],
            account_type,
            login: login.to_owned(),
            password: password.map(str::to_owned),
            labels_string: String::new(),
        }
    }

    #[test]
    fn local_needs_login() {
        assert!(!validate_account(&account(AccountType::Local, "", Some("p"))));
        assert!(!validate_account(&account(AccountType::Local, "   ", Some("p"))));
    }

    #[test]
    fn local_needs_password() {
        assert!(!validate_account(&account(AccountType::Local, "u", None)));
        assert!(!validate_account(&account(AccountType::Local, "u", Some(""))));
        assert!(validate_account(&account(AccountType::Local, "u", Some("p"))));
    }

    #[test]
    fn ldap_password_is_not_checked() {
        assert!(validate_account(&account(AccountType::Ldap, "u", None)));
        assert!(validate_account(&account(AccountType::Ldap, "u", Some(""))));
        assert!(!validate_account(&account(AccountType::Ldap, "", None)));
    }

    #[test]
    fn lists_every_problem() {
        let problems = validation_problems(&account(AccountType::Local, "", None));
        assert_eq!(problems, vec!["login is empty", "local account has no password"]);
    }
}
