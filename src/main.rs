use anyhow::{Error, Result};
use itertools::Itertools;
use log::*;
use structopt::StructOpt;

use account_store::{
    format_labels, parse_labels, validation_problems, Account, AccountPatch, AccountStore,
    AccountType, FileSlot, Slot,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "account-store", about = "Manage stored LDAP and local accounts")]
struct Opt {
    /// Directory holding the accounts snapshot
    #[structopt(short, long, env = "ACCOUNT_STORE_DIR", default_value = "~/.config/account-store")]
    dir: String,

    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    /// Show all accounts
    List,
    /// Add a blank local account and print its id
    Add,
    /// Remove an account
    Remove { id: String },
    /// Change fields of an account
    Update {
        id: String,
        #[structopt(long)]
        login: Option<String>,
        #[structopt(long)]
        password: Option<String>,
        /// Clear the password
        #[structopt(long)]
        no_password: bool,
        /// ldap or local
        #[structopt(long = "type")]
        account_type: Option<AccountType>,
        /// Labels separated by `;`
        #[structopt(long)]
        labels: Option<String>,
    },
    /// Check one or all accounts, exits non-zero if any is invalid
    Validate { id: Option<String> },
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let opt = Opt::from_args();
    debug!("Options {:?}", opt);

    let slot = FileSlot::expand(&opt.dir)?;
    let mut store = AccountStore::initialize(slot)?;
    run(&mut store, opt.cmd)
}

fn run<S: Slot>(store: &mut AccountStore<S>, cmd: Cmd) -> Result<()> {
    match cmd {
        Cmd::List => {
            for account in store.accounts() {
                println!("{}", describe(account));
            }
        }
        Cmd::Add => {
            let id = store.add_account()?;
            println!("{}", id);
        }
        Cmd::Remove { id } => store.remove_account(&id)?,
        Cmd::Update { id, login, password, no_password, account_type, labels } => {
            if store.find(&id).is_none() {
                return Err(Error::msg(format!("No account with id {}", id)));
            }
            let patch = build_patch(login, password, no_password, account_type, labels)?;
            if patch.is_empty() {
                warn!("Nothing to update for {}", id);
                return Ok(());
            }
            store.update_account(&id, patch)?;
        }
        Cmd::Validate { id } => {
            let accounts: Vec<&Account> = match id {
                Some(id) => vec![store.find(&id)
                    .ok_or_else(|| Error::msg(format!("No account with id {}", id)))?],
                None => store.accounts().iter().collect(),
            };
            let mut invalid = 0;
            for account in accounts {
                let problems = validation_problems(account);
                if problems.is_empty() {
                    println!("{}: ok", account.id);
                } else {
                    invalid += 1;
                    println!("{}: {}", account.id, problems.iter().join(", "));
                }
            }
            if invalid > 0 {
                return Err(Error::msg(format!("{} invalid account(s)", invalid)));
            }
        }
    }
    Ok(())
}

fn build_patch(
    login: Option<String>,
    password: Option<String>,
    no_password: bool,
    account_type: Option<AccountType>,
    labels: Option<String>,
) -> Result<AccountPatch> {
    if no_password && password.is_some() {
        return Err(Error::msg("--password and --no-password cannot be used together"));
    }
    let mut patch = AccountPatch { login, account_type, ..AccountPatch::default() };
    if no_password {
        patch = patch.password(None);
    } else if password.is_some() {
        patch = patch.password(password);
    }
    // The store does not keep the two label forms in step, so set both here
    if let Some(raw) = labels {
        patch = patch.labels(parse_labels(&raw)).labels_string(raw);
    }
    Ok(patch)
}

fn describe(account: &Account) -> String {
    let login: &str = if account.login.is_empty() { "<no login>" } else { &account.login };
    let mut line = format!("{}\t{}\t{}", account.id, account.account_type, login);
    if !account.labels.is_empty() {
        line.push_str(&format!("\t[{}]", format_labels(&account.labels)));
    }
    if validation_problems(account).is_empty() {
        line
    } else {
        line + "\t(invalid)"
    }
}
