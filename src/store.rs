use anyhow::{Context, Result};
use log::{debug, warn};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{Account, AccountPatch};
use crate::slot::Slot;

/// Key the account snapshot is stored under.
pub const ACCOUNTS_KEY: &str = "accounts";

/// In-memory account list mirrored to a [`Slot`] after every change.
///
/// Every mutation serialises the whole list and overwrites the stored
/// snapshot before returning, so the slot always matches `accounts()`.
#[derive(Debug)]
pub struct AccountStore<S: Slot> {
    slot: S,
    accounts: Vec<Account>,
    last_id: u128,
}

impl<S: Slot> AccountStore<S> {
    /// Load the stored snapshot. A missing or blank snapshot gives an empty
    /// store, a malformed one is an error.
    pub fn initialize(slot: S) -> Result<Self> {
        let accounts: Vec<Account> = match slot.get(ACCOUNTS_KEY)? {
            Some(saved) if !saved.trim().is_empty() => serde_json::from_str(&saved)
                .context("Error de-serialising stored accounts")?,
            _ => vec![],
        };
        debug!("Loaded {} accounts", accounts.len());
        let last_id = accounts.iter()
            .filter_map(|a| a.id.parse::<u128>().ok())
            .max()
            .unwrap_or(0);
        Ok(AccountStore { slot, accounts, last_id })
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Append a blank local account and return its id.
    pub fn add_account(&mut self) -> Result<String> {
        let id = self.next_id();
        self.accounts.push(Account::blank(id.clone()));
        self.save()?;
        Ok(id)
    }

    /// Remove the account with this id. Unknown ids leave the list as it is.
    pub fn remove_account(&mut self, id: &str) -> Result<()> {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != id);
        if self.accounts.len() == before {
            warn!("No account with id {} to remove", id);
        }
        self.save()
    }

    /// Merge the patch into the account with this id. Unknown ids are ignored
    /// and nothing is written.
    pub fn update_account(&mut self, id: &str, patch: AccountPatch) -> Result<()> {
        match self.accounts.iter_mut().find(|a| a.id == id) {
            Some(account) => {
                account.apply(patch);
                self.save()
            }
            None => {
                warn!("No account with id {} to update", id);
                Ok(())
            }
        }
    }

    fn save(&mut self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.accounts)?;
        debug!("Saving {} accounts", self.accounts.len());
        self.slot.set(ACCOUNTS_KEY, &snapshot)
            .context("Error saving accounts")
    }

    // Millisecond timestamp, bumped past the last issued id when the clock
    // has not moved on. Loaded ids can sit at the top of the range, so any
    // candidate already in use is skipped.
    fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let mut candidate = match self.last_id.checked_add(1) {
            Some(next) => now.max(next),
            None => now,
        };
        while self.find(&candidate.to_string()).is_some() {
            candidate = candidate.wrapping_add(1);
        }
        self.last_id = self.last_id.max(candidate);
        candidate.to_string()
    }
}
