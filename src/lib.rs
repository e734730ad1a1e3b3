pub mod labels;
pub mod model;
pub mod slot;
pub mod store;
pub mod validate;

pub use labels::{format_labels, parse_labels};
pub use model::{Account, AccountPatch, AccountType, LabelItem};
pub use slot::{FileSlot, MemorySlot, Slot};
pub use store::{AccountStore, ACCOUNTS_KEY};
pub use validate::{validate_account, validation_problems};
