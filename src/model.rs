mod patch;
mod storage;

pub use patch::AccountPatch;
pub use storage::{Account, AccountType, LabelItem};
