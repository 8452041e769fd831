use serde::{Deserialize, Serialize};

use crate::engine::AccountNumber;

/// A Snapshot of an Account to easily view the content
/// It is used for decoupling ledger output from Account and easy serialisation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountSnapshot {
    pub branch: String,
    pub account: AccountNumber,
    pub holder: String,
    pub balance: String,
    pub entries: usize,
}
