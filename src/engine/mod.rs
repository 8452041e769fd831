mod account;
mod account_snapshot;
mod amount;
mod customer;
mod history;
mod ledger;
mod policy;
mod record;
mod transaction;

pub use account::{Account, AccountNumber, BRANCH_CODE, Rejection};
pub use account_snapshot::AccountSnapshot;
pub use amount::{Amount, AmountError};
pub use customer::{Customer, CustomerId, CustomerKind, Individual};
pub use history::{History, HistoryEntry, TransactionKind};
pub use ledger::{Ledger, LedgerError};
pub use policy::{AccountKind, CheckingPolicy, WithdrawalPolicy};
pub use record::{BIRTH_DATE_FORMAT, Command, InputRecord, RecordError, RecordType};
pub use transaction::Transaction;
