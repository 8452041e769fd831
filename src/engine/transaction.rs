use chrono::{DateTime, Local};

use crate::engine::account::Rejection;
use crate::engine::{Account, Amount, TransactionKind};

/// A requested movement of money. The amount is validated by the account it
/// is applied to, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Amount),
    Withdrawal(Amount),
}

impl Transaction {
    pub fn amount(&self) -> Amount {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    pub fn apply(&self, account: &mut Account) -> Result<(), Rejection> {
        self.apply_at(account, Local::now())
    }

    /// Applies the transaction and, only if the account accepted it, records
    /// it in the account history with `timestamp`.
    pub fn apply_at(&self, account: &mut Account, timestamp: DateTime<Local>) -> Result<(), Rejection> {
        let result = match self {
            Transaction::Deposit(amount) => account.deposit(*amount),
            Transaction::Withdrawal(amount) => account.withdraw(*amount),
        };

        match result {
            Ok(()) => {
                account
                    .history_mut()
                    .append(self.kind(), self.amount(), timestamp);
                log::debug!(
                    "Recorded {} of {} on account {}",
                    self.kind(),
                    self.amount(),
                    account.number()
                );
                Ok(())
            }
            Err(reason) => {
                log::debug!(
                    "Account {} refused {} of {}: {reason}",
                    account.number(),
                    self.kind(),
                    self.amount()
                );
                Err(reason)
            }
        }
    }
}
