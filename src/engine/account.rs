use thiserror::Error;

use crate::engine::amount::AmountError;
use crate::engine::policy::{AccountKind, CheckingPolicy, WithdrawalPolicy};
use crate::engine::{Amount, Customer, CustomerId, History};

pub type AccountNumber = u32;

/// Every account belongs to the same branch
pub const BRANCH_CODE: &str = "0001";

/// Reasons an account refuses to move money. Nothing is mutated when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("invalid amount")]
    InvalidAmount,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("amount exceeds the withdrawal limit of {limit}")]
    ExceedsWithdrawalLimit { limit: Amount },

    #[error("maximum of {max} withdrawals exceeded")]
    WithdrawalCountExceeded { max: usize },

    #[error("balance out of range: {0}")]
    Overflow(#[from] AmountError),
}

// Customer account
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber, // Unique within the bank
    owner: CustomerId,
    balance: Amount,
    history: History,
    kind: AccountKind,
}

impl Account {
    pub fn new(number: AccountNumber, owner: &Customer, kind: AccountKind) -> Self {
        Account {
            number,
            owner: owner.id(),
            balance: Amount::ZERO,
            history: History::new(),
            kind,
        }
    }

    /// Opens an empty checking account bound to `owner`.
    /// The caller is responsible for adding it to the owner's account list.
    pub fn new_checking(owner: &Customer, number: AccountNumber, policy: CheckingPolicy) -> Self {
        Account::new(number, owner, AccountKind::Checking(policy))
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH_CODE
    }

    pub fn owner(&self) -> CustomerId {
        self.owner
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), Rejection> {
        if !amount.is_positive() {
            return Err(Rejection::InvalidAmount);
        }

        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<(), Rejection> {
        self.kind.screen_withdrawal(amount, &self.history)?;

        // Funds are checked before the sign of the amount
        if amount > self.balance {
            return Err(Rejection::InsufficientFunds);
        }
        if !amount.is_positive() {
            return Err(Rejection::InvalidAmount);
        }

        self.balance = self.balance.checked_sub(amount)?;
        Ok(())
    }
}
