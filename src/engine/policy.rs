use crate::engine::account::Rejection;
use crate::engine::{Amount, History, TransactionKind};

/// Extra checks an account kind runs before the generic withdrawal rules.
pub trait WithdrawalPolicy {
    fn screen_withdrawal(&self, amount: Amount, history: &History) -> Result<(), Rejection>;
}

/// Checking accounts cap the size of a single withdrawal and how many
/// withdrawals may ever be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    pub withdrawal_limit: Amount,
    pub max_withdrawals: usize,
}

impl CheckingPolicy {
    pub const DEFAULT_WITHDRAWAL_LIMIT: Amount = Amount::from_cents(500_00);
    pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;

    pub fn new(withdrawal_limit: Amount, max_withdrawals: usize) -> Self {
        CheckingPolicy {
            withdrawal_limit,
            max_withdrawals,
        }
    }
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        CheckingPolicy::new(
            Self::DEFAULT_WITHDRAWAL_LIMIT,
            Self::DEFAULT_MAX_WITHDRAWALS,
        )
    }
}

impl WithdrawalPolicy for CheckingPolicy {
    fn screen_withdrawal(&self, amount: Amount, history: &History) -> Result<(), Rejection> {
        // Counted from recorded entries, so rejected attempts never count
        let withdrawals = history.count(TransactionKind::Withdrawal);

        if amount > self.withdrawal_limit {
            return Err(Rejection::ExceedsWithdrawalLimit {
                limit: self.withdrawal_limit,
            });
        }
        if withdrawals >= self.max_withdrawals {
            return Err(Rejection::WithdrawalCountExceeded {
                max: self.max_withdrawals,
            });
        }

        Ok(())
    }
}

/// Account flavours known to the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Only the generic rules apply
    Standard,
    Checking(CheckingPolicy),
}

impl WithdrawalPolicy for AccountKind {
    fn screen_withdrawal(&self, amount: Amount, history: &History) -> Result<(), Rejection> {
        match self {
            AccountKind::Standard => Ok(()),
            AccountKind::Checking(policy) => policy.screen_withdrawal(amount, history),
        }
    }
}
