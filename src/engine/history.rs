use chrono::{DateTime, Local};
use std::fmt;

use crate::engine::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// Effect of one transaction that was actually applied to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub timestamp: DateTime<Local>,
}

/// Append-only, chronological log of the transactions applied to one account.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    // Only transactions write here, and only after the account accepted them
    pub(crate) fn append(&mut self, kind: TransactionKind, amount: Amount, timestamp: DateTime<Local>) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            timestamp,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_that_entries_keep_insertion_order() {
        let mut history = History::new();
        let start = Local::now();

        history.append(TransactionKind::Deposit, Amount::from_cents(100), start);
        history.append(TransactionKind::Withdrawal, Amount::from_cents(40), start + Duration::seconds(1));
        history.append(TransactionKind::Deposit, Amount::from_cents(7), start + Duration::seconds(2));

        let kinds: Vec<_> = history.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Deposit,
                TransactionKind::Withdrawal,
                TransactionKind::Deposit
            ]
        );
        assert_eq!(history.entries()[1].amount, Amount::from_cents(40));
        assert!(history.entries()[0].timestamp < history.entries()[2].timestamp);
    }

    #[test]
    fn test_that_count_filters_by_kind() {
        let mut history = History::new();
        assert!(history.is_empty());

        let now = Local::now();
        history.append(TransactionKind::Deposit, Amount::from_cents(100), now);
        history.append(TransactionKind::Withdrawal, Amount::from_cents(10), now);
        history.append(TransactionKind::Withdrawal, Amount::from_cents(10), now);

        assert_eq!(history.len(), 3);
        assert_eq!(history.count(TransactionKind::Withdrawal), 2);
        assert_eq!(history.count(TransactionKind::Deposit), 1);
    }
}
