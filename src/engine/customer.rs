use chrono::NaiveDate;

use crate::engine::account::Rejection;
use crate::engine::{Account, AccountNumber, Transaction};

/// Handle of a customer inside its [`Ledger`](crate::engine::Ledger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub usize);

/// Personal data of a natural person. `tax_id` is unique among all customers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub tax_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerKind {
    Individual(Individual),
}

#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    address: String,
    kind: CustomerKind,
    accounts: Vec<AccountNumber>,
}

impl Customer {
    pub fn new(id: CustomerId, address: impl Into<String>, kind: CustomerKind) -> Self {
        Customer {
            id,
            address: address.into(),
            kind,
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn kind(&self) -> &CustomerKind {
        &self.kind
    }

    pub fn display_name(&self) -> &str {
        match &self.kind {
            CustomerKind::Individual(person) => &person.full_name,
        }
    }

    pub fn tax_id(&self) -> &str {
        match &self.kind {
            CustomerKind::Individual(person) => &person.tax_id,
        }
    }

    /// Numbers of the accounts owned by this customer, in opening order
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn add_account(&mut self, account: &Account) {
        self.accounts.push(account.number());
    }

    /// Applies `transaction` to `account`.
    ///
    /// Ownership of `account` is not verified here; callers that need it go
    /// through [`Ledger::submit`](crate::engine::Ledger::submit), which only
    /// ever picks one of the customer's own accounts.
    pub fn apply_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), Rejection> {
        log::debug!(
            "Customer {} applying {transaction:?} to account {}",
            self.tax_id(),
            account.number()
        );
        transaction.apply(account)
    }
}

#[cfg(test)]
pub(crate) fn test_customer() -> Customer {
    let person = Individual {
        full_name: String::from("Ana Souza"),
        birth_date: NaiveDate::from_ymd_opt(1990, 2, 1).unwrap(),
        tax_id: String::from("12345678900"),
    };
    Customer::new(
        CustomerId(0),
        "Rua das Flores, 10 - Centro - Recife/PE",
        CustomerKind::Individual(person),
    )
}
