use std::collections::HashMap;
use thiserror::Error;

use crate::engine::account::Rejection;
use crate::engine::record::Command;
use crate::engine::{
    Account, AccountNumber, AccountSnapshot, CheckingPolicy, Customer, CustomerId, CustomerKind,
    Individual, Transaction,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Customer with tax id {0} already exists")]
    DuplicateCustomer(String),

    #[error("No customer with tax id {0}")]
    UnknownCustomer(String),

    #[error("Customer with tax id {0} has no account")]
    NoAccount(String),

    #[error("Operation rejected: {0}")]
    Rejected(#[from] Rejection),
}

/// Every customer and account known to one bank instance.
pub struct Ledger {
    customers: Vec<Customer>,
    tax_ids: HashMap<String, CustomerId>,
    accounts: Vec<Account>,
    next_account_number: AccountNumber,
    policy: CheckingPolicy,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::with_policy(CheckingPolicy::default())
    }

    /// `policy` applies to every checking account opened afterwards
    pub fn with_policy(policy: CheckingPolicy) -> Self {
        Ledger {
            customers: Vec::new(),
            tax_ids: HashMap::new(),
            accounts: Vec::new(),
            next_account_number: 1,
            policy,
        }
    }

    pub fn policy(&self) -> CheckingPolicy {
        self.policy
    }

    pub fn register_individual(
        &mut self,
        person: Individual,
        address: impl Into<String>,
    ) -> Result<CustomerId, LedgerError> {
        if self.tax_ids.contains_key(&person.tax_id) {
            return Err(LedgerError::DuplicateCustomer(person.tax_id));
        }

        let id = CustomerId(self.customers.len());
        self.tax_ids.insert(person.tax_id.clone(), id);
        log::debug!("Registering customer {} as {id:?}", person.tax_id);
        self.customers
            .push(Customer::new(id, address, CustomerKind::Individual(person)));

        Ok(id)
    }

    pub fn find_customer(&self, tax_id: &str) -> Option<&Customer> {
        self.tax_ids.get(tax_id).and_then(|id| self.customer(*id))
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(id.0)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn open_checking_account(&mut self, tax_id: &str) -> Result<AccountNumber, LedgerError> {
        let id = self.customer_id(tax_id)?;
        let number = self.next_account_number;

        let customer = &mut self.customers[id.0];
        let account = Account::new_checking(customer, number, self.policy);
        customer.add_account(&account);
        self.accounts.push(account);
        self.next_account_number += 1;

        log::debug!("Opened checking account {number} for customer {tax_id}");
        Ok(number)
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// First account opened by the customer
    pub fn primary_account(&self, tax_id: &str) -> Result<&Account, LedgerError> {
        let number = self.primary_account_number(tax_id)?;
        self.account(number)
            .ok_or_else(|| LedgerError::NoAccount(tax_id.to_owned()))
    }

    /// Applies `transaction` to the customer's primary account and returns its number.
    pub fn submit(
        &mut self,
        tax_id: &str,
        transaction: Transaction,
    ) -> Result<AccountNumber, LedgerError> {
        let id = self.customer_id(tax_id)?;
        let number = self.primary_account_number(tax_id)?;

        let customer = &self.customers[id.0];
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or_else(|| LedgerError::NoAccount(tax_id.to_owned()))?;

        customer.apply_transaction(account, &transaction)?;
        Ok(number)
    }

    pub fn execute(&mut self, command: Command) -> Result<(), LedgerError> {
        match command {
            Command::Register { person, address } => {
                self.register_individual(person, address)?;
            }
            Command::Open { tax_id } => {
                self.open_checking_account(&tax_id)?;
            }
            Command::Submit {
                tax_id,
                transaction,
            } => {
                self.submit(&tax_id, transaction)?;
            }
        }

        Ok(())
    }

    pub fn holder_name(&self, account: &Account) -> Option<&str> {
        self.customer(account.owner()).map(Customer::display_name)
    }

    pub fn snapshots(&self) -> impl Iterator<Item = AccountSnapshot> + '_ {
        self.accounts.iter().map(|account| AccountSnapshot {
            branch: account.branch().to_owned(),
            account: account.number(),
            holder: self.holder_name(account).unwrap_or_default().to_owned(),
            balance: account.balance().to_string(),
            entries: account.history().len(),
        })
    }

    fn customer_id(&self, tax_id: &str) -> Result<CustomerId, LedgerError> {
        self.tax_ids
            .get(tax_id)
            .copied()
            .ok_or_else(|| LedgerError::UnknownCustomer(tax_id.to_owned()))
    }

    fn primary_account_number(&self, tax_id: &str) -> Result<AccountNumber, LedgerError> {
        let id = self.customer_id(tax_id)?;
        self.customers[id.0]
            .accounts()
            .first()
            .copied()
            .ok_or_else(|| LedgerError::NoAccount(tax_id.to_owned()))
    }
}
