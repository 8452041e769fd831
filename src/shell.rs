//! Interactive text menu over a [`Ledger`].
//!
//! All parsing of user text happens here; the engine only ever receives typed values.

use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::engine::{
    Account, Amount, BIRTH_DATE_FORMAT, Individual, Ledger, LedgerError, Transaction,
};

const MENU: &str = "
===============================
[1] Deposit
[2] Withdraw
[3] Statement
[4] New customer
[5] New account
[6] List accounts
[7] Quit
===============================
> ";

pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, input: R, output: W) -> Self {
        Shell {
            ledger,
            input,
            output,
        }
    }

    /// Runs the menu until the user quits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(option) = self.prompt(MENU)? else {
                break;
            };

            match option.as_str() {
                "1" => self.transact(Transaction::Deposit)?,
                "2" => self.transact(Transaction::Withdrawal)?,
                "3" => self.statement()?,
                "4" => self.new_customer()?,
                "5" => self.new_account()?,
                "6" => self.list_accounts()?,
                "7" => break,
                other => {
                    log::debug!("Unknown menu option {other:?}");
                    writeln!(self.output, "Invalid option, please select again.")?;
                }
            }
        }

        log::debug!("Shell finished");
        Ok(())
    }

    /// Writes `label` and reads one trimmed line, `None` once the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn transact(&mut self, make: fn(Amount) -> Transaction) -> Result<()> {
        let Some(tax_id) = self.prompt("Tax id: ")? else {
            return Ok(());
        };
        if self.ledger.find_customer(&tax_id).is_none() {
            writeln!(self.output, "\nCustomer not found!")?;
            return Ok(());
        }

        let Some(text) = self.prompt("Amount: ")? else {
            return Ok(());
        };
        let amount = match Amount::from_str(&text) {
            Ok(amount) => amount,
            Err(e) => {
                writeln!(self.output, "\n@@@ Operation failed! {e} @@@")?;
                return Ok(());
            }
        };

        let transaction = make(amount);
        match self.ledger.submit(&tax_id, transaction) {
            Ok(_) => writeln!(self.output, "\n=== {} completed successfully! ===", transaction.kind())?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        let Some(tax_id) = self.prompt("Tax id: ")? else {
            return Ok(());
        };
        let text = match self.ledger.primary_account(&tax_id) {
            Ok(account) => render_statement(account),
            Err(e) => return self.report(&e),
        };

        write!(self.output, "{text}")?;
        Ok(())
    }

    fn new_customer(&mut self) -> Result<()> {
        let Some(tax_id) = self.prompt("Tax id (digits only): ")? else {
            return Ok(());
        };
        if self.ledger.find_customer(&tax_id).is_some() {
            writeln!(self.output, "\nCustomer already exists!")?;
            return Ok(());
        }

        let Some(full_name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let birth_date = match NaiveDate::parse_from_str(&birth_date, BIRTH_DATE_FORMAT) {
            Ok(date) => date,
            Err(e) => {
                writeln!(self.output, "\n@@@ Invalid birth date: {e} @@@")?;
                return Ok(());
            }
        };
        let Some(address) = self.prompt("Address (street, number - district - city/state): ")? else {
            return Ok(());
        };

        let person = Individual {
            full_name,
            birth_date,
            tax_id,
        };
        match self.ledger.register_individual(person, address) {
            Ok(_) => writeln!(self.output, "\nCustomer created successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn new_account(&mut self) -> Result<()> {
        let Some(tax_id) = self.prompt("Tax id: ")? else {
            return Ok(());
        };
        match self.ledger.open_checking_account(&tax_id) {
            Ok(number) => writeln!(self.output, "\nAccount {number} created successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<()> {
        if self.ledger.accounts().next().is_none() {
            writeln!(self.output, "No accounts registered.")?;
            return Ok(());
        }

        for account in self.ledger.accounts() {
            writeln!(
                self.output,
                "\nBranch:\t\t{}\nAccount:\t{}\nHolder:\t\t{}",
                account.branch(),
                account.number(),
                self.ledger.holder_name(account).unwrap_or_default()
            )?;
        }
        Ok(())
    }

    fn report(&mut self, error: &LedgerError) -> Result<()> {
        match error {
            LedgerError::UnknownCustomer(_) => writeln!(self.output, "\nCustomer not found!")?,
            LedgerError::NoAccount(_) => writeln!(self.output, "\nCustomer has no account!")?,
            LedgerError::DuplicateCustomer(_) => {
                writeln!(self.output, "\nCustomer already exists!")?
            }
            LedgerError::Rejected(reason) => {
                log::warn!("Operation rejected: {reason}");
                writeln!(self.output, "\n@@@ Operation failed! {reason} @@@")?
            }
        }
        Ok(())
    }
}

fn render_statement(account: &Account) -> String {
    let mut text = String::from("\n================ STATEMENT ================\n");
    if account.history().is_empty() {
        text.push_str("No movements on this account.\n");
    }
    for entry in account.history().entries() {
        text.push_str(&format!("\t{} - R$ {}\n", entry.kind, entry.amount));
    }
    text.push_str(&format!("\nBalance: R$ {}\n", account.balance()));
    text.push_str("===========================================\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(ledger: &mut Ledger, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(ledger, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    const REGISTER_ANA: &str = "4\n111\nAna Souza\n01-02-1990\nRua A, 1 - Centro - Recife/PE\n5\n111\n";

    #[test]
    fn test_register_open_and_list() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, &format!("{REGISTER_ANA}6\n7\n"));

        assert!(output.contains("Customer created successfully!"));
        assert!(output.contains("Account 1 created successfully!"));
        assert!(output.contains("Branch:\t\t0001\nAccount:\t1\nHolder:\t\tAna Souza"));
        assert_eq!(ledger.find_customer("111").unwrap().address(), "Rua A, 1 - Centro - Recife/PE");
    }

    #[test]
    fn test_deposit_withdraw_and_statement() {
        let mut ledger = Ledger::new();
        let script = format!("{REGISTER_ANA}1\n111\n100\n2\n111\n50\n2\n111\n1000\n3\n111\n");
        let output = run(&mut ledger, &script);

        assert!(output.contains("=== Deposit completed successfully! ==="));
        assert!(output.contains("=== Withdrawal completed successfully! ==="));
        assert!(output.contains("@@@ Operation failed! amount exceeds the withdrawal limit of 500.00 @@@"));
        assert!(output.contains("\tDeposit - R$ 100.00\n\tWithdrawal - R$ 50.00\n"));
        assert!(output.contains("Balance: R$ 50.00"));
    }

    #[test]
    fn test_empty_statement() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, &format!("{REGISTER_ANA}3\n111\n"));

        assert!(output.contains("No movements on this account."));
        assert!(output.contains("Balance: R$ 0.00"));
    }

    #[test]
    fn test_unknown_customer_and_missing_account() {
        let mut ledger = Ledger::new();
        let output = run(
            &mut ledger,
            "1\n999\n3\n999\n5\n999\n4\n111\nAna\n01-02-1990\nRua A\n2\n111\n10\n",
        );

        assert_eq!(output.matches("Customer not found!").count(), 3);
        assert!(output.contains("Customer has no account!"));
    }

    #[test]
    fn test_duplicate_customer_is_refused_before_asking_details() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, &format!("{REGISTER_ANA}4\n111\n7\n"));

        assert!(output.contains("Customer already exists!"));
        assert_eq!(ledger.customers().count(), 1);
    }

    #[test]
    fn test_bad_inputs_are_reported() {
        let mut ledger = Ledger::new();
        let script = format!("{REGISTER_ANA}1\n111\nten\n1\n111\n-5\n4\n222\nBruno\n1990-01-01\n9\n6\n");
        let output = run(&mut ledger, &script);

        assert!(output.contains("@@@ Operation failed! Amount parsing error: ten @@@"));
        assert!(output.contains("@@@ Operation failed! invalid amount @@@"));
        assert!(output.contains("@@@ Invalid birth date"));
        assert!(output.contains("Invalid option, please select again."));
        assert!(ledger.find_customer("222").is_none());
        assert!(ledger.primary_account("111").unwrap().history().is_empty());
    }

    #[test]
    fn test_list_without_accounts() {
        let mut ledger = Ledger::new();
        let output = run(&mut ledger, "6\n");
        assert!(output.contains("No accounts registered."));
    }
}
