use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

use crate::engine::amount::AmountError;
use crate::engine::{Amount, Individual, Transaction};

pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// One row of a batch script
#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    #[serde(rename = "type")]
    pub typ: RecordType,
    pub tax_id: String,
    pub amount: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Register,
    Open,
    Deposit,
    Withdrawal,
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    #[error("Invalid birth date: {0}")]
    BirthDate(#[from] chrono::ParseError),
}

/// What a record asks the ledger to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { person: Individual, address: String },
    Open { tax_id: String },
    Submit { tax_id: String, transaction: Transaction },
}

impl InputRecord {
    pub fn to_command(&self) -> Result<Command, RecordError> {
        let tax_id = self.tax_id.trim().to_owned();

        match self.typ {
            RecordType::Register => {
                let birth_date = NaiveDate::parse_from_str(
                    required(&self.birth_date, "birth_date")?,
                    BIRTH_DATE_FORMAT,
                )?;
                let person = Individual {
                    full_name: required(&self.name, "name")?.to_owned(),
                    birth_date,
                    tax_id,
                };
                Ok(Command::Register {
                    person,
                    address: required(&self.address, "address")?.to_owned(),
                })
            }
            RecordType::Open => Ok(Command::Open { tax_id }),
            RecordType::Deposit => Ok(Command::Submit {
                tax_id,
                transaction: Transaction::Deposit(self.amount()?),
            }),
            RecordType::Withdrawal => Ok(Command::Submit {
                tax_id,
                transaction: Transaction::Withdrawal(self.amount()?),
            }),
        }
    }

    fn amount(&self) -> Result<Amount, RecordError> {
        Ok(Amount::from_str(required(&self.amount, "amount")?)?)
    }
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, RecordError> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(RecordError::MissingField(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(typ: RecordType) -> InputRecord {
        InputRecord {
            typ,
            tax_id: String::from(" 111 "),
            amount: None,
            name: None,
            birth_date: None,
            address: None,
        }
    }

    #[test]
    fn test_register_record() {
        let mut input = record(RecordType::Register);
        input.name = Some(String::from("Ana Souza"));
        input.birth_date = Some(String::from("01-02-1990"));
        input.address = Some(String::from("Rua A, 1"));

        let command = input.to_command().unwrap();
        assert_eq!(
            command,
            Command::Register {
                person: Individual {
                    full_name: String::from("Ana Souza"),
                    birth_date: NaiveDate::from_ymd_opt(1990, 2, 1).unwrap(),
                    tax_id: String::from("111"),
                },
                address: String::from("Rua A, 1"),
            }
        );
    }

    #[test]
    fn test_register_record_needs_every_field() {
        let mut input = record(RecordType::Register);
        input.birth_date = Some(String::from("01-02-1990"));
        input.address = Some(String::from("Rua A, 1"));
        assert!(matches!(input.to_command(), Err(RecordError::MissingField("name"))));

        input.name = Some(String::from("Ana"));
        input.birth_date = Some(String::from("1990-02-01"));
        assert!(matches!(input.to_command(), Err(RecordError::BirthDate(_))));
    }

    #[test]
    fn test_money_records() {
        let mut input = record(RecordType::Withdrawal);
        assert!(matches!(input.to_command(), Err(RecordError::MissingField("amount"))));

        input.amount = Some(String::from("abc"));
        assert!(matches!(input.to_command(), Err(RecordError::Amount(_))));

        input.amount = Some(String::from("25.5"));
        assert_eq!(
            input.to_command().unwrap(),
            Command::Submit {
                tax_id: String::from("111"),
                transaction: Transaction::Withdrawal(Amount::from_cents(25_50)),
            }
        );

        // Sign is left for the account to judge
        let mut input = record(RecordType::Deposit);
        input.amount = Some(String::from("-3"));
        assert_eq!(
            input.to_command().unwrap(),
            Command::Submit {
                tax_id: String::from("111"),
                transaction: Transaction::Deposit(Amount::from_cents(-3_00)),
            }
        );
    }

    #[test]
    fn test_open_record() {
        assert_eq!(
            record(RecordType::Open).to_command().unwrap(),
            Command::Open {
                tax_id: String::from("111")
            }
        );
    }
}
