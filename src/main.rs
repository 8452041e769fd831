use anyhow::{Context, Result};
use crab_bank::batch;
use crab_bank::engine::{Amount, CheckingPolicy, Ledger};
use crab_bank::shell::Shell;
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fs::File, io};

const WITHDRAWAL_LIMIT_VAR: &str = "CRAB_BANK_WITHDRAWAL_LIMIT";
const MAX_WITHDRAWALS_VAR: &str = "CRAB_BANK_MAX_WITHDRAWALS";

fn main() -> Result<()> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    let policy = policy_from_env()?;
    log::debug!("Checking policy: {policy:?}");
    let mut ledger = Ledger::with_policy(policy);

    match env::args_os().nth(1) {
        Some(file_path) => {
            let path = PathBuf::from(file_path);
            log::debug!("Extracted filepath fom args: {path:?}");

            log::debug!("Script replay: Starting");
            let file = File::open(&path).with_context(|| format!("cannot open {path:?}"))?;
            batch::replay(file, &mut ledger)?;
            log::debug!("Script replay: Done");

            log::debug!("Exporting account snapshots to stdout: Started");
            batch::write_snapshots(&ledger, io::stdout().lock())?;
            log::debug!("Exporting account snapshots to stdout: Done");
        }
        None => {
            log::debug!("No script given, starting interactive shell");
            Shell::new(&mut ledger, io::stdin().lock(), io::stdout().lock()).run()?;
        }
    }

    log::debug!("Application finished");

    Ok(())
}

fn policy_from_env() -> Result<CheckingPolicy> {
    let mut policy = CheckingPolicy::default();

    if let Ok(limit) = env::var(WITHDRAWAL_LIMIT_VAR) {
        policy.withdrawal_limit =
            Amount::from_str(&limit).with_context(|| format!("invalid {WITHDRAWAL_LIMIT_VAR}"))?;
    }
    if let Ok(max) = env::var(MAX_WITHDRAWALS_VAR) {
        policy.max_withdrawals = max
            .trim()
            .parse()
            .with_context(|| format!("invalid {MAX_WITHDRAWALS_VAR}"))?;
    }

    Ok(policy)
}
