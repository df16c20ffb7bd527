//! Line-oriented command session over a ledger service.
//!
//! Each input line is one command, parsed with clap in multicall mode so the
//! first word picks the subcommand. Results are written as pretty JSON.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use wallet_hex::LedgerService;
use wallet_types::{AccountId, FavoriteId, LedgerRepository, Money, PaymentId, Phone};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new account
    Register {
        /// Phone number of the account holder
        phone: String,
    },
    /// Deposit funds into an account
    Deposit {
        account: String,
        /// Amount in minor units
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Pay from an account balance
    Pay {
        account: String,
        /// Amount in minor units
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Payment category (may contain spaces)
        #[arg(required = true, num_args = 1..)]
        category: Vec<String>,
    },
    /// Show an account by ID
    Account { id: String },
    /// Show an account by phone number
    AccountByPhone { phone: String },
    /// List all accounts
    Accounts,
    /// Show a payment by ID
    Payment { id: String },
    /// List payments of an account
    Payments { account: String },
    /// Reject a payment and refund its amount
    Reject { payment: String },
    /// Pay again with the values of an earlier payment
    Repeat { payment: String },
    /// Save a payment as a named favorite
    Favorite {
        payment: String,
        /// Favorite name (may contain spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Show a favorite by ID
    FavoriteShow { id: String },
    /// List favorites of an account
    Favorites { account: String },
    /// Make a payment from a favorite
    PayFavorite { favorite: String },
    /// End the session
    #[command(alias = "quit")]
    Exit,
}

/// What a single command produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print on stdout
    Output(String),
    /// The session should stop
    Exit,
}

/// Counters for a finished session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub executed: usize,
    pub failed: usize,
}

/// Opens a script file for [`Session::run`].
pub fn script_reader(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open script {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn parse_account_id(s: &str) -> Result<AccountId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Account not found: {}", s))
}

fn parse_payment_id(s: &str) -> Result<PaymentId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Payment not found: {}", s))
}

fn parse_favorite_id(s: &str) -> Result<FavoriteId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Favorite not found: {}", s))
}

fn json<T: Serialize>(value: &T) -> Result<Outcome> {
    Ok(Outcome::Output(serde_json::to_string_pretty(value)?))
}

fn ok() -> Result<Outcome> {
    Ok(Outcome::Output("ok".to_string()))
}

/// An interactive or scripted session driving one ledger service.
pub struct Session<R: LedgerRepository> {
    service: LedgerService<R>,
}

impl<R: LedgerRepository> Session<R> {
    pub fn new(service: LedgerService<R>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &LedgerService<R> {
        &self.service
    }

    /// Runs one command line. Blank lines and `#` comments produce no output.
    pub fn execute(&mut self, line: &str) -> Result<Option<Outcome>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let parsed = match Line::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp => {
                return Ok(Some(Outcome::Output(e.render().to_string())));
            }
            Err(e) => anyhow::bail!(e.render().to_string().trim_end().to_string()),
        };

        self.dispatch(parsed.command).map(Some)
    }

    fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        let service = &mut self.service;

        match command {
            Command::Register { phone } => json(&service.register_account(Phone::new(phone))?),
            Command::Deposit { account, amount } => {
                service.deposit(parse_account_id(&account)?, Money::new(amount))?;
                ok()
            }
            Command::Pay {
                account,
                amount,
                category,
            } => json(&service.pay(
                parse_account_id(&account)?,
                Money::new(amount),
                category.join(" ").into(),
            )?),
            Command::Account { id } => json(&service.find_account_by_id(parse_account_id(&id)?)?),
            Command::AccountByPhone { phone } => {
                json(&service.find_account_by_phone(&Phone::new(phone))?)
            }
            Command::Accounts => json(&service.list_accounts()?),
            Command::Payment { id } => json(&service.find_payment_by_id(parse_payment_id(&id)?)?),
            Command::Payments { account } => {
                json(&service.list_payments(parse_account_id(&account)?)?)
            }
            Command::Reject { payment } => {
                service.reject(parse_payment_id(&payment)?)?;
                ok()
            }
            Command::Repeat { payment } => json(&service.repeat(parse_payment_id(&payment)?)?),
            Command::Favorite { payment, name } => json(
                &service.favorite_payment(parse_payment_id(&payment)?, name.join(" "))?,
            ),
            Command::FavoriteShow { id } => {
                json(&service.find_favorite_by_id(parse_favorite_id(&id)?)?)
            }
            Command::Favorites { account } => {
                json(&service.list_favorites(parse_account_id(&account)?)?)
            }
            Command::PayFavorite { favorite } => {
                json(&service.pay_from_favorite(parse_favorite_id(&favorite)?)?)
            }
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    /// Executes every line of `input`, printing results to `out` and
    /// failures to `err`.
    ///
    /// With `fail_fast` the session stops at the first failing command.
    pub fn run<I, O, E>(
        &mut self,
        input: I,
        out: &mut O,
        err: &mut E,
        fail_fast: bool,
    ) -> Result<Summary>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        let mut summary = Summary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line.context("Failed to read command")?;

            match self.execute(&line) {
                Ok(None) => continue,
                Ok(Some(Outcome::Exit)) => break,
                Ok(Some(Outcome::Output(text))) => {
                    summary.executed += 1;
                    writeln!(out, "{}", text)?;
                }
                Err(e) => {
                    summary.executed += 1;
                    summary.failed += 1;
                    tracing::debug!(line = index + 1, error = %e, "command failed");
                    writeln!(err, "error: {}", e)?;
                    if fail_fast {
                        break;
                    }
                }
            }
        }

        out.flush()?;
        Ok(summary)
    }
}
