//! hearth - operator tool for the invite-gated admission backend.
//!
//! # Examples
//!
//! ```bash
//! # First-run: create the initial administrator
//! hearth bootstrap --handle root --contact root@example.com --password s3cret
//!
//! # Issue an invite bound to an address
//! hearth issue --issuer root --contact friend@example.com
//!
//! # See who is registered
//! hearth list
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod logger;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::config::Config;
use crate::error::{CliError, Result as CliResult};

use hearth_admission::{AdmissionEngine, Argon2Hasher, LogNotifier, RedemptionRequest};
use hearth_core::InviteCode;
use hearth_db::AccountRepository;

use std::process::ExitCode;
use std::sync::Arc;

use chrono::{Duration, Utc};
use clap::Parser;
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.log_level, config.log_colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> CliResult<()> {
    let db_path = cli.db.as_deref().unwrap_or(config.db_path.as_path());
    let pool = hearth_db::connect(db_path).await?;

    let engine = AdmissionEngine::with_validity(
        pool.clone(),
        Arc::new(Argon2Hasher),
        Arc::new(LogNotifier),
        Duration::days(config.invite_validity_days),
    );
    let accounts = AccountRepository::new(pool);

    match cli.command {
        Commands::Bootstrap {
            handle,
            contact,
            password,
            display_name,
        } => {
            let profile = engine
                .bootstrap_admin(&handle, &contact, &password, display_name)
                .await?;
            println!("Administrator '{}' created (id {})", profile.handle, profile.id);
        }

        Commands::Promote { actor, target } => {
            let actor_id = lookup_handle(&accounts, &actor).await?;
            engine.promote(actor_id, &target).await?;
            println!("'{target}' is now an administrator");
        }

        Commands::Issue { issuer, contact } => {
            let issuer_id = lookup_handle(&accounts, &issuer).await?;
            let issued = engine.issue_invite(issuer_id, contact.as_deref()).await?;

            // The plaintext code is shown exactly once.
            println!("Invite code: {}", issued.invite.code);
            println!("Expires:     {}", issued.invite.expires_at);
            match issued.notified {
                Some(true) => {
                    println!("Sent to:     {}", issued.invite.bound_contact.as_deref().unwrap_or(""));
                }
                Some(false) => {
                    println!("Delivery failed; relay the code to the invitee yourself.");
                }
                None => {}
            }
        }

        Commands::Invites { issuer } => {
            let issuer_id = lookup_handle(&accounts, &issuer).await?;
            let ledger = engine.list_invites(issuer_id).await?;
            print_invites(&ledger);
        }

        Commands::Register {
            code,
            handle,
            contact,
            password,
            display_name,
        } => {
            let profile = engine
                .redeem_invite(&RedemptionRequest {
                    code,
                    handle,
                    contact,
                    password,
                    display_name,
                })
                .await?;
            println!("Welcome, '{}' (id {})", profile.handle, profile.id);
        }

        Commands::List { json } => {
            let summaries = engine.list_accounts().await?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summaries).unwrap_or_default()
                );
            } else {
                print_accounts(&summaries);
            }
        }

        Commands::Rename { current, new } => {
            engine.rename_account(&current, &new).await?;
            println!("Account '{current}' renamed to '{new}'");
        }
    }

    Ok(())
}

async fn lookup_handle(accounts: &AccountRepository, handle: &str) -> CliResult<Uuid> {
    accounts
        .find_by_handle(handle)
        .await?
        .map(|account| account.id)
        .ok_or_else(|| CliError::UnknownHandle {
            handle: handle.to_string(),
        })
}

fn print_accounts(summaries: &[hearth_core::AccountSummary]) {
    println!("{:<20} {:<30} {}", "HANDLE", "CONTACT", "ROLE");
    println!("{}", "-".repeat(60));
    for summary in summaries {
        let role = if summary.is_admin { "ADMIN" } else { "member" };
        println!("{:<20} {:<30} {}", summary.handle, summary.contact, role);
    }
    println!("{} account(s)", summaries.len());
}

fn print_invites(ledger: &[InviteCode]) {
    let now = Utc::now();
    println!("{:<18} {:<30} {}", "CODE", "BOUND CONTACT", "STATE");
    println!("{}", "-".repeat(60));
    for invite in ledger {
        let state = if invite.is_used() {
            "used"
        } else if invite.is_expired(now) {
            "expired"
        } else {
            "open"
        };
        println!(
            "{:<18} {:<30} {}",
            invite.code,
            invite.bound_contact.as_deref().unwrap_or("-"),
            state
        );
    }
    println!("{} invite(s)", ledger.len());
}
