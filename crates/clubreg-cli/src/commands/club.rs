//! Club commands

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::{Args, Subcommand};
use clubreg_core::errors::ExError;
use clubreg_core::model::{resolve_district, DISTRICTS};
use clubreg_core::queries::SortKey;
use clubreg_core::{AlwaysConfirm, ClubDraft, DeletionConfirmer, Outcome};

use super::{print_clubs, CliRegistry, CommandResult};

#[derive(Debug, Args)]
pub struct ClubArgs {
    #[command(subcommand)]
    pub command: ClubCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClubCommand {
    /// Register a club
    Add(AddArgs),
    /// List clubs, optionally filtered and sorted
    List(ListArgs),
    /// Delete every club with this name
    Remove(RemoveArgs),
    /// Count clubs with each sub-group
    Stats(StatsArgs),
    /// Show the district list
    Districts,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    /// District number (1-10) or label
    #[arg(long)]
    pub district: String,

    #[arg(long)]
    pub aventureros: Option<String>,

    #[arg(long)]
    pub conquistadores: Option<String>,

    #[arg(long)]
    pub guias: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the club name
    #[arg(long, default_value = "")]
    pub search: String,

    /// name | district
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(long, default_value = "")]
    pub search: String,
}

pub fn execute(args: ClubArgs, registry: &mut CliRegistry) -> CommandResult {
    match args.command {
        ClubCommand::Add(add_args) => execute_add(add_args, registry),
        ClubCommand::List(list_args) => execute_list(list_args, registry),
        ClubCommand::Remove(remove_args) => execute_remove(remove_args, registry),
        ClubCommand::Stats(stats_args) => {
            let stats = registry.club_stats(&stats_args.search);
            println!("Clubs: {}", stats.total);
            println!("  with Aventureros: {}", stats.aventureros);
            println!("  with Conquistadores: {}", stats.conquistadores);
            println!("  with Guías: {}", stats.guias);
            Ok(())
        }
        ClubCommand::Districts => {
            for district in DISTRICTS {
                println!("{}", district);
            }
            Ok(())
        }
    }
}

fn execute_add(args: AddArgs, registry: &mut CliRegistry) -> CommandResult {
    // A blank district is left for the registry to reject
    let district = if args.district.trim().is_empty() {
        args.district
    } else {
        resolve_district(&args.district)
            .map_err(ExError::from)?
            .to_string()
    };

    let mut draft = ClubDraft::new(args.name, district);
    draft.aventureros = args.aventureros;
    draft.conquistadores = args.conquistadores;
    draft.guias = args.guias;

    let club = registry.add_club(draft)?;
    println!("Club added: {} ({})", club.name, club.district);
    Ok(())
}

fn execute_list(args: ListArgs, registry: &mut CliRegistry) -> CommandResult {
    let sort = args
        .sort
        .as_deref()
        .map(SortKey::from_str)
        .transpose()
        .map_err(ExError::from)?;

    print_clubs(&registry.search_clubs(&args.search, sort));
    Ok(())
}

fn execute_remove(args: RemoveArgs, registry: &mut CliRegistry) -> CommandResult {
    let confirmer: &dyn DeletionConfirmer = if args.yes {
        &AlwaysConfirm
    } else {
        &PromptConfirm
    };

    match registry.remove_club(&args.name, confirmer)? {
        Outcome::ClubsDeleted(count) => {
            println!("Deleted {} club(s) named '{}'", count, args.name);
        }
        Outcome::DeletionDeclined => println!("Deletion cancelled"),
        _ => {}
    }
    Ok(())
}

/// Asks on stderr and reads the answer from stdin; anything but yes,
/// including an I/O failure, declines
struct PromptConfirm;

impl DeletionConfirmer for PromptConfirm {
    fn confirm_club_deletion(&self, club_name: &str) -> bool {
        ask_deletion(club_name, &mut io::stdin().lock(), &mut io::stderr()).unwrap_or(false)
    }
}

fn ask_deletion(
    club_name: &str,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> io::Result<bool> {
    write!(prompt, "Delete every club named '{}'? [y/N] ", club_name)?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}
