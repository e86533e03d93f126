//! Event commands

use std::str::FromStr;

use clap::{Args, Subcommand};
use clubreg_core::errors::ExError;
use clubreg_core::{Category, EventDraft, Outcome};

use super::{print_clubs, CliRegistry, CommandResult};

#[derive(Debug, Args)]
pub struct EventArgs {
    #[command(subcommand)]
    pub command: EventCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// Create an event
    Add(AddArgs),
    /// List events
    List,
    /// Show one event with its clubs
    Show { name: String },
    /// Delete every event with this name
    Remove { name: String },
    /// Delete all events
    Clear,
    /// Attach a snapshot of a club to an event
    Attach { event: String, club: String },
    /// Remove a club from an event
    Detach { event: String, club: String },
    /// List the clubs attending an event
    Attendance(AttendanceArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    /// Free-text date
    #[arg(long)]
    pub date: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Aventureros | Conquistadores | Guías | Zona (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Name of a registered club to attach (repeatable)
    #[arg(long = "club")]
    pub clubs: Vec<String>,
}

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    pub event: String,

    #[arg(long, default_value = "")]
    pub search: String,
}

pub fn execute(args: EventArgs, registry: &mut CliRegistry) -> CommandResult {
    match args.command {
        EventCommand::Add(add_args) => execute_add(add_args, registry),
        EventCommand::List => {
            if registry.events().is_empty() {
                println!("No events found");
            }
            for event in registry.events() {
                println!(
                    "{:<24} {:<12} {:<40} {} club(s)",
                    event.event_name,
                    event.event_date,
                    event.category_labels(),
                    event.club_count()
                );
            }
            Ok(())
        }
        EventCommand::Show { name } => {
            let event = registry.find_event(&name)?;
            println!("Event: {}", event.event_name);
            println!("Date: {}", event.event_date);
            if let Some(description) = &event.event_description {
                println!("Description: {}", description);
            }
            println!("Categories: {}", event.category_labels());
            println!("Clubs ({}):", event.club_count());
            for club in &event.clubs {
                println!("  {} ({})", club.name, club.district);
            }
            Ok(())
        }
        EventCommand::Remove { name } => {
            let count = registry.remove_event(&name)?;
            println!("Deleted {} event(s) named '{}'", count, name);
            Ok(())
        }
        EventCommand::Clear => {
            let count = registry.clear_events()?;
            println!("Cleared {} event(s)", count);
            Ok(())
        }
        EventCommand::Attach { event, club } => {
            match registry.attach_club(&event, &club)? {
                Outcome::ClubAlreadyAttached => {
                    eprintln!("Warning: club '{}' is already attached to '{}'", club, event);
                }
                _ => println!("Attached '{}' to '{}'", club, event),
            }
            Ok(())
        }
        EventCommand::Detach { event, club } => {
            let count = registry.detach_club(&event, &club)?;
            println!("Removed {} club(s) named '{}' from '{}'", count, club, event);
            Ok(())
        }
        EventCommand::Attendance(attendance_args) => {
            let clubs = registry.attendance(&attendance_args.event, &attendance_args.search)?;
            print_clubs(&clubs);
            Ok(())
        }
    }
}

fn execute_add(args: AddArgs, registry: &mut CliRegistry) -> CommandResult {
    let mut draft = EventDraft::new(args.name, args.date);
    if let Some(description) = args.description {
        draft = draft.with_description(description);
    }
    for input in &args.categories {
        draft = draft.with_category(Category::from_str(input).map_err(ExError::from)?);
    }
    for club_name in &args.clubs {
        let club = registry.find_club(club_name)?.clone();
        draft = draft.with_club(club);
    }

    let event = registry.add_event(draft)?;
    println!(
        "Event added: {} ({}) with {} club(s)",
        event.event_name,
        event.event_date,
        event.club_count()
    );
    Ok(())
}
