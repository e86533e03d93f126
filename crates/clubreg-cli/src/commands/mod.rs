//! Subcommand implementations

pub mod club;
pub mod event;

use clubreg_core::Club;
use clubreg_engine::Registry;
use clubreg_store::KvStore;

/// Registry over whichever backend was configured
pub type CliRegistry = Registry<Box<dyn KvStore>>;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Print a club view as aligned rows
pub(crate) fn print_clubs(clubs: &[&Club]) {
    if clubs.is_empty() {
        println!("No clubs found");
        return;
    }
    for club in clubs {
        println!(
            "{:<24} {:<26} aventureros: {:<16} conquistadores: {:<16} guias: {}",
            club.name, club.district, club.aventu, club.conquis, club.guia
        );
    }
}
