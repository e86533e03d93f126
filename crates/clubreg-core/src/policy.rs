//! Deletion confirmation policy
//!
//! Club deletion asks for confirmation before anything is removed; event
//! deletion does not. The question is injected so the CLI can prompt on a
//! terminal while tests and scripted runs answer up front.

/// Decides whether a pending club deletion goes ahead
pub trait DeletionConfirmer {
    /// Ask whether every club named `club_name` should be deleted
    fn confirm_club_deletion(&self, club_name: &str) -> bool;
}

/// Confirms every deletion (`--yes`)
///
/// ```
/// use clubreg_core::policy::{AlwaysConfirm, DeletionConfirmer};
///
/// assert!(AlwaysConfirm.confirm_club_deletion("Alpha"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl DeletionConfirmer for AlwaysConfirm {
    fn confirm_club_deletion(&self, _club_name: &str) -> bool {
        true
    }
}

/// Declines every deletion
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl DeletionConfirmer for NeverConfirm {
    fn confirm_club_deletion(&self, _club_name: &str) -> bool {
        false
    }
}
