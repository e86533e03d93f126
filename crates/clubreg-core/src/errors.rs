use clubreg_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ClubRegError
pub type Result<T> = std::result::Result<T, ClubRegError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every error surfaced by clubreg. Each kind maps
/// to a stable error code usable by tests and by the CLI's exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    /// A required field was blank or a value was outside its enumeration
    InvalidInput,
    /// The targeted event or club does not exist
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, request) for the human-facing message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a club name, event name or store key)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for registry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClubRegError {
    // ===== Validation Errors =====
    /// Club rejected at creation (blank name or district)
    #[error("Invalid club: {reason}")]
    InvalidClub { reason: String },

    /// Event rejected at creation (blank name/date or no categories)
    #[error("Invalid event: {reason}")]
    InvalidEvent { reason: String },

    /// Input did not name one of the fixed districts
    #[error("Unknown district: {input}")]
    UnknownDistrict { input: String },

    /// Input did not name one of the fixed categories
    #[error("Unknown category: {input}")]
    UnknownCategory { input: String },

    /// Sort criteria other than name or district
    #[error("Unknown sort key: {input} (expected 'name' or 'district')")]
    UnknownSortKey { input: String },

    // ===== Lookup Errors =====
    /// No event with this name; the caller has to pick an existing event first
    #[error("Event not found: {event_name}. Select an event first")]
    EventNotFound { event_name: String },

    /// No club with this name in the club collection
    #[error("Club not found: {club_name}")]
    ClubNotFound { club_name: String },
}

impl From<ClubRegError> for ExError {
    fn from(err: ClubRegError) -> Self {
        match err {
            ClubRegError::InvalidClub { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("create_club")
                .with_message(reason),

            ClubRegError::InvalidEvent { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("create_event")
                .with_message(reason),

            ClubRegError::UnknownDistrict { input } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(input)
                .with_message("Unknown district"),

            ClubRegError::UnknownCategory { input } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(input)
                .with_message("Unknown category"),

            ClubRegError::UnknownSortKey { input } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(input)
                .with_message("Unknown sort key, expected 'name' or 'district'"),

            ClubRegError::EventNotFound { event_name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(event_name)
                .with_message("Event not found, select an event first"),

            ClubRegError::ClubNotFound { club_name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(club_name)
                .with_message("Club not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_stable() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
            (ExErrorKind::Config, "ERR_CONFIG"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_op_message_and_entity() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("attach_club")
            .with_entity_id("Camp")
            .with_message("Event not found");

        assert_eq!(
            err.to_string(),
            "[ERR_NOT_FOUND] in operation 'attach_club': Event not found (entity: Camp)"
        );
    }

    #[test]
    fn test_event_not_found_maps_to_not_found_with_guidance() {
        let ex: ExError = ClubRegError::EventNotFound {
            event_name: "Camp".to_string(),
        }
        .into();

        assert_eq!(ex.kind(), ExErrorKind::NotFound);
        assert_eq!(ex.entity_id(), Some("Camp"));
        assert!(ex.message().contains("select an event first"));
    }

    #[test]
    fn test_validation_errors_map_to_invalid_input() {
        let ex: ExError = ClubRegError::InvalidClub {
            reason: "Club name cannot be blank".to_string(),
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
        assert_eq!(ex.op(), Some("create_club"));
    }

    #[test]
    fn test_request_id_is_carried() {
        let rid = RequestId::from_string("req-9".to_string());
        let err = ExError::new(ExErrorKind::Persistence).with_request_id(rid.clone());
        assert_eq!(err.request_id(), Some(&rid));
        assert!(err.to_string().contains("req-9"));
    }
}
