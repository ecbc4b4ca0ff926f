use petclinic_core_types::EntityKind;
use thiserror::Error;

/// Result type alias using ClinicError
pub type Result<T> = std::result::Result<T, ClinicError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and external responses. Lookup misses are not
/// part of this taxonomy at the CRUD layer (they are `None` / empty results);
/// `NotFound` exists for callers that must escalate an absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,
    MissingIdentity,
    IdentityExhausted,

    // Backing store
    BackingFailure,

    // Fixtures / configuration
    SeedValidation,
    UnknownReference,
    Serialization,
    Config,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::MissingIdentity => "ERR_MISSING_IDENTITY",
            ExErrorKind::IdentityExhausted => "ERR_IDENTITY_EXHAUSTED",
            ExErrorKind::BackingFailure => "ERR_BACKING_FAILURE",
            ExErrorKind::SeedValidation => "ERR_SEED_VALIDATION",
            ExErrorKind::UnknownReference => "ERR_UNKNOWN_REFERENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Provides classification fields for programmatic handling and context for
/// debugging. Built from a [`ClinicError`] at reporting boundaries (logging,
/// CLI output).
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_kind: Option<EntityKind>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_kind: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity kind context
    pub fn with_entity_kind(mut self, kind: EntityKind) -> Self {
        self.entity_kind = Some(kind);
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
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

    pub fn entity_kind(&self) -> Option<EntityKind> {
        self.entity_kind
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
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
        if let Some(kind) = self.entity_kind {
            write!(f, " (entity_kind: {})", kind)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for clinic operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClinicError {
    /// A non-in-memory backing implementation failed; carried to the caller untouched
    #[error("Backing store failure: {message}")]
    Backing { message: String },

    /// A collaborator returned an entity without the identity the caller needs
    #[error("{kind} has no identity")]
    MissingIdentity { kind: EntityKind },

    /// Every identity of the store's identity type is taken
    #[error("No free {kind} identity left")]
    IdentityExhausted { kind: EntityKind },

    /// Seed fixture is structurally valid YAML but violates a fixture rule
    #[error("Seed validation failed: {reason}")]
    SeedValidation { reason: String },

    /// Seed fixture could not be parsed
    #[error("Seed parse error: {message}")]
    SeedParse { message: String },

    /// Seed fixture references a name that was never declared
    #[error("Unknown {kind} reference: {name}")]
    UnknownReference { kind: EntityKind, name: String },

    /// Configuration could not be parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Filesystem access failed while loading a fixture or configuration
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl ClinicError {
    /// Shorthand for a backing failure
    pub fn backing(message: impl Into<String>) -> Self {
        ClinicError::Backing {
            message: message.into(),
        }
    }

    /// Build a seed validation error
    pub fn seed_validation(reason: impl Into<String>) -> Self {
        ClinicError::SeedValidation {
            reason: reason.into(),
        }
    }
}

/// Conversion from ClinicError to ExError
impl From<ClinicError> for ExError {
    fn from(err: ClinicError) -> Self {
        match err {
            ClinicError::Backing { message } => {
                ExError::new(ExErrorKind::BackingFailure).with_message(message)
            }

            ClinicError::MissingIdentity { kind } => ExError::new(ExErrorKind::MissingIdentity)
                .with_entity_kind(kind)
                .with_message("Entity has no identity"),

            ClinicError::IdentityExhausted { kind } => {
                ExError::new(ExErrorKind::IdentityExhausted)
                    .with_op("save")
                    .with_entity_kind(kind)
                    .with_message("Identity range exhausted")
            }

            ClinicError::SeedValidation { reason } => ExError::new(ExErrorKind::SeedValidation)
                .with_op("load_seed")
                .with_message(reason),

            ClinicError::SeedParse { message } => ExError::new(ExErrorKind::Serialization)
                .with_op("load_seed")
                .with_message(message),

            ClinicError::UnknownReference { kind, name } => {
                ExError::new(ExErrorKind::UnknownReference)
                    .with_op("load_seed")
                    .with_entity_kind(kind)
                    .with_entity_id(name)
                    .with_message("Reference was never declared")
            }

            ClinicError::Config { message } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),

            ClinicError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ClinicError {
    fn from(err: serde_yaml::Error) -> Self {
        ClinicError::SeedParse {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ClinicError {
    fn from(err: toml::de::Error) -> Self {
        ClinicError::Config {
            message: err.to_string(),
        }
    }
}
