use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The aggregation engine itself never fails; these kinds cover the
/// boundaries around it (history retrieval, snapshot loading, config).
/// Each kind maps to a stable error code for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,

    // Integration/IO
    Serialization,
    ExternalService,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity name, message) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity name context
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for PatchLens boundaries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchLensError {
    /// Entity lookup was requested with an empty or blank name
    #[error("Entity name must not be empty")]
    EmptyEntityName,

    /// Patch snapshot payload could not be decoded
    #[error("Malformed patch snapshots: {reason}")]
    MalformedSnapshots { reason: String },

    /// Engine configuration payload could not be decoded
    #[error("Malformed engine config: {reason}")]
    MalformedConfig { reason: String },

    /// An external history source failed to answer
    #[error("History source unavailable: {reason}")]
    SourceUnavailable { reason: String },
}

impl From<PatchLensError> for ExError {
    fn from(err: PatchLensError) -> Self {
        let message = err.to_string();
        match err {
            PatchLensError::EmptyEntityName => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            PatchLensError::MalformedSnapshots { .. } | PatchLensError::MalformedConfig { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            PatchLensError::SourceUnavailable { .. } => {
                ExError::new(ExErrorKind::ExternalService).with_message(message)
            }
        }
    }
}
