//! Error types for dataset loading and view computation.
//!
//! Load-time failures (`Schema`, `Io`, `Configuration`) are fatal to startup.
//! `UnrecognizedMonth` and `DivisionUndefined` are local to a single view
//! computation and never leave the process in a partially-filtered state.

use std::fmt;

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Structured location of a schema violation.
///
/// Provides the table, line and column where a load-time check failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaContext {
    /// The table being loaded (e.g., "teams", "players", "monthly")
    pub table: Option<String>,
    /// 1-based line in the source file, header included
    pub line: Option<u64>,
    /// The offending column, if known
    pub column: Option<String>,
    /// Additional details about the violation
    pub details: Option<String>,
}

impl SchemaContext {
    /// Create a new context for a table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Default::default()
        }
    }

    /// Set the source line.
    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the column name.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for SchemaContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref table) = self.table {
            parts.push(format!("table={}", table));
        }
        if let Some(line) = self.line {
            parts.push(format!("line={}", line));
        }
        if let Some(ref column) = self.column {
            parts.push(format!("column={}", column));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for the dashboard view model and its loaders.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A required column is absent or a cell has the wrong type or range.
    #[error("Schema error: {message} {context}")]
    Schema {
        message: String,
        context: SchemaContext,
    },

    /// A month label outside the canonical season ordering.
    #[error("Unrecognized month '{label}' for team {team}")]
    UnrecognizedMonth { label: String, team: String },

    /// Win percentage requested for a team with zero games played.
    #[error("Win percentage undefined for {team}: no games played")]
    DivisionUndefined { team: String },

    /// A dataset file could not be opened or read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DashboardError {
    /// Create a schema error with context.
    pub fn schema(message: impl Into<String>, context: SchemaContext) -> Self {
        DashboardError::Schema {
            message: message.into(),
            context,
        }
    }

    /// Check whether this error is a schema violation.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, DashboardError::Schema { .. })
    }

    /// Errors that abort startup rather than a single view computation.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DashboardError::Schema { .. }
                | DashboardError::Io { .. }
                | DashboardError::Configuration(_)
        )
    }

    /// Get the schema context if this is a schema error.
    pub fn schema_context(&self) -> Option<&SchemaContext> {
        match self {
            DashboardError::Schema { context, .. } => Some(context),
            _ => None,
        }
    }
}
