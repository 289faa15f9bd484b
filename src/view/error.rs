use std::fmt;

/// Mutation attempted through the read-only table protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewOperation {
    /// Indexed write (`assign`)
    Write,
    /// Indexed delete (`unset`)
    Delete,
}

impl fmt::Display for ViewOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewOperation::Write => f.write_str("write"),
            ViewOperation::Delete => f.write_str("delete"),
        }
    }
}

/// Read-only view error
///
/// Returned by [`EnvTable::assign`](super::EnvTable::assign) and
/// [`EnvTable::unset`](super::EnvTable::unset) on an
/// [`EnvView`](super::EnvView). The snapshot is never altered; callers must
/// not attempt mutation at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImmutableViewError {
    /// Key the caller tried to change
    pub key: String,
    /// What the caller tried to do with it
    pub operation: ViewOperation,
}

impl ImmutableViewError {
    pub(crate) fn new(key: &str, operation: ViewOperation) -> Self {
        Self {
            key: key.to_string(),
            operation,
        }
    }
}

impl fmt::Display for ImmutableViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment view is read-only: cannot {} key '{}'. \
            Build a new view from a modified map instead.",
            self.operation, self.key
        )
    }
}

impl std::error::Error for ImmutableViewError {}
