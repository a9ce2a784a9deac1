//! Error handling and result types for RedBlackTreeMap operations.
//!
//! The tree core reports absence through `Option`/`bool`; the error type is
//! reserved for allocation failures, the `Result`-flavoured convenience APIs
//! and the structural checks in `validation`.

use thiserror::Error;

/// Error type for red-black tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedBlackTreeError {
    /// Key not found in the tree.
    #[error("Key not found in tree")]
    KeyNotFound,
    /// A node slot could not be allocated.
    #[error("Allocation error: {0}")]
    AllocationError(String),
    /// Node links no longer describe a tree.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
    /// One of the red-black coloring rules is broken.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    /// Arena bookkeeping disagrees with the tree structure.
    #[error("Arena error: {0}")]
    ArenaError(String),
}

impl RedBlackTreeError {
    /// Create an AllocationError with context
    pub fn allocation_error(resource: &str, reason: &str) -> Self {
        Self::AllocationError(format!("Failed to allocate {}: {}", resource, reason))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Create an InvariantViolation error naming the broken rule
    pub fn invariant_violation(rule: &str, details: &str) -> Self {
        Self::InvariantViolation(format!("{}: {}", rule, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Check if this error is an allocation failure
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationError(_))
    }

    /// Check if this error reports a structural problem rather than a lookup miss
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::CorruptedTree(_) | Self::InvariantViolation(_) | Self::ArenaError(_)
        )
    }
}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, RedBlackTreeError>;

/// Public result type for tree operations that may fail
pub type TreeMapResult<T> = Result<T, RedBlackTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, RedBlackTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, RedBlackTreeError>;

/// Result type for tree construction and validation
pub type InitResult<T> = Result<T, RedBlackTreeError>;

/// Result extension trait for attaching context to tree errors
pub trait TreeResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> TreeMapResult<T>;

    /// Prefix the error message with the name of the failing operation
    fn with_operation(self, operation: &str) -> TreeMapResult<T>;

    /// Log the error and continue with the default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> TreeResultExt<T> for Result<T, RedBlackTreeError> {
    fn with_context(self, context: &str) -> TreeMapResult<T> {
        self.map_err(|e| match e {
            RedBlackTreeError::KeyNotFound => RedBlackTreeError::KeyNotFound,
            RedBlackTreeError::AllocationError(msg) => {
                RedBlackTreeError::AllocationError(format!("{}: {}", context, msg))
            }
            RedBlackTreeError::CorruptedTree(msg) => {
                RedBlackTreeError::corrupted_tree(context, &msg)
            }
            RedBlackTreeError::InvariantViolation(msg) => {
                RedBlackTreeError::invariant_violation(context, &msg)
            }
            RedBlackTreeError::ArenaError(msg) => RedBlackTreeError::arena_error(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> TreeMapResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "red-black tree operation failed, using default");
                T::default()
            }
        }
    }
}
