use std::fmt;

/// Configuration errors raised synchronously by [`crate::SheetController`].
///
/// Neither variant is recoverable from inside the controller; the caller
/// fixes the configuration and rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// A setter received a value of the wrong kind.
    InvalidView { got: &'static str },
    /// Navigation chrome was requested but no content view is set.
    ViewUndefined,
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::InvalidView { got } => {
                write!(f, "sheet content must be a composite view value, got {got}")
            }
            SheetError::ViewUndefined => {
                write!(f, "call set_view(view) before init() when a navigation bar is configured")
            }
        }
    }
}

impl std::error::Error for SheetError {}
