//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent.

use std::{error, fmt};


//------------ EncodeError ---------------------------------------------------

/// An error happened while writing an encoded value.
///
/// All errors reported by a [`Writer`][crate::Writer] signal that the
/// caller composed the value incorrectly or sized the buffer too small.
/// None of them depend on the data being encoded, so retrying the same
/// sequence of calls will fail again in exactly the same way. Once an
/// error was returned, the content of the writer must not be used.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EncodeError {
    kind: ErrorKind,
}

impl EncodeError {
    /// Creates a new error of the given kind.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        EncodeError { kind }
    }

    /// Returns an error for opening more than the allowed nesting depth.
    pub(crate) fn overflow() -> Self {
        Self::new(ErrorKind::StructuralOverflow)
    }

    /// Returns an error for closing without a matching open.
    pub(crate) fn underflow() -> Self {
        Self::new(ErrorKind::StructuralUnderflow)
    }

    /// Returns an error for running out of buffer space.
    pub(crate) fn capacity() -> Self {
        Self::new(ErrorKind::CapacityExceeded)
    }

    /// Returns an error for finishing with unclosed values.
    pub(crate) fn unbalanced() -> Self {
        Self::new(ErrorKind::Unbalanced)
    }

    /// Returns the kind of the error.
    pub fn kind(self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for EncodeError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl error::Error for EncodeError { }


//------------ ErrorKind -----------------------------------------------------

/// The kind of an encoding error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A constructed value was opened while already at the maximum depth.
    StructuralOverflow,

    /// A constructed value was closed without having been opened.
    StructuralUnderflow,

    /// The buffer is too small for the encoded data.
    CapacityExceeded,

    /// The output was requested while constructed values are still open.
    Unbalanced,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ErrorKind::StructuralOverflow => "maximum nesting depth exceeded",
            ErrorKind::StructuralUnderflow => "close without matching open",
            ErrorKind::CapacityExceeded => "buffer capacity exceeded",
            ErrorKind::Unbalanced => "unclosed constructed values",
        })
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            EncodeError::overflow().kind(), ErrorKind::StructuralOverflow
        );
        assert_eq!(
            EncodeError::underflow().kind(), ErrorKind::StructuralUnderflow
        );
        assert_eq!(
            EncodeError::capacity().kind(), ErrorKind::CapacityExceeded
        );
        assert_eq!(EncodeError::unbalanced().kind(), ErrorKind::Unbalanced);
        assert_eq!(
            EncodeError::from(ErrorKind::CapacityExceeded),
            EncodeError::capacity()
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            EncodeError::capacity().to_string(), "buffer capacity exceeded"
        );
    }
}
