use std::fmt;

/// Failure of a single-paragraph splice. Offsets that do not resolve are
/// reported here rather than panicking; callers that chain edits are free to
/// treat these as "nothing to do".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceError {
    OffsetOutOfRange { offset: usize, len: usize },
    InvalidRange { start: usize, end: usize },
    UnresolvedRun { offset: usize },
    Container(ContainerError),
}

impl fmt::Display for SpliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpliceError::OffsetOutOfRange { offset, len } => {
                write!(f, "offset {offset} out of range for text of length {len}")
            }
            SpliceError::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} > end {end}")
            }
            SpliceError::UnresolvedRun { offset } => {
                write!(f, "offset {offset} does not fall inside any run")
            }
            SpliceError::Container(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SpliceError {}

impl From<ContainerError> for SpliceError {
    fn from(value: ContainerError) -> Self {
        SpliceError::Container(value)
    }
}

/// A lifecycle primitive of the backing container refused an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    ParagraphOutOfRange { index: usize, count: usize },
    RunOutOfRange { index: usize, count: usize },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::ParagraphOutOfRange { index, count } => {
                write!(f, "paragraph index out of bounds: {index} >= {count}")
            }
            ContainerError::RunOutOfRange { index, count } => {
                write!(f, "run index out of bounds: {index} > {count}")
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// Failure of a document-level operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    ParagraphOutOfRange { index: usize, count: usize },
    InvalidParagraphRange { start: usize, end: usize },
    Splice(SpliceError),
    Container(ContainerError),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::ParagraphOutOfRange { index, count } => {
                write!(f, "paragraph {index} is out of bounds (document has {count})")
            }
            DocumentError::InvalidParagraphRange { start, end } => {
                write!(f, "start paragraph {start} comes after end paragraph {end}")
            }
            DocumentError::Splice(err) => write!(f, "{err}"),
            DocumentError::Container(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Splice(err) => Some(err),
            DocumentError::Container(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpliceError> for DocumentError {
    fn from(value: SpliceError) -> Self {
        DocumentError::Splice(value)
    }
}

impl From<ContainerError> for DocumentError {
    fn from(value: ContainerError) -> Self {
        DocumentError::Container(value)
    }
}
