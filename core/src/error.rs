use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by loaders and `from_dict` implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub enum Error {
    Message(String),
    /// Unknown encoder or decoder name.
    InvalidCoding(String),
    /// Type identifier that maps to neither a factory nor a custom loader.
    UnresolvedType(String),
    /// Tree shape that the codec or the tagging scheme cannot accept.
    MalformedPayload(String),
    ReconstructionFailure {
        identifier: String,
        source: BoxError,
    },
    MissingField(String),
    UnexpectedData {
        expected: &'static str,
        found: &'static str,
    },
    CannotParse(String),
    InvalidTokens(String),
    NoNextTokens,
}

impl Error {
    pub fn is_invalid_coding(&self) -> bool {
        matches!(self, Self::InvalidCoding(_))
    }

    pub fn is_unresolved_type(&self) -> bool {
        matches!(self, Self::UnresolvedType(_))
    }

    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, Self::MalformedPayload(_))
    }

    pub fn is_reconstruction_failure(&self) -> bool {
        matches!(self, Self::ReconstructionFailure { .. })
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Message(msg) => formatter.write_str(msg),
            Error::InvalidCoding(name) => write!(formatter, "invalid coding: {}", name),
            Error::UnresolvedType(identifier) => {
                write!(formatter, "cannot resolve type: {}", identifier)
            }
            Error::MalformedPayload(msg) => write!(formatter, "malformed payload: {}", msg),
            Error::ReconstructionFailure { identifier, source } => write!(
                formatter,
                "cannot reconstruct `{}` object: {}",
                identifier, source
            ),
            Error::MissingField(name) => write!(formatter, "missing field: {}", name),
            Error::UnexpectedData { expected, found } => {
                write!(formatter, "expected {}, found {}", expected, found)
            }
            Error::CannotParse(text) => write!(formatter, "cannot parse: {}", text),
            Error::InvalidTokens(text) => write!(formatter, "invalid tokens: {}", text),
            Error::NoNextTokens => formatter.write_str("no next tokens"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReconstructionFailure { source, .. } => Some(&**source),
            _ => None,
        }
    }
}
