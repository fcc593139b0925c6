use thiserror::Error;

/// Failures raised while turning a weekly plan into content items.
///
/// `MissingHeader` and `MalformedDateRange` abort the whole parse. The day
/// variants are scoped to one entry: the assembler drops that entry and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("could not find content plan header")]
    MissingHeader,

    #[error("could not parse date range from header: {line}")]
    MalformedDateRange { line: String },

    #[error("could not extract day from title: {line}")]
    UnknownDayToken { line: String },

    #[error("unknown day name: {name}")]
    UnknownDayName { name: String },
}

impl ParseError {
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ParseError::UnknownDayToken { .. } | ParseError::UnknownDayName { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_errors_are_fatal() {
        assert!(!ParseError::MissingHeader.is_recoverable());
        assert!(!ParseError::MalformedDateRange { line: "x".into() }.is_recoverable());
    }

    #[test]
    fn day_errors_are_recoverable() {
        assert!(ParseError::UnknownDayToken { line: "x".into() }.is_recoverable());
        assert!(ParseError::UnknownDayName { name: "feriado".into() }.is_recoverable());
    }

    #[test]
    fn messages() {
        assert_eq!(
            ParseError::MissingHeader.to_string(),
            "could not find content plan header"
        );
        assert_eq!(
            ParseError::UnknownDayName { name: "Feriado".into() }.to_string(),
            "unknown day name: Feriado"
        );
    }
}
