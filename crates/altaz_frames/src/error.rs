//! Errors from parsing sexagesimal text.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AngleParseError {
    #[error("empty angle")]
    Empty,
    #[error("expected \"D M\", \"D,M\" or \"D:M\", got {0:?}")]
    Format(String),
    #[error("invalid number {0:?}")]
    Number(String),
    #[error("minutes must be in [0, 60), got {0}")]
    MinutesOutOfRange(String),
}
