use thiserror::Error;

pub mod r#match;
pub mod player;
pub mod validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub uuid::Uuid);

impl PlayerId {
    pub fn parse(raw: &str) -> Option<Self> {
        uuid::Uuid::parse_str(raw.trim()).ok().map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(pub uuid::Uuid);

impl MatchId {
    pub fn parse(raw: &str) -> Option<Self> {
        uuid::Uuid::parse_str(raw.trim()).ok().map(MatchId)
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

/// Failure taxonomy for every ledger operation. Checks run before any
/// store write, so a returned error implies no state was mutated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid fields: {}", .fields.join(", "))]
    InvalidFields { fields: Vec<String> },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    pub fn invalid_fields<T>(fields: Vec<&str>) -> LedgerResult<T> {
        Err(LedgerError::InvalidFields {
            fields: fields.into_iter().map(String::from).collect(),
        })
    }

    pub fn not_found<T, M>(msg: M) -> LedgerResult<T>
    where
        M: Into<String>,
    {
        Err(LedgerError::NotFound(msg.into()))
    }

    pub fn conflict<T, M>(msg: M) -> LedgerResult<T>
    where
        M: Into<String>,
    {
        Err(LedgerError::Conflict(msg.into()))
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
