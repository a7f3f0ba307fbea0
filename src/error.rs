use thiserror::Error as ThisError;

use crate::pddl::predicate::Proposition;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("A proposition needs a non-empty relation name")]
    EmptyRelation,
    #[error("Unable to parse proposition from \"{0}\"")]
    Parse(String),
    #[error("Proposition {0} is asserted both true and false")]
    Inconsistent(Proposition),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Encoded state has {found} fluents but the state map has {expected}")]
    StateLength { expected: usize, found: usize },
    #[error("Goal proposition {0} never appears in the planning graph")]
    Unreachable(Proposition),
    #[error("Unable to load scenario:\n{0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
