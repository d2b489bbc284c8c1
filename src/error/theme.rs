use std::fmt::{ Display, Formatter };
use crate::utils::ThemePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeError {
    UnexpectedPhase {
        expected: ThemePhase,
        found: ThemePhase,
    },
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::UnexpectedPhase { expected, found } =>
                write!(f, "Theme transition out of order: expected {:?}, found {:?}", expected, found),
        }
    }
}

impl std::error::Error for ThemeError {}
