use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeCupError {
    Interrupted,
    LockError,
}

impl<T> From<std::sync::PoisonError<T>> for CoffeeCupError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        CoffeeCupError::LockError
    }
}

impl fmt::Display for CoffeeCupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoffeeCupError::Interrupted => write!(f, "wait interrupted"),
            CoffeeCupError::LockError => write!(f, "error while taking the pause lock"),
        }
    }
}

impl std::error::Error for CoffeeCupError {}
