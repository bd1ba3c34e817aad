use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::error::ValidationError;

/// Positive integer naming a backend user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(u64);

impl UserId {
    /// Wraps an already-validated identifier; zero is rejected
    pub fn new(id: u64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::NotPositive(0));
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ValidationError::NotNumeric(input.to_string()))?;

        if value < 1 {
            return Err(ValidationError::NotPositive(value));
        }

        Ok(Self(value as u64))
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
