//! Member domain model.
//!
//! # Responsibility
//! - Represent one registrant (id, name, national identity number).
//! - Validate required fields on construction and on every mutation.
//!
//! # Invariants
//! - `name` and `social_security_number` are never blank.
//! - `id` is not validated; `None` marks a member that has not been stored.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned surrogate key of a member row.
pub type MemberId = i64;

/// Validation failure for member fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    EmptySocialSecurityNumber,
}

impl Display for MemberValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be blank"),
            Self::EmptySocialSecurityNumber => write!(f, "social security number cannot be blank"),
        }
    }
}

impl Error for MemberValidationError {}

/// Returns whether operator-supplied text counts as missing.
///
/// Whitespace-only values are treated the same as empty ones.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// One registered member.
///
/// Fields are private so every write goes through the validating setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MemberFields")]
pub struct Member {
    id: Option<MemberId>,
    name: String,
    social_security_number: String,
}

#[derive(Deserialize)]
struct MemberFields {
    id: Option<MemberId>,
    name: String,
    social_security_number: String,
}

impl TryFrom<MemberFields> for Member {
    type Error = MemberValidationError;

    fn try_from(value: MemberFields) -> Result<Self, Self::Error> {
        Self::new(value.id, value.name, value.social_security_number)
    }
}

impl Member {
    /// Creates a member from raw field values.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `EmptySocialSecurityNumber` when `social_security_number` is blank.
    pub fn new(
        id: Option<MemberId>,
        name: impl Into<String>,
        social_security_number: impl Into<String>,
    ) -> Result<Self, MemberValidationError> {
        let name = name.into();
        let social_security_number = social_security_number.into();
        validate_name(&name)?;
        validate_social_security_number(&social_security_number)?;

        Ok(Self {
            id,
            name,
            social_security_number,
        })
    }

    /// Creates a member that has not been stored yet.
    pub fn unsaved(
        name: impl Into<String>,
        social_security_number: impl Into<String>,
    ) -> Result<Self, MemberValidationError> {
        Self::new(None, name, social_security_number)
    }

    pub fn id(&self) -> Option<MemberId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn social_security_number(&self) -> &str {
        &self.social_security_number
    }

    /// Replaces the name; leaves the member untouched on error.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), MemberValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the social security number; leaves the member untouched on error.
    pub fn set_social_security_number(
        &mut self,
        social_security_number: impl Into<String>,
    ) -> Result<(), MemberValidationError> {
        let social_security_number = social_security_number.into();
        validate_social_security_number(&social_security_number)?;
        self.social_security_number = social_security_number;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), MemberValidationError> {
    if is_blank(name) {
        return Err(MemberValidationError::EmptyName);
    }
    Ok(())
}

fn validate_social_security_number(value: &str) -> Result<(), MemberValidationError> {
    if is_blank(value) {
        return Err(MemberValidationError::EmptySocialSecurityNumber);
    }
    Ok(())
}
