//! User record and create/update payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Primary key of the `users` table (`SERIAL`).
pub type UserId = i32;

/// Column widths of the `users` table.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_LASTNAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 255;

/// User record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw create/update body.
///
/// Every field is optional so that absent fields surface as a validation
/// error naming them, instead of a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

/// Validated field set for insert and full-replace update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    lastname: String,
    email: String,
}

impl NewUser {
    /// Validate the three required fields.
    ///
    /// # Rules
    /// - `name`, `lastname`, `email` present and non-empty (whitespace counts)
    /// - lengths within the column widths
    ///
    /// # Example
    /// ```
    /// use userbase_server::models::NewUser;
    ///
    /// assert!(NewUser::new("Ana", "Silva", "ana@x.com").is_ok());
    /// assert!(NewUser::new("Ana", "", "ana@x.com").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        UserPayload {
            name: Some(name.into()),
            lastname: Some(lastname.into()),
            email: Some(email.into()),
        }
        .validate()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl UserPayload {
    /// Check presence first (reporting every missing field at once), then length.
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        let mut missing = Vec::new();
        let name = required("name", self.name, &mut missing);
        let lastname = required("lastname", self.lastname, &mut missing);
        let email = required("email", self.email, &mut missing);

        let (Some(name), Some(lastname), Some(email)) = (name, lastname, email) else {
            return Err(ValidationError::Missing { fields: missing });
        };

        check_len("name", &name, MAX_NAME_LEN)?;
        check_len("lastname", &lastname, MAX_LASTNAME_LEN)?;
        check_len("email", &email, MAX_EMAIL_LEN)?;

        Ok(NewUser {
            name,
            lastname,
            email,
        })
    }
}

impl TryFrom<UserPayload> for NewUser {
    type Error = ValidationError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        payload.validate()
    }
}

fn required(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
