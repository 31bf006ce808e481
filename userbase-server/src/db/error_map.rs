//! Backend error classification
//!
//! The only place that looks at PostgreSQL SQLSTATE codes. Everything not
//! listed in [`SQLSTATE_TABLE`] is an opaque storage error.

/// Domain class of a backend failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A uniqueness constraint would be violated
    DuplicateKey,
    /// Anything else
    Storage,
}

/// SQLSTATE code → domain class.
pub const SQLSTATE_TABLE: &[(&str, ErrorClass)] = &[
    // unique_violation
    ("23505", ErrorClass::DuplicateKey),
];

/// Classify a raw SQLSTATE code.
pub fn classify_code(code: Option<&str>) -> ErrorClass {
    let Some(code) = code else {
        return ErrorClass::Storage;
    };

    SQLSTATE_TABLE
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, class)| *class)
        .unwrap_or(ErrorClass::Storage)
}

/// Classify a sqlx error. Non-database errors (I/O, pool timeout, decode)
/// carry no code and are storage errors.
pub fn classify(err: &sqlx::Error) -> ErrorClass {
    match err {
        sqlx::Error::Database(db_err) => classify_code(db_err.code().as_deref()),
        _ => ErrorClass::Storage,
    }
}

/// Name of the violated constraint, when the backend reports one.
pub fn constraint_name(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint().map(str::to_owned),
        _ => None,
    }
}
