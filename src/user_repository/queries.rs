//! Queries the User repository answers beyond plain CRUD.

use crate::error::CatalogError;
use crate::model::{User, UserRole};
use std::str::FromStr;

/// User fields that support text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
}

impl UserField {
    pub fn value_of(self, user: &User) -> &str {
        match self {
            UserField::Name => user.name(),
            UserField::Email => user.email(),
        }
    }
}

impl FromStr for UserField {
    type Err = CatalogError;

    fn from_str(field: &str) -> Result<Self, Self::Err> {
        match field.to_lowercase().as_str() {
            "nombre" => Ok(UserField::Name),
            "email" => Ok(UserField::Email),
            _ => Err(CatalogError::InvalidArgument(format!(
                "unknown search field: {field}"
            ))),
        }
    }
}

/// Custom queries for User repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    SearchBy { field: UserField, value: String },
    ByRole(UserRole),
}
