//! Field validators shared by [`Book`](super::Book) and [`User`](super::User).
//!
//! Each validator returns the accepted value so constructors and setters can
//! validate first and assign second, never leaving an entity half-updated.

use crate::error::{CatalogError, Result};

pub(crate) fn positive_id(id: u32) -> Result<u32> {
    if id == 0 {
        return Err(CatalogError::invalid("id must be a positive number"));
    }
    Ok(id)
}

pub(crate) fn positive(field: &str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(CatalogError::invalid(format!("{field} must be positive")));
    }
    Ok(value)
}

pub(crate) fn non_blank(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid(format!("{field} must not be empty")));
    }
    Ok(value)
}

pub(crate) fn email(value: String) -> Result<String> {
    if !value.contains('@') {
        return Err(CatalogError::invalid(format!("email must be valid: {value:?}")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_strings_are_rejected() {
        assert!(non_blank("title", String::new()).is_err());
        assert!(non_blank("title", "   \t".to_string()).is_err());
        assert_eq!(non_blank("title", " x ".to_string()), Ok(" x ".to_string()));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(positive_id(0).is_err());
        assert!(positive("page count", 0).is_err());
        assert_eq!(positive("page count", 12), Ok(12));
    }

    #[test]
    fn test_email_requires_at_sign() {
        assert!(email("nobody.example.com".to_string()).is_err());
        assert!(email("a@b".to_string()).is_ok());
    }
}
