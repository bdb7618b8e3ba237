use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::validation;
use crate::error::Result;

/// Represents a registered library member.
///
/// # Repository Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be stored by a [`UserRepository`](crate::user_repository::UserRepository).
///
/// The [`UserRole`] decides the borrow limit and the kind label. Equality is
/// `id` plus role.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: u32,
    name: String,
    email: String,
    phone: String,
    role: UserRole,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserCreate {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// The kind of member, which determines borrowing privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UserRole {
    Student,
    Professor,
}

impl UserRole {
    /// Maximum number of books this kind of member may hold at once.
    pub fn borrow_limit(self) -> u32 {
        match self {
            UserRole::Student => 3,
            UserRole::Professor => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Professor => "Professor",
        }
    }
}

impl User {
    /// Creates a new User after validating every field.
    ///
    /// # Arguments
    /// * `params` - id, name, email and phone
    /// * `role` - The kind of member
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a zero id, a blank name or an email without `@`.
    pub fn new(params: UserCreate, role: UserRole) -> Result<Self> {
        Ok(Self {
            id: validation::positive_id(params.id)?,
            name: validation::non_blank("name", params.name)?,
            email: validation::email(params.email)?,
            phone: params.phone,
            role,
        })
    }

    pub fn student(params: UserCreate) -> Result<Self> {
        Self::new(params, UserRole::Student)
    }

    pub fn professor(params: UserCreate) -> Result<Self> {
        Self::new(params, UserRole::Professor)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn set_id(&mut self, id: u32) -> Result<()> {
        self.id = validation::positive_id(id)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = validation::non_blank("name", name.into())?;
        Ok(())
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        self.email = validation::email(email.into())?;
        Ok(())
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn kind(&self) -> &'static str {
        self.role.label()
    }

    pub fn borrow_limit(&self) -> u32 {
        self.role.borrow_limit()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.role == other.role
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Kind: {} | Email: {} | Phone: {} | Limit: {} books",
            self.id,
            self.name,
            self.kind(),
            self.email,
            self.phone,
            self.borrow_limit()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn ana() -> User {
        User::student(UserCreate::new(7, "Ana", "ana@uni.edu", "555")).unwrap()
    }

    #[test]
    fn test_role_drives_limit_and_kind() {
        let student = ana();
        let professor = User::professor(UserCreate::new(8, "Luis", "luis@uni.edu", "")).unwrap();

        assert_eq!(student.borrow_limit(), 3);
        assert_eq!(student.kind(), "Student");
        assert_eq!(professor.borrow_limit(), 5);
        assert_eq!(professor.kind(), "Professor");
    }

    #[test]
    fn test_constructor_rejects_invalid_fields() {
        assert!(matches!(
            User::student(UserCreate::new(1, "Ana", "ana.uni.edu", "")),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(User::student(UserCreate::new(1, "", "ana@uni.edu", "")).is_err());
        assert!(User::student(UserCreate::new(0, "Ana", "ana@uni.edu", "")).is_err());
    }

    #[test]
    fn test_failed_setters_keep_previous_value() {
        let mut user = ana();
        assert!(user.set_email("no-at-sign").is_err());
        assert!(user.set_name("   ").is_err());
        assert!(user.set_id(0).is_err());

        assert_eq!(user.email(), "ana@uni.edu");
        assert_eq!(user.name(), "Ana");
        assert_eq!(user.id(), 7);

        user.set_phone("");
        user.set_email("ana@home.org").unwrap();
        assert_eq!(user.phone(), "");
        assert_eq!(user.email(), "ana@home.org");
    }

    #[test]
    fn test_equality_is_id_and_role() {
        let student = ana();
        let other_student = User::student(UserCreate::new(7, "Someone", "x@y", "")).unwrap();
        let professor = User::professor(UserCreate::new(7, "Ana", "ana@uni.edu", "555")).unwrap();

        assert_eq!(student, other_student);
        assert_ne!(student, professor);
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            ana().to_string(),
            "ID: 7 | Name: Ana | Kind: Student | Email: ana@uni.edu | Phone: 555 | Limit: 3 books"
        );
    }
}
