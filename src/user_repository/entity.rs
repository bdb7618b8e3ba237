//! Entity trait implementation for the User domain type.

use crate::framework::Entity;
use crate::model::User;

impl Entity for User {
    type Id = u32;
    const ENTITY_TYPE: &'static str = "User";

    fn id(&self) -> u32 {
        User::id(self)
    }
}
