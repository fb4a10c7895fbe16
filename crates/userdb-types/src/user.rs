use serde::{Deserialize, Serialize};

/// A single user record as stored in the JSON array.
///
/// Field order is the serialized order: `{"id":..,"email":..,"age":..}`.
/// Unknown fields are dropped on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub age: u64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: u64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

/// Index of the first user with the given id.
pub fn position_by_id(users: &[User], id: &str) -> Option<usize> {
    users.iter().position(|u| u.id == id)
}
