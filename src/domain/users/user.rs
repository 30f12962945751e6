use uuid::Uuid;

/// Upper bound on `name`, counted in characters.
pub const NAME_MAX_CHARS: usize = 150;
/// Upper bound on `description`, counted in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub description: String,
}

/// Fields accepted when registering a user. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub description: String,
}
