/// The registered user: username plus keyed password hash and the salt used as the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password_hash: Vec<u8>,
    pub password_salt: Vec<u8>,
}

impl User {
    /// Create a new `User` instance.
    pub fn new(username: String, password_hash: Vec<u8>, password_salt: Vec<u8>) -> Self {
        Self {
            username,
            password_hash,
            password_salt,
        }
    }
}
