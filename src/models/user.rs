use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::todo::Todo;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,    // unique, sent as a plain header on todo routes
    pub pro: bool,
    pub todos: Vec<Todo>,    // insertion-ordered, owned by this user only
}

impl User {
    pub fn new(name: String, username: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            username,
            pro: false,
            todos: Vec::new(),
        }
    }
}
