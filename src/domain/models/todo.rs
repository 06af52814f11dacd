//! Todo Domain Model
//!
//! Represents a single todo item owned by a verified identity.

/// Newtype wrapper for Todo ID providing type safety
///
/// IDs are assigned by storage on insert, so there is no constructor that
/// invents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(i64);

impl TodoId {
    /// Create a TodoId from a storage-assigned value
    #[must_use]
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl TryFrom<&str> for TodoId {
    type Error = std::num::ParseIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(value.parse()?))
    }
}

/// Subject identifier of a verified identity, used as the ownership key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectId(String);

impl SubjectId {
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self(subject.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Data required to create a new Todo
///
/// The owner always comes from the verified token, never from the request body.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub owner: SubjectId,
}

/// Replacement values for the mutable fields of a Todo
#[derive(Debug, Clone)]
pub struct TodoChanges {
    pub title: String,
    pub completed: bool,
}

/// Todo domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    completed: bool,
    user_id: SubjectId,
}

impl Todo {
    /// Restore a Todo from persisted data
    #[must_use]
    pub fn restore(id: TodoId, title: String, completed: bool, user_id: SubjectId) -> Self {
        Self {
            id,
            title,
            completed,
            user_id,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> TodoId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn user_id(&self) -> &SubjectId {
        &self.user_id
    }
}
