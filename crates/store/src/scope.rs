use std::fmt;

/// Where a stored preference value applies.
///
/// A preference row is either global (applies to everyone) or a per-user
/// override for one identity. At most one row exists per (key, scope).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    User(String),
}

impl Scope {
    /// Per-user scope. An empty identity is the global row.
    pub fn user(id: &str) -> Self {
        if id.is_empty() {
            Scope::Global
        } else {
            Scope::User(id.to_string())
        }
    }

    /// From an optional identity (CLI `--user` plumbing).
    pub fn from_user_id(id: Option<&str>) -> Self {
        match id {
            Some(id) => Scope::user(id),
            None => Scope::Global,
        }
    }

    /// The user_id column value; global rows store the empty string.
    pub(crate) fn column_value(&self) -> &str {
        match self {
            Scope::Global => "",
            Scope::User(id) => id,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::User(id) => write!(f, "user '{id}'"),
        }
    }
}
