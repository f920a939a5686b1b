//! Read-only identity of the signed-in user

/// Identity handed to the list controller at the composition root
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub auth_token: String,
    pub team_id: String,
    pub first_name: String,
}

impl Session {
    pub fn new(
        auth_token: impl Into<String>,
        team_id: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            auth_token: auth_token.into(),
            team_id: team_id.into(),
            first_name: first_name.into(),
        }
    }

    /// True when both sessions would fetch the same monitor collection
    pub fn same_identity(&self, other: &Session) -> bool {
        self.auth_token == other.auth_token && self.team_id == other.team_id
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}", self.first_name)
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("team_id", &self.team_id)
            .field("first_name", &self.first_name)
            .finish()
    }
}
