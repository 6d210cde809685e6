/// Caller identity asserted via the User-ID / User-Email request headers.
///
/// Either field may be absent; the access guard rejects requests where both
/// are. Resolution prefers email, then falls back to the user ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(user_id: Option<String>, email: Option<String>) -> Self {
        Self {
            user_id: normalize(user_id),
            email: normalize(email),
        }
    }

    pub fn from_user_id(user_id: impl Into<String>) -> Self {
        Self::new(Some(user_id.into()), None)
    }

    pub fn from_email(email: impl Into<String>) -> Self {
        Self::new(None, Some(email.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.email.is_none()
    }
}

// Blank headers count as absent
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
