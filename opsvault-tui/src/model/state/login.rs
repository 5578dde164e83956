//! Login screen state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// Failure message from the last attempt.
    pub error: Option<String>,
}

impl LoginState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: LoginField::Username,
            error: None,
        }
    }

    pub fn buffer_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}
