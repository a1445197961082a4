//! Form field identity and presentation metadata

/// How an input is presented and what the user is expected to type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl InputKind {
    /// Whether the typed value should be hidden when rendered
    pub fn is_secret(self) -> bool {
        matches!(self, InputKind::Password)
    }
}

/// The four fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// All fields in the order they appear on screen
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Identifying key of the field
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Username => "Username",
            FieldName::Email => "Email",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::Username => "Enter Username",
            FieldName::Email => "Enter Email",
            FieldName::Password => "Enter Password",
            FieldName::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            FieldName::Username => InputKind::Text,
            FieldName::Email => InputKind::Email,
            FieldName::Password | FieldName::ConfirmPassword => InputKind::Password,
        }
    }

    /// Position of the field in the focus order
    pub fn index(self) -> usize {
        match self {
            FieldName::Username => 0,
            FieldName::Email => 1,
            FieldName::Password => 2,
            FieldName::ConfirmPassword => 3,
        }
    }

    /// Field at a focus index (None for the submit button row)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
