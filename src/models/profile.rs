use serde::{Deserialize, Serialize};

/// Role value that makes `role_other` the effective role.
pub const ROLE_OTHERS: &str = "Others";

/// Placeholder written to exports for a blank name or role.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    #[serde(rename = "roleOther")]
    pub role_other: String,
}

/// Editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Role,
    RoleOther,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Role => "role",
            ProfileField::RoleOther => "roleOther",
        }
    }
}

impl Profile {
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Role => self.role = value,
            ProfileField::RoleOther => self.role_other = value,
        }
    }

    /// `role_other` when the role is "Others", the role otherwise.
    pub fn resolved_role(&self) -> &str {
        if self.role == ROLE_OTHERS {
            &self.role_other
        } else {
            &self.role
        }
    }

    pub fn export_name(&self) -> &str {
        non_empty_or(&self.name, UNKNOWN)
    }

    pub fn export_role(&self) -> &str {
        non_empty_or(self.resolved_role(), UNKNOWN)
    }

    /// Name used in export file names.
    pub fn file_label(&self) -> &str {
        non_empty_or(&self.name, "user")
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
