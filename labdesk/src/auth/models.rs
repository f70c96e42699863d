use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString,
)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    LabTechnician,
    #[default]
    Researcher,
    Engineer,

    /// A role name the backend knows and this console does not, kept verbatim
    /// so saving the account sends it back unchanged.
    #[strum(default)]
    Unknown(String),
}

impl Role {
    /// Roles that can be given to an account from the console.
    pub fn assignable() -> impl Iterator<Item = Role> {
        Role::iter().filter(|role| !role.is_unknown())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Role::Unknown(_))
    }

    /// Tailwind classes for the role badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::Admin => "bg-red-100 text-red-800",
            Role::LabTechnician => "bg-blue-100 text-blue-800",
            Role::Researcher => "bg-green-100 text-green-800",
            Role::Engineer => "bg-purple-100 text-purple-800",
            Role::Unknown(_) => "bg-gray-100 text-gray-800",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::LabTechnician => "Lab Technician",
            Role::Researcher => "Researcher",
            Role::Engineer => "Engineer",
            Role::Unknown(name) => name,
        }
    }
}

/// Wire name of the role
impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "Admin",
            Role::LabTechnician => "LabTechnician",
            Role::Researcher => "Researcher",
            Role::Engineer => "Engineer",
            Role::Unknown(name) => name,
        };
        f.write_str(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Role::from_str(&name).unwrap_or(Role::Unknown(name))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.to_string()
    }
}
