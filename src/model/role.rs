use serde::{Deserialize, Deserializer, Serialize};

/// Authorization level attached to a session, ordered lowest to highest.
///
/// The derived `Ord` follows declaration order, so role comparisons double as
/// level comparisons (`Role::Rh >= Role::Employee`).
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Visitor,
    Employee,
    Rh,
    Admin,
}

impl Role {
    /// Numeric level used for display and logging.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Parses a role name, mapping anything unknown or malformed to `Visitor`.
    pub fn parse(value: &str) -> Self {
        match value {
            "employee" => Self::Employee,
            "rh" => Self::Rh,
            "admin" => Self::Admin,
            _ => Self::Visitor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::Employee => "employee",
            Self::Rh => "rh",
            Self::Admin => "admin",
        }
    }
}

/// Unknown or malformed role strings deserialize as `Visitor` instead of
/// failing, so a stale session written by an older build still reads back.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Role::parse(&value))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests that the role ordering matches the documented level scale.
    ///
    /// Expected: visitor=0 < employee=1 < rh=2 < admin=3
    #[test]
    fn ordering_follows_levels() {
        assert!(Role::Visitor < Role::Employee);
        assert!(Role::Employee < Role::Rh);
        assert!(Role::Rh < Role::Admin);
        assert_eq!(Role::Visitor.level(), 0);
        assert_eq!(Role::Employee.level(), 1);
        assert_eq!(Role::Rh.level(), 2);
        assert_eq!(Role::Admin.level(), 3);
    }

    /// Tests that unknown or malformed role names map to the lowest level.
    ///
    /// Expected: Role::Visitor
    #[test]
    fn unknown_role_names_parse_as_visitor() {
        assert_eq!(Role::parse("superuser"), Role::Visitor);
        assert_eq!(Role::parse(""), Role::Visitor);
        assert_eq!(Role::parse("ADMIN"), Role::Visitor);
        assert_eq!(Role::parse("admin"), Role::Admin);
    }

    /// Tests that serde uses the lowercase wire names and that unknown
    /// strings deserialize as visitor rather than failing.
    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Rh).unwrap(), "\"rh\"");
        let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, Role::Admin);
        let unknown: Role = serde_json::from_str("\"intern\"").unwrap();
        assert_eq!(unknown, Role::Visitor);
    }
}
