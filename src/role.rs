use std::fmt::{self, Display};

#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Role {
    Create = 0,
    Read = 1,
    Update = 2,
    Delete = 3,
    None_ = 4,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Create, Role::Read, Role::Update, Role::Delete];

    pub fn parse(value: &str) -> Role {
        match value {
            "create" => Role::Create,
            "read" => Role::Read,
            "update" => Role::Update,
            "delete" => Role::Delete,
            _ => Role::None_,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Role::None_)
    }

    #[inline(always)]
    pub fn bit(&self) -> u8 {
        if self.is_valid() {
            1 << *self as u8
        } else {
            0
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> u8 {
        role as u8
    }
}

impl From<u8> for Role {
    fn from(value: u8) -> Self {
        match value {
            0 => Role::Create,
            1 => Role::Read,
            2 => Role::Update,
            3 => Role::Delete,
            _ => {
                debug_assert!(false, "Invalid role value: {}", value);
                Role::None_
            }
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Create => write!(f, "create"),
            Role::Read => write!(f, "read"),
            Role::Update => write!(f, "update"),
            Role::Delete => write!(f, "delete"),
            Role::None_ => Ok(()),
        }
    }
}

// Role de/serialization
impl serde::Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct RoleVisitor;

impl<'de> serde::de::Visitor<'de> for RoleVisitor {
    type Value = Role;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a valid role name")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Role::parse(v))
    }
}

impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(RoleVisitor)
    }
}
