use std::ops::Deref;

use tracing::debug;

use crate::role::Role;

pub const ROLE_MAX: u8 = 15;

#[derive(
    Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Permission {
    role: u8,
}

impl Permission {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn all() -> Self {
        Permission { role: ROLE_MAX }
    }

    // A single token may be a raw mask (decimal or one hex digit); anything
    // else, and every token in multi-token form, is a role name.
    pub fn parse(tokens: &[&str]) -> Self {
        let mut permission = Permission::new();
        match tokens {
            [] => {}
            &[token] => {
                if let Ok(value) = token.parse::<u8>() {
                    if value <= ROLE_MAX {
                        permission.role = value;
                    } else {
                        debug!("Ignoring out-of-range role value: {}", value);
                    }
                } else if matches!(token.as_bytes(), [digit] if digit.is_ascii_hexdigit()) {
                    permission.role = u8::from_str_radix(token, 16).unwrap_or(0);
                } else {
                    permission.add(&[token]);
                }
            }
            tokens => {
                permission.add(tokens);
            }
        }
        permission
    }

    pub fn add(&mut self, roles: &[&str]) -> &mut Self {
        for name in roles {
            let role = Role::parse(name);
            if role.is_valid() {
                self.role |= role.bit();
            } else {
                debug!("Ignoring unknown role: {:?}", name);
            }
        }
        self
    }

    pub fn remove(&mut self, roles: &[&str]) -> &mut Self {
        for name in roles {
            let role = Role::parse(name);
            if role.is_valid() {
                self.role &= !role.bit();
            } else {
                debug!("Ignoring unknown role: {:?}", name);
            }
        }
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.role = 0;
        self
    }

    #[inline(always)]
    pub fn insert(&mut self, role: Role) {
        debug_assert!(role.is_valid());
        self.role |= role.bit();
    }

    #[inline(always)]
    pub fn revoke(&mut self, role: Role) {
        debug_assert!(role.is_valid());
        self.role &= !role.bit();
    }

    // An empty mask never grants anything.
    pub fn has(&self, roles: &[&str]) -> bool {
        if self.role == 0 {
            return false;
        }
        roles
            .iter()
            .map(|name| Role::parse(name))
            .filter(|role| role.is_valid())
            .all(|role| self.role & role.bit() != 0)
    }

    pub fn can(&self, roles: &[&str]) -> bool {
        self.has(roles)
    }

    #[inline(always)]
    pub fn contains(&self, role: Role) -> bool {
        self.role & role.bit() != 0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.role == 0
    }

    #[inline(always)]
    pub fn union(&mut self, other: &Permission) {
        self.role |= other.role;
    }

    #[inline(always)]
    pub fn intersection(&mut self, other: &Permission) {
        self.role &= other.role;
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<Role> {
        if self.role != 0 {
            let bit = 7 - self.role.leading_zeros() as u8;
            self.role ^= 1 << bit;
            Some(bit.into())
        } else {
            None
        }
    }

    pub fn bin(&self) -> String {
        format!("{:b}", self.role)
    }

    pub fn hex(&self) -> String {
        format!("{:X}", self.role)
    }

    #[inline(always)]
    pub fn role(&self) -> u8 {
        self.role
    }
}

impl From<u8> for Permission {
    fn from(value: u8) -> Self {
        Permission {
            role: value & ROLE_MAX,
        }
    }
}

impl From<Role> for Permission {
    fn from(role: Role) -> Self {
        let mut permission = Permission::new();
        permission.insert(role);
        permission
    }
}

impl From<Vec<Role>> for Permission {
    fn from(roles: Vec<Role>) -> Self {
        let mut permission = Permission::new();
        for role in roles {
            if role.is_valid() {
                permission.insert(role);
            }
        }
        permission
    }
}

impl FromIterator<Role> for Permission {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut permission = Permission::new();
        for role in iter {
            if role.is_valid() {
                permission.insert(role);
            }
        }
        permission
    }
}

impl From<Permission> for Vec<Role> {
    fn from(permission: Permission) -> Self {
        let mut list = Vec::new();
        for role in permission {
            list.push(role);
        }
        list
    }
}

impl AsRef<u8> for Permission {
    fn as_ref(&self) -> &u8 {
        &self.role
    }
}

impl Deref for Permission {
    type Target = u8;

    fn deref(&self) -> &Self::Target {
        &self.role
    }
}

impl Iterator for Permission {
    type Item = Role;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }
}
