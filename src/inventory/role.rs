//! Node roles.
//!
//! The role set is closed; every per-role rule is an exhaustive match on
//! `Role`, so adding a role forces each rule to be revisited.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    ControlPlane,
    Worker,
    Etcd,
    ApiLb,
}

/// How a role treats the `pool` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolRule {
    /// A non-empty pool label must be supplied.
    Required,
    /// Any supplied pool is dropped from the output.
    Ignored,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::ControlPlane, Role::Worker, Role::Etcd, Role::ApiLb];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::ControlPlane => "control-plane",
            Role::Worker => "worker",
            Role::Etcd => "etcd",
            Role::ApiLb => "api-lb",
        }
    }

    pub fn pool_rule(self) -> PoolRule {
        match self {
            Role::Worker => PoolRule::Required,
            Role::ControlPlane | Role::Etcd | Role::ApiLb => PoolRule::Ignored,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
