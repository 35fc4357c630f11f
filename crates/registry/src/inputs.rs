// crates/registry/src/inputs.rs

use crate::error::{RegistryError, Result};

/// Package type assumed when none is configured.
pub const DEFAULT_PACKAGE_TYPE: &str = "nuget";

/// Account that owns the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Owner {
    User(String),
    Org(String),
}

impl Owner {
    /// Resolve the owner from optional user and organisation names. Blank
    /// values count as unset.
    pub fn resolve(user: Option<&str>, org: Option<&str>) -> Result<Self> {
        let user = user.map(str::trim).filter(|u| !u.is_empty());
        let org = org.map(str::trim).filter(|o| !o.is_empty());
        match (user, org) {
            (Some(user), None) => Ok(Owner::User(user.to_string())),
            (None, Some(org)) => Ok(Owner::Org(org.to_string())),
            (Some(user), Some(org)) => Err(RegistryError::AmbiguousOwner {
                user: user.to_string(),
                org: org.to_string(),
            }),
            (None, None) => Err(RegistryError::MissingOwner),
        }
    }

    /// First path segment of the owner's REST resources.
    pub fn domain(&self) -> String {
        match self {
            Owner::User(name) => format!("users/{name}"),
            Owner::Org(name) => format!("orgs/{name}"),
        }
    }
}

/// Where the package lives in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryInputs {
    pub owner: Owner,
    pub package_type: String,
    pub package_name: String,
}

impl RegistryInputs {
    pub fn new(
        user: Option<&str>,
        org: Option<&str>,
        package_type: Option<&str>,
        package_name: Option<&str>,
    ) -> Result<Self> {
        let owner = Owner::resolve(user, org)?;
        let package_name = package_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(RegistryError::MissingPackageName)?;
        let package_type = package_type
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PACKAGE_TYPE);
        Ok(Self {
            owner,
            package_type: package_type.to_string(),
            package_name: package_name.to_string(),
        })
    }
}
