// crates/registry/src/lib.rs
//! Registry-side types for pruning package versions: the version listing
//! model, owner/package inputs, REST paths and the deletion plan.

pub mod error;
pub mod inputs;
pub mod path;
pub mod plan;
pub mod version;

pub use error::{RegistryError, Result};
pub use inputs::{DEFAULT_PACKAGE_TYPE, Owner, RegistryInputs};
pub use path::{DEFAULT_PAGE_SIZE, versions_path};
pub use plan::{DeletionPlan, PlannedDeletion, plan_deletions};
pub use version::{InputFormat, PackageVersion, parse_versions};
