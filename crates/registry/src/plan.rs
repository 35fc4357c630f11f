// crates/registry/src/plan.rs

use crate::inputs::RegistryInputs;
use crate::path::versions_path;
use crate::version::PackageVersion;
use globber::Matcher;
use serde::Serialize;
use tracing::{debug, info, warn};

/// A version selected for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDeletion {
    pub id: u64,
    pub name: String,
    /// REST path to delete, when the package location is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Ordered outcome of matching a version listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletionPlan {
    pub considered: usize,
    pub timed_out: usize,
    pub deletions: Vec<PlannedDeletion>,
}

impl DeletionPlan {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.deletions.iter().map(|d| d.name.as_str())
    }
}

/// Select the versions to delete, keeping listing order.
///
/// A version whose match evaluation times out is logged and kept; one slow
/// evaluation never aborts the rest of the listing.
pub fn plan_deletions(
    versions: &[PackageVersion],
    matcher: &Matcher,
    inputs: Option<&RegistryInputs>,
) -> DeletionPlan {
    let mut plan = DeletionPlan {
        considered: versions.len(),
        ..DeletionPlan::default()
    };
    for version in versions {
        match matcher.try_is_selected(&version.name) {
            Ok(true) => {
                debug!(target: "pkgprune::select", id = version.id, version = %version.name, "selected");
                plan.deletions.push(PlannedDeletion {
                    id: version.id,
                    name: version.name.clone(),
                    path: inputs.map(|inputs| versions_path(inputs, None, Some(version.id))),
                });
            }
            Ok(false) => {}
            Err(err) => {
                warn!(target: "pkgprune::select", id = version.id, version = %version.name, error = %err, "keeping version");
                plan.timed_out += 1;
            }
        }
    }
    info!(
        target: "pkgprune::select",
        "selected {} of {} versions",
        plan.deletions.len(),
        plan.considered
    );
    plan
}
