// crates/registry/src/path.rs

use crate::inputs::RegistryInputs;

/// Page size used when listing versions.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Relative REST path of a package's versions, or of one version when
/// `version_id` is given.
///
/// ```
/// use registry::{RegistryInputs, versions_path};
///
/// let inputs = RegistryInputs::new(None, Some("acme"), None, Some("Demo")).unwrap();
/// assert_eq!(
///     versions_path(&inputs, Some(30), None),
///     "orgs/acme/packages/nuget/Demo/versions?per_page=30"
/// );
/// assert_eq!(
///     versions_path(&inputs, None, Some(42)),
///     "orgs/acme/packages/nuget/Demo/versions/42"
/// );
/// ```
pub fn versions_path(inputs: &RegistryInputs, page_size: Option<u32>, version_id: Option<u64>) -> String {
    let mut path = format!(
        "{}/packages/{}/{}/versions",
        inputs.owner.domain(),
        inputs.package_type,
        inputs.package_name
    );
    if let Some(id) = version_id {
        path.push('/');
        path.push_str(&id.to_string());
    }
    if let Some(size) = page_size {
        path.push_str("?per_page=");
        path.push_str(&size.to_string());
    }
    path
}
