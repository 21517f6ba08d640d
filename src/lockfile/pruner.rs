//! Removes findings the user does not manage by hand.

use super::LockFile;
use crate::analysis::PackageToRemove;
use crate::error::Result;
use crate::model::Project;

/// Prune candidates using the project's lock file; without one they are returned as-is
pub fn prune_candidates(
    project: &Project,
    candidates: Vec<PackageToRemove>,
) -> Result<Vec<PackageToRemove>> {
    match &project.lock_file_path {
        Some(path) => {
            let lock_file = LockFile::read(path)?;
            prune(project, candidates, &lock_file)
        }
        None => Ok(candidates),
    }
}

/// Drop candidates that are auto-referenced or fully suppressed for the project's framework
pub fn prune(
    project: &Project,
    candidates: Vec<PackageToRemove>,
    lock_file: &LockFile,
) -> Result<Vec<PackageToRemove>> {
    let target = lock_file.target(&project.target_framework)?;

    Ok(candidates
        .into_iter()
        .filter(|candidate| {
            match target.dependency(candidate.package.name.as_str()) {
                Some(dependency) if dependency.is_implicit() => {
                    log::debug!(
                        "{}: ignoring {} (auto-referenced or private)",
                        project.name,
                        candidate.package.name
                    );
                    false
                }
                _ => true,
            }
        })
        .collect())
}
