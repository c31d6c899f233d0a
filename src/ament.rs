//! ROS 2 package discovery
//!
//! Locates package share directories and node executables by probing the
//! ament install layout. Environment lookups go through the launch context
//! so callers can overlay `ROS_DISTRO` and `AMENT_PREFIX_PATH`.

use std::path::{Path, PathBuf};

use crate::substitution::LaunchContext;

/// Distributions probed under /opt/ros when ROS_DISTRO is unset.
const KNOWN_DISTROS: &[&str] = &["jazzy", "iron", "humble", "galactic", "foxy"];

/// Find a package's share directory.
///
/// Probe order: `/opt/ros/$ROS_DISTRO/share/<pkg>`, then the known
/// distributions under /opt/ros, then each entry of `AMENT_PREFIX_PATH`.
pub fn find_package_share(context: &LaunchContext, package_name: &str) -> Option<PathBuf> {
    find_in_prefixes(context, &format!("share/{}", package_name))
}

/// Find a node executable installed at `<prefix>/lib/<pkg>/<executable>`.
pub fn find_package_executable(
    context: &LaunchContext,
    package_name: &str,
    executable: &str,
) -> Option<PathBuf> {
    find_in_prefixes(context, &format!("lib/{}/{}", package_name, executable))
}

fn find_in_prefixes(context: &LaunchContext, relative: &str) -> Option<PathBuf> {
    if let Some(distro) = context.get_env("ROS_DISTRO") {
        let candidate = Path::new("/opt/ros").join(&distro).join(relative);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    for distro in KNOWN_DISTROS {
        let candidate = Path::new("/opt/ros").join(distro).join(relative);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    if let Some(prefix_path) = context.get_env("AMENT_PREFIX_PATH") {
        for prefix in prefix_path.split(':') {
            if prefix.is_empty() {
                continue;
            }
            let candidate = Path::new(prefix).join(relative);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    None
}
