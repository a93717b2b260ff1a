//! Platform-specific path joining

use crate::config::TargetPlatform;

/// Join `directory` and `filename` with the platform's separator.
///
/// Separators of the other platform inside `directory` are normalised. A
/// trailing separator is reused, never doubled.
pub fn join_path(directory: &str, platform: TargetPlatform, filename: &str) -> String {
    let separator = platform.separator();
    let mut path = normalize_separators(directory, platform);
    if path.is_empty() {
        return filename.to_string();
    }
    if !path.ends_with(separator) {
        path.push(separator);
    }
    path.push_str(filename);
    path
}

/// Rewrite every separator in `path` to the platform's own
pub fn normalize_separators(path: &str, platform: TargetPlatform) -> String {
    let foreign = match platform {
        TargetPlatform::Windows => '/',
        TargetPlatform::Linux => '\\',
    };
    path.replace(foreign, &platform.separator().to_string())
}
