/// Version information and documentation links
///
/// This module handles:
/// - The version and build tags baked in at compile time
/// - Deriving the versioned documentation path for development builds

/// Running version; `MONITOROR_VERSION` at build time overrides the package version
pub const VERSION: &str = match option_env!("MONITOROR_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Build tags shown as a badge next to the banner, empty for regular builds
pub const BUILD_TAGS: &str = match option_env!("MONITOROR_BUILD_TAGS") {
    Some(t) => t,
    None => "",
};

const DEV_SUFFIX: &str = "-dev";

/// Documentation path fragment for a version
///
/// Development builds ("1.2.0-dev") point at their own docs ("1.2/"),
/// everything else at the unversioned root ("").
pub fn documentation_version(version: &str) -> String {
    if !version.ends_with(DEV_SUFFIX) {
        return String::new();
    }

    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() == 3 { format!("{}.{}/", parts[0], parts[1]) } else { String::new() }
}
