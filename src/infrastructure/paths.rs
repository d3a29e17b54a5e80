//! Sandbox path resolution.
//!
//! `/host` is the cwd of the last focused terminal, or the folder Zellij was
//! started in. Started from a home directory, the data directory resolves
//! to `~/.local/share/zellij/countrypicker`.

use std::path::PathBuf;

const SANDBOX_HOME: &str = "/host";

/// Data directory holding the trace file and the default flag images.
///
/// ```
/// use countrypicker::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/countrypicker"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(SANDBOX_HOME)
        .join(".local/share/zellij")
        .join("countrypicker")
}

/// Default directory of `<code>.svg` flag images (4:3 aspect ratio set).
#[must_use]
pub fn default_flags_dir() -> PathBuf {
    get_data_dir().join("flags").join("4x3")
}

/// Maps a leading `~` onto the sandbox home.
///
/// ```
/// use countrypicker::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/flags"), "/host/flags");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/flags"), "/srv/flags");
/// assert_eq!(expand_tilde("~user/flags"), "~user/flags");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => SANDBOX_HOME.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{SANDBOX_HOME}{rest}"),
        _ => path.to_string(),
    }
}
