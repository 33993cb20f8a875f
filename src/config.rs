use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "CareLink";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key under which the serialized current actor is persisted.
pub const SESSION_KEY: &str = "session";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME").replace('-', "_"))
}

/// Get the application data directory
/// ~/CareLink/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("CareLink")
}

/// File holding the persisted session slot.
pub fn session_file() -> PathBuf {
    app_data_dir().join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("CareLink"));
    }

    #[test]
    fn session_file_under_app_data() {
        let file = session_file();
        assert!(file.starts_with(app_data_dir()));
        assert!(file.ends_with("session.json"));
    }

    #[test]
    fn log_filter_names_this_crate() {
        assert!(default_log_filter().contains("carelink_core=debug"));
    }
}
