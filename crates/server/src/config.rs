use shared_types::{AppConfig, DashboardLimits};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse `config.toml` contents. Unparseable input yields the defaults.
fn parse_config(contents: &str) -> AppConfig {
    let mut config: AppConfig = toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    });
    config.dashboard = config.dashboard.sanitized();
    config
}

/// Read `config.toml` once and keep it for the process lifetime.
/// Later calls are no-ops. A missing file means defaults.
pub fn load_app_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            eprintln!("[config] Dashboard limits: {:?}", config.dashboard);
            config
        }
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}), using defaults");
            AppConfig::default()
        }
    });
}

/// Panel row limits. Defaults apply if `load_app_config()` has not run.
pub fn dashboard_limits() -> DashboardLimits {
    CONFIG
        .get()
        .map(|c| c.dashboard.clone())
        .unwrap_or_default()
}
