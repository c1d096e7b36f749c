use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub desk: DeskConfig,
    #[serde(default)]
    pub printer: PrinterConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeskConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_footer")]
    pub footer: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            footer: default_footer(),
        }
    }
}

fn default_title() -> String { "Airline Management System".to_string() }

fn default_footer() -> String { "Thank you for using our Airline Management System!".to_string() }

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrinterKind {
    #[default]
    Console,
    Spool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PrinterConfig {
    #[serde(default)]
    pub kind: PrinterKind,
    #[serde(default = "default_spool_dir")]
    pub spool_dir: PathBuf,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            kind: PrinterKind::default(),
            spool_dir: default_spool_dir(),
        }
    }
}

fn default_spool_dir() -> PathBuf { PathBuf::from("spool") }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every file is optional; serde defaults cover a bare checkout
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        s.try_deserialize()
    }
}

/// Environment overrides. `__` separates the prefix as well as nested keys,
/// eg.. `SKYDESK__PRINTER__KIND=spool`
fn environment() -> config::Environment {
    config::Environment::with_prefix("SKYDESK").separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn test_defaults_when_empty() {
        let cfg: Config = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.desk.title, "Airline Management System");
        assert_eq!(cfg.printer.kind, PrinterKind::Console);
        assert_eq!(cfg.printer.spool_dir, PathBuf::from("spool"));
    }

    #[test]
    fn test_spool_printer_from_toml() {
        let toml = r#"
            [printer]
            kind = "spool"
            spool_dir = "/tmp/tickets"
        "#;
        let cfg: Config = config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.printer.kind, PrinterKind::Spool);
        assert_eq!(cfg.printer.spool_dir, PathBuf::from("/tmp/tickets"));
        assert_eq!(cfg.desk.footer, "Thank you for using our Airline Management System!");
    }

    fn from_env(vars: &[(&str, &str)]) -> Config {
        let vars: config::Map<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_env_overrides_printer() {
        let cfg = from_env(&[
            ("SKYDESK__PRINTER__KIND", "spool"),
            ("SKYDESK__PRINTER__SPOOL_DIR", "/var/spool/tickets"),
            ("SKYDESK__DESK__TITLE", "Gate 12"),
        ]);

        assert_eq!(cfg.printer.kind, PrinterKind::Spool);
        assert_eq!(cfg.printer.spool_dir, PathBuf::from("/var/spool/tickets"));
        assert_eq!(cfg.desk.title, "Gate 12");
    }

    #[test]
    fn test_env_single_underscore_prefix_is_ignored() {
        let cfg = from_env(&[("SKYDESK_PRINTER__KIND", "spool")]);

        assert_eq!(cfg.printer.kind, PrinterKind::Console);
    }
}
