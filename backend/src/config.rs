//! Application settings loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_RUN_MIGRATIONS: bool = true;
const DEFAULT_SEED_DEMO_ACCOUNTS: bool = false;

/// Process-wide settings read from CLI flags, `YELP_*` variables or a
/// configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "YELP")]
pub struct AppSettings {
    /// Address the HTTP listener binds to.
    pub bind_host: Option<IpAddr>,
    /// Port the HTTP listener binds to.
    pub bind_port: Option<u16>,
    /// PostgreSQL connection string. Without one the in-memory stores are
    /// used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving. Defaults to `true`.
    pub run_migrations: Option<bool>,
    /// Register the demo accounts at start-up. Defaults to `false`.
    pub seed_demo_accounts: Option<bool>,
}

impl AppSettings {
    /// Socket address assembled from host and port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind_host.unwrap_or(DEFAULT_BIND_HOST),
            self.bind_port.unwrap_or(DEFAULT_BIND_PORT),
        )
    }

    /// Configured pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether pending migrations run before the listener starts.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(DEFAULT_RUN_MIGRATIONS)
    }

    /// Whether the demo accounts are registered at start-up.
    pub fn seed_demo_accounts(&self) -> bool {
        self.seed_demo_accounts.unwrap_or(DEFAULT_SEED_DEMO_ACCOUNTS)
    }

    /// Database URL with surrounding whitespace removed, or `None` when unset
    /// or blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "YELP_BIND_HOST",
        "YELP_BIND_PORT",
        "YELP_DATABASE_URL",
        "YELP_DB_MAX_CONNECTIONS",
        "YELP_RUN_MIGRATIONS",
        "YELP_SEED_DEMO_ACCOUNTS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("yelp")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert!(settings.database_url().is_none());
        assert_eq!(settings.db_max_connections(), DEFAULT_DB_MAX_CONNECTIONS);
        assert!(settings.run_migrations());
        assert!(!settings.seed_demo_accounts());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("YELP_BIND_HOST", Some("127.0.0.1".to_owned())),
            ("YELP_BIND_PORT", Some("3000".to_owned())),
            (
                "YELP_DATABASE_URL",
                Some("postgres://yelp@localhost/yelp".to_owned()),
            ),
            ("YELP_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("YELP_RUN_MIGRATIONS", Some("false".to_owned())),
            ("YELP_SEED_DEMO_ACCOUNTS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:3000".parse().expect("addr"));
        assert_eq!(
            settings.database_url(),
            Some("postgres://yelp@localhost/yelp")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert!(!settings.run_migrations());
        assert!(settings.seed_demo_accounts());
    }

    #[rstest]
    #[case("true", true, true)]
    #[case("false", false, false)]
    fn boolean_switches_follow_the_environment(
        #[case] raw: &str,
        #[case] run_migrations: bool,
        #[case] seed_demo_accounts: bool,
    ) {
        let _guard = lock_env(VARS.map(|name| {
            let value = matches!(name, "YELP_RUN_MIGRATIONS" | "YELP_SEED_DEMO_ACCOUNTS")
                .then(|| raw.to_owned());
            (name, value)
        }));

        let settings = load_from_empty_args();
        assert_eq!(settings.run_migrations(), run_migrations);
        assert_eq!(settings.seed_demo_accounts(), seed_demo_accounts);
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env(VARS.map(|name| {
            let value = (name == "YELP_DATABASE_URL").then(|| "   ".to_owned());
            (name, value)
        }));

        assert!(load_from_empty_args().database_url().is_none());
    }
}
