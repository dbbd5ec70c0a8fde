use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub use configs::DatabaseConfig;

/// Pool options derived from the `[database]` config section.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout())
        .acquire_timeout(cfg.acquire_timeout())
        .idle_timeout(cfg.idle_timeout())
        .max_lifetime(cfg.max_lifetime())
        .sqlx_logging(cfg.sqlx_logging);
    opts
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(max_connections = cfg.max_connections, min_connections = cfg.min_connections, "database pool ready");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn options_follow_config() {
        let cfg = DatabaseConfig {
            url: "postgres://localhost/rooms".into(),
            max_connections: 7,
            min_connections: 3,
            acquire_timeout_secs: 5,
            ..DatabaseConfig::default()
        };
        let opts = connect_options(&cfg);
        assert_eq!(opts.get_url(), "postgres://localhost/rooms");
        assert_eq!(opts.get_max_connections(), Some(7));
        assert_eq!(opts.get_min_connections(), Some(3));
        assert_eq!(opts.get_acquire_timeout(), Some(Duration::from_secs(5)));
    }
}
