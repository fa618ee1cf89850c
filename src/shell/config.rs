/// Runtime configuration, read from the environment.
///
/// - `HOST`: bind address (default `0.0.0.0`)
/// - `PORT`: listen port (default `8080`)
/// - `DATABASE_URL`: SQLite database (default `sqlite://hotel.db`)
/// - `SEED_DEMO_DATA`: insert demo rows into an empty store when set
///   to `1` or `true`
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://hotel.db".to_string()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// The `"host:port"` bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "sqlite://hotel.db".to_string(),
            seed_demo_data: false,
        }
    }
}
