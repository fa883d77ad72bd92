use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // HTTP server
    pub bind_addr: String,
    pub port: u16,

    // Client-side persistence (used by the `locale` binary)
    pub locale_store_path: String,
    pub cookie_jar_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", port))?,
                Err(_) => 8080,
            },

            locale_store_path: std::env::var("LOCALE_STORE_PATH")
                .unwrap_or_else(|_| "data/locale.json".to_string()),
            cookie_jar_path: std::env::var("COOKIE_JAR_PATH")
                .unwrap_or_else(|_| "data/cookies.txt".to_string()),
        })
    }

    /// Socket address string for the HTTP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
