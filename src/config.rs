// Configuration resolution: environment and command line are folded into
// a single immutable `Config` up front, so the rest of the program never
// reads global state.

use anyhow::{Context, Result};

/// Environment variable naming the GraphQL endpoint.
pub const ENDPOINT_VAR: &str = "HOOSHUNGRY_GQL";

/// Endpoint used when `HOOSHUNGRY_GQL` is unset or empty.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/graphql";

/// Default hall when no positional argument is given.
pub const DEFAULT_HALL_ID: i64 = 1;

/// Everything a run needs: where to send the query and which hall to ask
/// about. Built once in `main`, then read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub hall_id: i64,
}

impl Config {
    /// Resolve configuration from the process environment and arguments.
    /// Usage is `hooshungry-cli [hallId]`; no flags are recognized.
    pub fn from_env_and_args() -> Result<Self> {
        Self::resolve(std::env::var(ENDPOINT_VAR).ok(), std::env::args().nth(1))
    }

    // Separated from the process globals so tests can feed values in.
    fn resolve(endpoint: Option<String>, hall_arg: Option<String>) -> Result<Self> {
        let endpoint = match endpoint {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_ENDPOINT.to_string(),
        };
        let hall_id = match hall_arg {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid hall id {raw:?} (usage: hooshungry-cli [hallId])"))?,
            None => DEFAULT_HALL_ID,
        };
        Ok(Config { endpoint, hall_id })
    }
}
