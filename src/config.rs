use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::engine::{WorkflowConfig, DEFAULT_SUBMISSION_TIMEOUT};
use crate::entities::Profile;
use crate::error::{env_var_error, Error};

#[derive(Clone, Debug)]
pub struct Config {
    /// Postgres URI; without it orders are kept in memory.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub listen_addr: SocketAddr,
    pub submission_timeout: Duration,
    pub guard_food_orders: bool,
    pub profile: Option<Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 5,
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            submission_timeout: DEFAULT_SUBMISSION_TIMEOUT,
            guard_food_orders: false,
            profile: None,
        }
    }
}

impl Config {
    /// Reads `.env` and then the process environment.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let profile = match (lookup("PROFILE_ID"), lookup("PROFILE_NAME")) {
            (None, None) => None,
            (id, name) => Some(Profile::new(id.unwrap_or_default(), name.unwrap_or_default())),
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            max_connections: parse(&lookup, "DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(defaults.max_connections),
            listen_addr: parse(&lookup, "LISTEN_ADDR")?.unwrap_or(defaults.listen_addr),
            submission_timeout: parse(&lookup, "SUBMISSION_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.submission_timeout),
            guard_food_orders: parse(&lookup, "GUARD_FOOD_ORDERS")?
                .unwrap_or(defaults.guard_food_orders),
            profile,
        })
    }

    pub fn workflow(&self) -> WorkflowConfig {
        WorkflowConfig {
            submission_timeout: self.submission_timeout,
            guard_food_orders: self.guard_food_orders,
        }
    }
}

fn parse<F, T>(lookup: &F, key: &str) -> Result<Option<T>, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|_| {
            tracing::error!("malformed value for {}: {:?}", key, value);
            env_var_error()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key| values.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.database_url, None);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.submission_timeout, Duration::from_secs(30));
        assert!(!config.guard_food_orders);
        assert_eq!(config.profile, None);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgresql://rideline@localhost/rideline"),
            ("LISTEN_ADDR", "0.0.0.0:8080"),
            ("SUBMISSION_TIMEOUT_SECS", "10"),
            ("GUARD_FOOD_ORDERS", "true"),
            ("PROFILE_ID", "u-7"),
        ]))
        .unwrap();

        assert!(config.database_url.is_some());
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.workflow().submission_timeout, Duration::from_secs(10));
        assert!(config.workflow().guard_food_orders);
        assert_eq!(config.profile, Some(Profile::new("u-7", "")));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let result = Config::from_lookup(lookup(&[("SUBMISSION_TIMEOUT_SECS", "soon")]));

        assert_eq!(result.unwrap_err(), env_var_error());
    }
}
