//! Everything the server needs to know before it starts, read from the environment.

use std::{env, fmt};

pub const PORT_VAR: &str = "PORT";
pub const MONGODB_URI_VAR: &str = "MONGODB_URI";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Connection string for the contacts database.
    pub mongodb_uri: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The variable wasn't set, or was empty.
    Missing(&'static str),
    /// The variable was set to something we can't use.
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "set the {} environment variable", var),
            ConfigError::Invalid { var, value } => {
                write!(f, "{} must be a port number, not {:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a config from any source of variables, `from_env` being the usual one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let port = get(PORT_VAR)?;
        let port = port.trim().parse().map_err(|_| ConfigError::Invalid {
            var: PORT_VAR,
            value: port.clone(),
        })?;

        Ok(Self {
            port,
            mongodb_uri: get(MONGODB_URI_VAR)?,
        })
    }

    pub fn bind_addr(&self) -> (&'static str, u16) {
        ("0.0.0.0", self.port)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| vars.get(k).cloned()
    }

    #[test]
    fn reads_both_vars() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "3001"),
            ("MONGODB_URI", "mongodb://localhost:27017/phonebook"),
        ]))
        .expect("config should load");

        assert_eq!(config.port, 3001);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017/phonebook");
        assert_eq!(config.bind_addr(), ("0.0.0.0", 3001));
    }

    #[test]
    fn missing_vars_are_named() {
        assert_eq!(
            Config::from_lookup(lookup(&[("MONGODB_URI", "mongodb://localhost")])),
            Err(ConfigError::Missing("PORT"))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("PORT", "3001"), ("MONGODB_URI", "  ")])),
            Err(ConfigError::Missing("MONGODB_URI"))
        );
    }

    #[test]
    fn port_must_be_a_port() {
        let err = Config::from_lookup(lookup(&[
            ("PORT", "eighty"),
            ("MONGODB_URI", "mongodb://localhost"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "PORT",
                value: "eighty".to_string()
            }
        );
        assert!(err.to_string().contains("PORT"));
    }
}
