use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::errors::*;


pub static MIGRATIONS_DIR_ENV: &str = "MIGRATIONS_DIR";
pub static DATABASE_URL_ENV: &str = "DATABASE_URL";
pub static DEFAULT_MIGRATIONS_DIR: &str = "./migrations";
pub const DEFAULT_BATCH_SIZE: u32 = 3;


#[derive(Debug, Clone, Default)]
/// Raw command line values, before environment and defaults are applied
pub struct Flags {
    pub migrations_dir: Option<String>,
    pub database_url: Option<String>,
    pub batch: Option<String>,
}


#[derive(Clone, PartialEq)]
/// Resolved run configuration. Built once at startup, never mutated.
pub struct Configuration {
    migrations_dir: PathBuf,
    batch_size: u32,
    database_url: String,
}

impl Configuration {
    /// Merge `flags`, the environment and defaults.
    ///
    /// Precedence per field is flag > environment > default:
    ///
    /// - migrations dir: `--migrations-dir` > `MIGRATIONS_DIR` > `./migrations`
    /// - batch size: `--batch` > `3`
    /// - database url: `--db-url` > `DATABASE_URL` > error
    ///
    /// Empty values count as unset. `env` looks up a variable by name.
    pub fn resolve<F>(flags: &Flags, env: F) -> Result<Configuration>
        where F: Fn(&str) -> Option<String>
    {
        let migrations_dir = non_empty(flags.migrations_dir.clone())
            .or_else(|| non_empty(env(MIGRATIONS_DIR_ENV)))
            .unwrap_or_else(|| DEFAULT_MIGRATIONS_DIR.to_string());

        let batch_size = match non_empty(flags.batch.clone()) {
            Some(ref raw) => parse_batch_size(raw)?,
            None => DEFAULT_BATCH_SIZE,
        };

        let database_url = match non_empty(flags.database_url.clone())
            .or_else(|| non_empty(env(DATABASE_URL_ENV)))
        {
            Some(url) => url,
            None => bail_fmt!(ErrorKind::Config,
                              "No database connection provided. Specify `--db-url` or set `{}`",
                              DATABASE_URL_ENV),
        };

        Ok(Configuration {
            migrations_dir: PathBuf::from(migrations_dir),
            batch_size,
            database_url,
        })
    }

    /// Resolve against the process environment
    pub fn from_env(flags: &Flags) -> Result<Configuration> {
        Self::resolve(flags, |key| env::var(key).ok())
    }

    /// Migrations directory, as given. May be relative.
    pub fn migrations_dir(&self) -> &Path {
        &self.migrations_dir
    }

    /// Number of single-step engine calls to attempt, always >= 1
    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Database url with any password masked, for logging
    pub fn redacted_database_url(&self) -> String {
        redact_url(&self.database_url)
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("migrations_dir", &self.migrations_dir)
            .field("batch_size", &self.batch_size)
            .field("database_url", &self.redacted_database_url())
            .finish()
    }
}


fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|s| if s.trim().is_empty() { None } else { Some(s) })
}


/// Batch sizes below one are rejected rather than treated as a no-op
fn parse_batch_size(raw: &str) -> Result<u32> {
    let n = raw.trim().parse::<i64>()
        .chain_err(|| format_err!(ErrorKind::Config,
                                  "Invalid `--batch` value `{}`, expected a positive integer", raw))?;
    if n < 1 || n > i64::from(u32::MAX) {
        bail_fmt!(ErrorKind::Config, "`--batch` must be between 1 and {}, got {}", u32::MAX, n);
    }
    Ok(n as u32)
}


/// Mask the password component of a connection string
pub fn redact_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("****"));
            }
            url.to_string()
        }
        Err(_) => "<unparseable url>".to_string(),
    }
}
