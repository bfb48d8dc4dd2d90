/*!
Apply or roll back database migrations in fixed-size batches.

The pieces used by the `migrate-batch` binary:

- [`Configuration`] merges command line flags, the environment and defaults
- [`navigator`] resolves and enters the migrations directory
- [`BatchRunner`] drives up to `batch_size` single steps of a [`MigrationEngine`],
  stopping early once the engine reports there is nothing left to do
- [`MigrantEngine`] is the `migrant_lib` backed engine

```rust,no_run
# extern crate migrate_batch;
use migrate_batch::{BatchRunner, Configuration, Direction, Flags, navigator};

# fn run() -> migrate_batch::Result<()> {
let config = Configuration::from_env(&Flags::default())?;
let dir = navigator::enter_directory(config.migrations_dir())?;
let summary = BatchRunner::with_config(&config)
    .source(&dir)
    .direction(Direction::Up)
    .apply()?;
println!("applied {} of {}", summary.completed, summary.requested);
# Ok(())
# }
# fn main() { run().unwrap() }
```
*/
#![recursion_limit = "1024"]
#[macro_use] extern crate error_chain;
#[macro_use] extern crate log;

use std::fmt;

#[macro_use]
mod macros;
mod errors;
mod config;
mod engine;
mod runner;
pub mod navigator;

pub use crate::errors::*;
pub use crate::config::{
    Configuration, Flags, redact_url,
    DATABASE_URL_ENV, DEFAULT_BATCH_SIZE, DEFAULT_MIGRATIONS_DIR, MIGRATIONS_DIR_ENV,
};
pub use crate::engine::MigrantEngine;
pub use crate::runner::{BatchRunner, MigrationEngine, StepOutcome, Summary};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents direction to apply migrations.
/// `Up`   -> apply the next pending migration
/// `Down` -> roll back the most recently applied migration
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Read the direction from the first command line argument, which must
    /// be exactly `--up` or `--down`
    pub fn from_first_arg<I, S>(args: I) -> Option<Direction>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        match args.into_iter().next() {
            Some(ref arg) if arg.as_ref() == "--up" => Some(Direction::Up),
            Some(ref arg) if arg.as_ref() == "--down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Used in per-step progress lines, `Migration 2 applied.`
    pub fn past_tense(&self) -> &'static str {
        match *self {
            Direction::Up => "applied",
            Direction::Down => "rolled back",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Direction::*;
        match *self {
            Up   => write!(f, "up"),
            Down => write!(f, "down"),
        }
    }
}

impl From<Direction> for migrant_lib::Direction {
    fn from(direction: Direction) -> migrant_lib::Direction {
        match direction {
            Direction::Up => migrant_lib::Direction::Up,
            Direction::Down => migrant_lib::Direction::Down,
        }
    }
}
