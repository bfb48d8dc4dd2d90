use std::path::{Path, PathBuf};

use crate::config::Configuration;
use crate::engine::MigrantEngine;
use crate::errors::*;
use crate::Direction;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of a single engine step that did not fail
pub enum StepOutcome {
    /// One migration was applied or rolled back
    Applied,
    /// Nothing left to do in the requested direction
    NoChange,
}


/// A handle on a migration engine, opened against a migrations
/// source and a target database.
pub trait MigrationEngine {
    /// Apply the next pending migration (`Up`) or roll back the most
    /// recently applied one (`Down`).
    fn step(&mut self, direction: Direction) -> Result<StepOutcome>;

    /// Release the handle. Called exactly once per opened engine.
    fn close(&mut self) -> Result<()>;
}


#[derive(Debug, Clone, PartialEq, Eq)]
/// What a batch did
pub struct Summary {
    pub direction: Direction,
    pub requested: u32,
    pub completed: u32,
    /// The engine ran out of migrations before the batch was exhausted
    pub stopped_early: bool,
}


#[derive(Debug, Clone)]
/// Batch applicator
pub struct BatchRunner<'a> {
    config: &'a Configuration,
    source: PathBuf,
    direction: Direction,
}

impl<'a> BatchRunner<'a> {
    /// Initialize a new `BatchRunner` with a given config.
    /// The migrations source defaults to `config.migrations_dir()`.
    pub fn with_config(config: &'a Configuration) -> Self {
        Self {
            config,
            source: config.migrations_dir().to_path_buf(),
            direction: Direction::Up,
        }
    }

    /// Set the migrations source directory, normally the absolute path
    /// returned by `navigator::enter_directory`
    pub fn source<T: AsRef<Path>>(mut self, dir: T) -> Self {
        self.source = dir.as_ref().to_path_buf();
        self
    }

    /// Set `direction`. Default is `Up`.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Run the batch against a `migrant_lib` backed engine
    pub fn apply(self) -> Result<Summary> {
        self.run(MigrantEngine::open)
    }

    /// Run the batch against the engine produced by `open`.
    ///
    /// At most `batch_size` steps are attempted. A `NoChange` step ends the
    /// batch successfully, a failed step ends it with that error. The engine
    /// is closed once on every path after it has been opened.
    pub fn run<E, F>(self, open: F) -> Result<Summary>
        where E: MigrationEngine,
              F: FnOnce(&Path, &str) -> Result<E>,
    {
        debug!("Opening migration engine for {} against {}",
               self.source.display(), self.config.redacted_database_url());
        let mut engine = open(&self.source, self.config.database_url())?;

        let result = run_steps(&mut engine, self.direction, self.config.batch_size());
        let closed = engine.close();

        match (result, closed) {
            (Ok(summary), Ok(())) => Ok(summary),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                warn!("Failed to close migration engine: {}", close_err);
                Err(e)
            }
        }
    }
}


fn run_steps<E: MigrationEngine>(engine: &mut E, direction: Direction, batch_size: u32) -> Result<Summary> {
    let mut summary = Summary {
        direction,
        requested: batch_size,
        completed: 0,
        stopped_early: false,
    };

    for i in 1..=batch_size {
        match engine.step(direction)? {
            StepOutcome::Applied => {
                summary.completed = i;
                println!("Migration {} {}.", i, direction.past_tense());
            }
            StepOutcome::NoChange => {
                info!("No further `{}` migrations available", direction);
                summary.stopped_early = true;
                break;
            }
        }
    }
    Ok(summary)
}
