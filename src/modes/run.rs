use crate::modes::TapeMode;
use crate::shared::error::TapeError;
use crate::shared::intcode::{execute, Inputs, Program};
use anyhow::Error;

// The "1202 program alarm" state.
const DEFAULT_NOUN: i64 = 12;
const DEFAULT_VERB: i64 = 2;

#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub struct RunConfig {
    pub noun: i64,
    pub verb: i64,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig { noun: DEFAULT_NOUN, verb: DEFAULT_VERB }
    }
}

impl RunConfig {
    pub fn with_overrides(noun: Option<i64>, verb: Option<i64>) -> Self {
        let defaults = Self::default();
        RunConfig {
            noun: noun.unwrap_or(defaults.noun),
            verb: verb.unwrap_or(defaults.verb),
        }
    }
}

pub struct Runner {
    config: RunConfig,
}

impl TapeMode for Runner {
    fn execute(&mut self, program: &Program) -> Result<(), Error> {
        println!("Running tape with noun {} and verb {}...",
                 self.config.noun, self.config.verb);
        println!("Result: {}", self.evaluate(program)?);
        Ok(())
    }
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Runner { config }
    }

    fn evaluate(&self, program: &Program) -> Result<i64, TapeError> {
        execute(program,
                Some(Inputs::new(self.config.noun, self.config.verb)))
    }
}
