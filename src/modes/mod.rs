mod run;
mod search;

use crate::shared::intcode::Program;
use anyhow::{Context, Error};

/// Settings gathered from the command line.
#[derive(Debug,Default)]
pub struct Config {
    pub input: String,
    pub noun: Option<i64>,
    pub verb: Option<i64>,
    pub target: Option<i64>,
    pub verbose: bool,
}

pub trait TapeMode {
    fn execute(&mut self, program: &Program) -> Result<(), Error>;
}

pub fn run(config: &Config) -> Result<(), Error> {
    let program = Program::from_path(&config.input)
        .with_context(|| format!("loading tape from {}", config.input))?;
    select(config).execute(&program)
}

fn select(config: &Config) -> Box<dyn TapeMode> {
    match config.target {
        None => Box::new(run::Runner::new(
            run::RunConfig::with_overrides(config.noun, config.verb))),
        Some(target) => Box::new(search::Search::new(
            config.noun.into(), config.verb.into(), target)),
    }
}
