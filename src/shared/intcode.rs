// Tape programs and the simulator that runs them.

use crate::shared::error::TapeError;
use log::{debug, trace};
use num_derive::FromPrimitive;
use num_traits::cast::FromPrimitive;
use std::convert::TryFrom;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const OUTPUT_ADDR: usize = 0;
pub const NOUN_ADDR: usize = 1;
pub const VERB_ADDR: usize = 2;

// Opcode words understood by the simulator.
#[derive(Clone,Copy,Debug,FromPrimitive)]
enum Opcode {
    Add = 1,
    Multiply = 2,
    Halt = 99,
}

/// A decoded instruction word.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum Instruction {
    Add,
    Multiply,
    Halt,
    Invalid(i64),
}

impl Instruction {
    pub fn decode(word: i64) -> Self {
        match Opcode::from_i64(word) {
            Some(Opcode::Add) => Instruction::Add,
            Some(Opcode::Multiply) => Instruction::Multiply,
            Some(Opcode::Halt) => Instruction::Halt,
            None => Instruction::Invalid(word),
        }
    }

    // Combine two operands for the arithmetic instruction at `pos`.
    pub fn apply(self, pos: usize, lhs: i64, rhs: i64)
                 -> Result<i64, TapeError> {
        let result = match self {
            Instruction::Add => lhs.checked_add(rhs),
            Instruction::Multiply => lhs.checked_mul(rhs),
            _ => return Err(TapeError::UnhandledOpcode(self)),
        };
        result.ok_or(TapeError::Overflow { pos })
    }
}

/// Values patched into the noun and verb slots before a run.
#[derive(Clone,Copy,Debug,Eq,Hash,Ord,PartialEq,PartialOrd)]
pub struct Inputs {
    pub noun: i64,
    pub verb: i64,
}

impl Inputs {
    pub fn new(noun: i64, verb: i64) -> Self {
        Inputs { noun, verb }
    }
}

/// An immutable, parsed tape. Each run works on its own copy.
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct Program {
    words: Vec<i64>,
}

impl Program {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TapeError> {
        fs::read_to_string(path)?.parse()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl From<Vec<i64>> for Program {
    fn from(words: Vec<i64>) -> Self {
        Program { words }
    }
}

impl FromStr for Program {
    type Err = TapeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let words = text.split(',')
                        .enumerate()
                        .map(|(index, token)| {
                            let token = token.trim();
                            token.parse::<i64>().map_err(|_| {
                                TapeError::Parse {
                                    index,
                                    token: token.to_string(),
                                }
                            })
                        })
                        .collect::<Result<Vec<i64>, _>>()?;
        Ok(Program { words })
    }
}

#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum SimulatorState {
    Running,
    Halted,
}

#[derive(Clone)]
pub struct Simulator {
    mem: Vec<i64>,
    pc: usize,
    steps: usize,
    state: SimulatorState,
}

impl Simulator {
    pub fn with_program(program: &Program) -> Self {
        debug!("Loaded tape of {} words", program.len());
        Simulator {
            mem: program.words.clone(),
            pc: 0,
            steps: 0,
            state: SimulatorState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulatorState::Running
    }

    // Number of arithmetic instructions executed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[cfg(test)]
    pub fn memory(&self) -> &[i64] {
        &self.mem
    }

    pub fn peek(&self, addr: usize) -> Result<i64, TapeError> {
        self.mem.get(addr)
                .copied()
                .ok_or(TapeError::OutOfBounds { pos: addr })
    }

    pub fn poke(&mut self, addr: usize, value: i64) -> Result<(), TapeError> {
        match self.mem.get_mut(addr) {
            Some(slot) => { *slot = value; Ok(()) },
            None => Err(TapeError::OutOfBounds { pos: addr }),
        }
    }

    pub fn set_inputs(&mut self, inputs: Inputs) -> Result<(), TapeError> {
        self.poke(NOUN_ADDR, inputs.noun)?;
        self.poke(VERB_ADDR, inputs.verb)
    }

    pub fn output(&self) -> Result<i64, TapeError> {
        self.peek(OUTPUT_ADDR)
    }

    pub fn run(&mut self) -> Result<i64, TapeError> {
        while self.is_running() {
            self.step()?;
        }
        self.output()
    }

    pub fn step(&mut self) -> Result<(), TapeError> {
        if !self.is_running() {
            return Ok(());
        }
        let pos = self.pc;
        let word = self.mem.get(pos)
                           .copied()
                           .ok_or(TapeError::OutOfBounds { pos })?;
        let inst = Instruction::decode(word);
        match inst {
            Instruction::Add | Instruction::Multiply => {
                let operands = self.mem.get(pos+1..pos+4)
                                       .ok_or(TapeError::OutOfBounds { pos })?;
                let (src1, src2, dest) = (operands[0], operands[1], operands[2]);
                let lhs = self.mem[self.address(pos, src1)?];
                let rhs = self.mem[self.address(pos, src2)?];
                let target = self.address(pos, dest)?;
                let value = inst.apply(pos, lhs, rhs)?;
                trace!("{:>4}: {:?} [{}]={} [{}]={} -> [{}]={}",
                       pos, inst, src1, lhs, src2, rhs, target, value);
                self.mem[target] = value;
                self.pc += 4;
                self.steps += 1;
            },
            Instruction::Halt => {
                trace!("{:>4}: {:?}", pos, inst);
                self.state = SimulatorState::Halted;
                debug!("Halted after {} steps", self.steps);
            },
            Instruction::Invalid(value) => {
                return Err(TapeError::InvalidOpcode { pos, value });
            },
        }
        Ok(())
    }

    // Resolve a positional operand of the instruction at `pos`.
    fn address(&self, pos: usize, word: i64) -> Result<usize, TapeError> {
        match usize::try_from(word) {
            Ok(addr) if addr < self.mem.len() => Ok(addr),
            _ => Err(TapeError::OutOfBounds { pos }),
        }
    }
}

impl fmt::Display for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, word) in self.mem.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

/// Run a fresh copy of `program`, patching the noun and verb slots first
/// when `inputs` is given, and return the value left at position 0.
pub fn execute(program: &Program,
               inputs: Option<Inputs>) -> Result<i64, TapeError> {
    let mut sim = Simulator::with_program(program);
    if let Some(inputs) = inputs {
        sim.set_inputs(inputs)?;
    }
    let result = sim.run()?;
    trace!("Result {} after {} steps", result, sim.steps());
    Ok(result)
}
