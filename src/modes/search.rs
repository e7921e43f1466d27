use crate::modes::TapeMode;
use crate::shared::intcode::{Inputs, Program};
use crate::shared::solver::{find_inputs, SlotRange};
use anyhow::Error;
use std::collections::BTreeSet;

pub struct Search {
    nouns: SlotRange,
    verbs: SlotRange,
    target: i64,
}

impl TapeMode for Search {
    fn execute(&mut self, program: &Program) -> Result<(), Error> {
        println!("Solving tape...");
        let matches = find_inputs(program, &self.nouns, &self.verbs,
                                  self.target)?;
        for line in Self::describe(&matches) {
            println!("{}", line);
        }
        Ok(())
    }
}

impl Search {
    pub fn new(nouns: SlotRange, verbs: SlotRange, target: i64) -> Self {
        Search { nouns, verbs, target }
    }

    // A single match is reported on its own; several are listed.
    fn describe(matches: &BTreeSet<Inputs>) -> Vec<String> {
        let line = |i: &Inputs| format!("Noun: {}, Verb: {}", i.noun, i.verb);
        if matches.len() == 1 {
            matches.iter().map(line).collect()
        } else {
            let mut lines = vec!["Found multiple potential solutions:".to_string()];
            lines.extend(matches.iter().map(|i| format!("  {}", line(i))));
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(i64, i64)]) -> BTreeSet<Inputs> {
        pairs.iter().map(|&(n, v)| Inputs::new(n, v)).collect()
    }

    #[test]
    fn test_describe_single() {
        assert_eq!(vec!["Noun: 12, Verb: 2"],
                   Search::describe(&inputs(&[(12, 2)])));
    }

    #[test]
    fn test_describe_multiple() {
        assert_eq!(vec!["Found multiple potential solutions:",
                        "  Noun: 0, Verb: 3",
                        "  Noun: 3, Verb: 0"],
                   Search::describe(&inputs(&[(3, 0), (0, 3)])));
    }

    #[test]
    fn test_execute_without_solution() {
        let program: Program = "1,0,0,0,99".parse().unwrap();
        let mut search = Search::new(SlotRange::fixed(0), SlotRange::fixed(0),
                                     5);
        let err = search.execute(&program).unwrap_err();
        assert_eq!("no matching noun/verb combination found for 5",
                   err.to_string());
    }
}
