mod sat;

use sat::dpll::Solver;
use sat::parse::{parse_formula, ParseError};

/// The fixed sample formulas of the original test driver, one clause
/// specification per string.
const TEST_CASES: [&[&str]; 4] = [
    &["A B", "-A", "-B"],
    &["A B", "-A C"],
    &["A", "-A"],
    &["A B C", "-B C"],
];

fn verdict(clause_specs: &[&str]) -> Result<&'static str, ParseError> {
    let formula = parse_formula(clause_specs)?;
    if Solver::new(formula).run() {
        Ok("SATISFIABLE")
    } else {
        Ok("UNSATISFIABLE")
    }
}

fn main() {
    env_logger::init();

    for (i, case) in TEST_CASES.iter().enumerate() {
        match verdict(case) {
            Ok(v) => println!("Test Case {}: {}", i + 1, v),
            Err(e) => eprintln!("Test Case {}: {}", i + 1, e),
        }
    }
}

#[cfg(test)]
mod scenario_test {
    use super::verdict;

    #[test]
    fn case_one_is_unsat() {
        assert_eq!(verdict(&["A B", "-A", "-B"]).unwrap(), "UNSATISFIABLE");
    }

    #[test]
    fn case_two_is_sat() {
        assert_eq!(verdict(&["A B", "-A C"]).unwrap(), "SATISFIABLE");
    }

    #[test]
    fn case_three_is_unsat() {
        assert_eq!(verdict(&["A", "-A"]).unwrap(), "UNSATISFIABLE");
    }

    #[test]
    fn case_four_is_sat() {
        assert_eq!(verdict(&["A B C", "-B C"]).unwrap(), "SATISFIABLE");
    }
}
