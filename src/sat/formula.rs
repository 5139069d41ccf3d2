use std::clone::Clone;
use std::fmt::Debug;
use std::hash::Hash;

use super::clause::Clause;
use super::var::Lit;

/// Classification of a formula at one recursion level. `Satisfied` and
/// `Conflict` are the only terminal states of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Satisfied,
    Conflict,
    Undetermined,
}

/// A conjunction of clauses. Clause order carries no meaning but is kept
/// fixed so that unit, pure, and branch scans are deterministic. A formula
/// is never mutated; simplification yields a fresh value, so each branch
/// of the search owns an independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula<T: PartialEq + Eq + Hash + Debug + Clone> {
    clauses: Vec<Clause<T>>,
}

impl<T: PartialEq + Eq + Hash + Debug + Clone> Formula<T> {
    pub fn new(clauses: Vec<Clause<T>>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause<T>> {
        self.clauses.iter()
    }

    /// An empty formula is satisfied, an empty clause is a conflict,
    /// anything else is still open.
    pub fn status(&self) -> Status {
        if self.clauses.is_empty() {
            Status::Satisfied
        } else if self.clauses.iter().any(|c| c.is_empty()) {
            Status::Conflict
        } else {
            Status::Undetermined
        }
    }

    /// The formula that results from fixing `lit` to true: clauses
    /// containing `lit` are satisfied and dropped, the complement of `lit`
    /// is removed from every surviving clause. Total over any literal,
    /// including ones that never occur in the formula.
    pub fn assign(&self, lit: &Lit<T>) -> Self {
        let negated = lit.negate();
        Self {
            clauses: self
                .clauses
                .iter()
                .filter(|c| !c.contains(lit))
                .map(|c| c.without(&negated))
                .collect(),
        }
    }
}

#[cfg(test)]
mod formula_test {
    use super::{Formula, Status};
    use crate::sat::clause::Clause;
    use crate::sat::var::Lit;

    #[test]
    fn status_of_empty_formula_is_satisfied() {
        let formula: Formula<&str> = Formula::new(vec![]);
        assert_eq!(formula.status(), Status::Satisfied);
    }

    #[test]
    fn status_with_empty_clause_is_conflict() {
        let formula = Formula::new(vec![
            Clause::new(vec![Lit::pos("a")]),
            Clause::new(vec![]),
        ]);
        assert_eq!(formula.status(), Status::Conflict);
    }

    #[test]
    fn status_otherwise_undetermined() {
        let formula = Formula::new(vec![Clause::new(vec![Lit::pos("a"), Lit::neg("b")])]);
        assert_eq!(formula.status(), Status::Undetermined);
    }

    #[test]
    fn assign_drops_satisfied_and_strips_complement() {
        // (a ∨ b) ∧ (¬a ∨ c) ∧ (b ∨ c) under a := true
        let formula = Formula::new(vec![
            Clause::new(vec![Lit::pos("a"), Lit::pos("b")]),
            Clause::new(vec![Lit::neg("a"), Lit::pos("c")]),
            Clause::new(vec![Lit::pos("b"), Lit::pos("c")]),
        ]);
        let simplified = formula.assign(&Lit::pos("a"));
        let expected = Formula::new(vec![
            Clause::new(vec![Lit::pos("c")]),
            Clause::new(vec![Lit::pos("b"), Lit::pos("c")]),
        ]);
        assert_eq!(simplified, expected);
    }

    #[test]
    fn assign_can_empty_a_clause() {
        let formula = Formula::new(vec![Clause::new(vec![Lit::neg("a")])]);
        let simplified = formula.assign(&Lit::pos("a"));
        assert_eq!(simplified.status(), Status::Conflict);
    }

    #[test]
    fn assign_with_absent_literal_is_identity() {
        let formula = Formula::new(vec![Clause::new(vec![Lit::pos("a"), Lit::neg("b")])]);
        assert_eq!(formula.assign(&Lit::pos("z")), formula);
    }
}
