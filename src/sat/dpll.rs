use std::clone::Clone;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

use super::formula::{Formula, Status};
use super::var::Lit;

/// Recursive DPLL search over immutable formula snapshots. Each call
/// checks the status gate, applies a forced simplification (unit clause,
/// then pure literal) when one exists, and otherwise splits on the first
/// literal of the first clause, trying the positive branch before the
/// negated one. Backtracking is the call stack unwinding on `false`.
#[derive(Debug, Clone)]
pub struct Solver<T: PartialEq + Eq + Hash + Debug + Clone> {
    formula: Formula<T>,
}

impl<T: PartialEq + Eq + Hash + Debug + Clone> Solver<T> {
    pub fn new(formula: Formula<T>) -> Self {
        Self { formula }
    }

    pub fn run(self) -> bool {
        Self::dpll(self.formula)
    }

    fn dpll(formula: Formula<T>) -> bool {
        match formula.status() {
            Status::Satisfied => {
                log::debug!("no clauses left, branch is satisfiable");
                return true;
            }
            Status::Conflict => {
                log::debug!("empty clause reached, backtracking");
                return false;
            }
            Status::Undetermined => {}
        }

        if let Some(unit) = Self::find_unit(&formula) {
            log::debug!("propagating unit literal {unit:?}");
            return Self::dpll(formula.assign(&unit));
        }

        if let Some(pure) = Self::find_pure(&formula) {
            log::debug!("eliminating pure literal {pure:?}");
            return Self::dpll(formula.assign(&pure));
        }

        let lit = Self::select_literal(&formula);
        log::debug!("splitting on {lit:?}");
        Self::dpll(formula.assign(&lit)) || Self::dpll(formula.assign(&lit.negate()))
    }

    /// The sole literal of the first size-one clause, in formula order.
    /// Such a literal is forced under every satisfying assignment.
    fn find_unit(formula: &Formula<T>) -> Option<Lit<T>> {
        formula
            .clauses()
            .find(|c| c.len() == 1)
            .and_then(|c| c.lits().next())
            .cloned()
    }

    /// A literal whose variable never occurs with the opposite polarity
    /// anywhere in the formula. Positive occurrences are scanned before
    /// negated ones, each in discovery order. Assigning a pure literal
    /// true satisfies every clause it occurs in and endangers none.
    fn find_pure(formula: &Formula<T>) -> Option<Lit<T>> {
        let occurrences: Vec<&Lit<T>> = formula
            .clauses()
            .flat_map(|c| c.lits())
            .unique()
            .collect();
        let positive = occurrences.iter().filter(|l| !l.is_negated());
        let negated = occurrences.iter().filter(|l| l.is_negated());
        for lit in positive.chain(negated) {
            let mixed = occurrences
                .iter()
                .any(|o| o.get_var() == lit.get_var() && o.is_negated() != lit.is_negated());
            if !mixed {
                return Some((*lit).clone());
            }
        }
        None
    }

    /// Deterministic split choice: the first literal of the first clause.
    /// Any total deterministic rule works here, this one needs no state.
    fn select_literal(formula: &Formula<T>) -> Lit<T> {
        formula
            .clauses()
            .flat_map(|c| c.lits())
            .next()
            .cloned()
            .expect("undetermined formula has a non-empty clause")
    }
}
