use std::clone::Clone;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

use super::var::Lit;

/// A disjunction of literals with set semantics: construction drops
/// duplicates, order of first occurrence is kept so that scans over the
/// clause stay deterministic. Complementary literals may coexist; a
/// tautological clause is not collapsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause<T: PartialEq + Eq + Hash + Debug + Clone> {
    lits: Vec<Lit<T>>,
}

impl<T: PartialEq + Eq + Hash + Debug + Clone> Clause<T> {
    pub fn new(lits: Vec<Lit<T>>) -> Self {
        Self {
            lits: lits.into_iter().unique().collect(),
        }
    }

    pub fn contains(&self, lit: &Lit<T>) -> bool {
        self.lits.contains(lit)
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn lits(&self) -> impl Iterator<Item = &Lit<T>> {
        self.lits.iter()
    }

    /// A copy of this clause with `lit` removed, if present.
    pub fn without(&self, lit: &Lit<T>) -> Self {
        Self {
            lits: self
                .lits
                .iter()
                .filter(|l| *l != lit)
                .cloned()
                .collect(),
        }
    }
}
