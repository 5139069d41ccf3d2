use std::clone::Clone;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Var<T: PartialEq + Eq + Hash + Debug + Clone> {
    name: T,
}

impl<T: PartialEq + Eq + Hash + Debug + Clone> Var<T> {
    pub fn new(name: T) -> Self {
        Self { name }
    }

    pub fn get_name(&self) -> &T {
        &self.name
    }
}

/// A variable with a polarity. Two literals are complementary iff they
/// share a variable and disagree on polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit<T: PartialEq + Eq + Hash + Debug + Clone> {
    var: Var<T>,
    negated: bool,
}

impl<T: PartialEq + Eq + Hash + Debug + Clone> Lit<T> {
    pub fn pos(name: T) -> Self {
        Self {
            var: Var::new(name),
            negated: false,
        }
    }

    pub fn neg(name: T) -> Self {
        Self {
            var: Var::new(name),
            negated: true,
        }
    }

    /// Same variable, flipped polarity.
    pub fn negate(&self) -> Self {
        Self {
            var: self.var.clone(),
            negated: !self.negated,
        }
    }

    pub fn get_var(&self) -> &Var<T> {
        &self.var
    }

    pub fn get_name(&self) -> &T {
        self.var.get_name()
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}
