pub mod clause;
pub mod dpll;
pub mod formula;
pub mod parse;
pub mod var;
