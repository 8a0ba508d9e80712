//! Propositional formulas: parsing, evaluation and truth tables.
//!
//! Formulas are written with `∧ ∨ ¬ → ← ↔` and parentheses, or with the aliases `and`, `or`,
//! `not`, `implies`/`impl`/`->`, `<-` and `<->`/`==` (case-insensitive). `1` and `0` are the
//! constants; every other word is a variable.
//!
//! Parsing runs tokenize, group, NOT fusion and one split per precedence class before the
//! shape check that builds the [`PropTree`]. NOT binds tightest, then AND, OR, the two
//! implications, and IFF; each class associates to the left. Unbalanced parentheses are
//! absorbed rather than rejected.

pub mod config;
pub mod error;
pub mod group;
mod log;
pub mod precedence;
pub mod prop_tree;
pub mod token;
pub mod truth_table;

pub use error::ParseError;
pub use prop_tree::{Assignment, PropTree};
pub use truth_table::{Row, TruthTable};

pub fn parse(string: &str) -> Result<PropTree, ParseError> {
	PropTree::from_string(string)
}
