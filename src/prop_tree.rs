use crate::config::{self, defaults};
use crate::error::ParseError;
use crate::group::{self, TokenOrGroup};
use crate::log::targets::REFORMAT as LOG_REFORMAT;
use crate::precedence;
use crate::token::{self, Connective};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub type Assignment = HashMap<String, bool>;

/// A parsed formula.
///
/// Nodes are stored children first, so every operand id is smaller than its parent's and the
/// root is always the last node. A tree is never empty and never changes after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropTree {
	nodes: Vec<LexicalUnit>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexicalUnit {
	Atom(String),
	Not(usize),
	And(usize, usize),
	Or(usize, usize),
	Imply(usize, usize),
	Converse(usize, usize),
	Xnor(usize, usize),
}

impl LexicalUnit {
	pub fn connective(&self) -> Option<Connective> {
		match self {
			LexicalUnit::Atom(_) => None,
			LexicalUnit::Not(_) => Some(Connective::Not),
			LexicalUnit::And(_, _) => Some(Connective::And),
			LexicalUnit::Or(_, _) => Some(Connective::Or),
			LexicalUnit::Imply(_, _) => Some(Connective::Imply),
			LexicalUnit::Converse(_, _) => Some(Connective::Converse),
			LexicalUnit::Xnor(_, _) => Some(Connective::Xnor),
		}
	}

	pub fn operands(&self) -> Vec<usize> {
		match self {
			LexicalUnit::Atom(_) => Vec::new(),
			LexicalUnit::Not(a) => vec![*a],
			LexicalUnit::And(a, b)
			| LexicalUnit::Or(a, b)
			| LexicalUnit::Imply(a, b)
			| LexicalUnit::Converse(a, b)
			| LexicalUnit::Xnor(a, b) => vec![*a, *b],
		}
	}
}

// a bare operator or an empty group cannot stand in for an operand
fn missing_operand(unit: &TokenOrGroup) -> bool {
	match unit {
		TokenOrGroup::Connective(_, _) => true,
		TokenOrGroup::Group(units) => units.is_empty(),
		TokenOrGroup::Ident(_) => false,
	}
}

impl PropTree {
	fn push_node(&mut self, lexical_unit: LexicalUnit) -> usize {
		let id = self.nodes.len();
		self.nodes.push(lexical_unit);
		id
	}

	pub fn root(&self) -> usize {
		self.nodes.len() - 1
	}

	// ids come from root() and LexicalUnit::operands()
	pub fn node(&self, id: usize) -> Option<&LexicalUnit> {
		self.nodes.get(id)
	}

	/// Parses `string` into a tree.
	///
	/// Tokenizing, grouping, NOT fusion and the four precedence passes accept anything; the
	/// only failures come from the final shape check, one [`ParseError`] per kind of arity
	/// mismatch.
	pub fn from_string(string: &str) -> Result<PropTree, ParseError> {
		let units = group::fuse_unary(group::group(token::tokenize(string)));
		let units = precedence::split_all(units);
		let mut result = PropTree { nodes: Vec::new() };
		result.reformat(TokenOrGroup::Group(units))?;
		log::trace!(target: LOG_REFORMAT, "{:?} -> {}", string, result);
		Ok(result)
	}

	fn reformat(&mut self, unit: TokenOrGroup) -> Result<usize, ParseError> {
		match unit {
			TokenOrGroup::Ident(name) => Ok(self.push_node(LexicalUnit::Atom(name))),
			TokenOrGroup::Connective(_, offset) => Err(ParseError::OperatorWithoutOperand { offset }),
			TokenOrGroup::Group(units) => self.reformat_group(units),
		}
	}

	fn reformat_group(&mut self, units: Vec<TokenOrGroup>) -> Result<usize, ParseError> {
		let mut units = units.into_iter();
		match (units.next(), units.next(), units.next(), units.next()) {
			(None, _, _, _) => Err(ParseError::EmptyExpression),
			(Some(unit), None, _, _) => self.reformat(unit),
			(Some(first), Some(operand), None, _) => {
				let offset = first.offset().or_else(|| operand.offset());
				match first {
					TokenOrGroup::Connective(Connective::Not, _) if !operand.is_connective() => {
						let a = self.reformat(operand)?;
						Ok(self.push_node(LexicalUnit::Not(a)))
					}
					_ => Err(ParseError::MalformedUnary { offset }),
				}
			}
			(Some(left), Some(middle), Some(right), None) => {
				let offset = middle.offset().or_else(|| left.offset()).or_else(|| right.offset());
				let malformed = ParseError::MalformedBinary { offset };
				let build: fn(usize, usize) -> LexicalUnit = match middle {
					TokenOrGroup::Connective(Connective::And, _) => LexicalUnit::And,
					TokenOrGroup::Connective(Connective::Or, _) => LexicalUnit::Or,
					TokenOrGroup::Connective(Connective::Imply, _) => LexicalUnit::Imply,
					TokenOrGroup::Connective(Connective::Converse, _) => LexicalUnit::Converse,
					TokenOrGroup::Connective(Connective::Xnor, _) => LexicalUnit::Xnor,
					_ => return Err(malformed),
				};
				if missing_operand(&left) || missing_operand(&right) {
					return Err(malformed);
				}
				let a = self.reformat(left)?;
				let b = self.reformat(right)?;
				Ok(self.push_node(build(a, b)))
			}
			_ => Err(ParseError::MalformedExpression),
		}
	}

	/// Evaluates the formula. Unbound atoms are false, except the literal `1`.
	pub fn evaluate(&self, assignment: &Assignment) -> bool {
		self.evaluate_recurse(self.root(), assignment)
	}

	fn evaluate_recurse(&self, id: usize, assignment: &Assignment) -> bool {
		match &self.nodes[id] {
			LexicalUnit::Atom(name) => match assignment.get(name) {
				Some(value) => *value,
				None => name == defaults::TRUE_LITERAL,
			},
			LexicalUnit::Not(a) => !self.evaluate_recurse(*a, assignment),
			LexicalUnit::And(a, b) => {
				self.evaluate_recurse(*a, assignment) && self.evaluate_recurse(*b, assignment)
			}
			LexicalUnit::Or(a, b) => {
				self.evaluate_recurse(*a, assignment) || self.evaluate_recurse(*b, assignment)
			}
			LexicalUnit::Imply(a, b) => {
				!self.evaluate_recurse(*a, assignment) || self.evaluate_recurse(*b, assignment)
			}
			LexicalUnit::Converse(a, b) => {
				!self.evaluate_recurse(*b, assignment) || self.evaluate_recurse(*a, assignment)
			}
			LexicalUnit::Xnor(a, b) => {
				self.evaluate_recurse(*a, assignment) == self.evaluate_recurse(*b, assignment)
			}
		}
	}

	fn symbols_recurse<'a>(&'a self, id: usize, symbols: &mut Vec<&'a str>) {
		match &self.nodes[id] {
			LexicalUnit::Atom(name) => {
				if !config::is_literal(name) && !symbols.contains(&name.as_str()) {
					symbols.push(name);
				}
			}
			lexical_unit => {
				for operand in lexical_unit.operands() {
					self.symbols_recurse(operand, symbols);
				}
			}
		}
	}

	/// Free variables in order of first appearance, left to right.
	pub fn symbols(&self) -> Vec<String> {
		let mut symbols = Vec::new();
		self.symbols_recurse(self.root(), &mut symbols);
		symbols.into_iter().map(str::to_owned).collect()
	}

	fn to_linear_form_recurse(&self, id: usize, result: &mut String) {
		let lexical_unit = &self.nodes[id];
		match lexical_unit {
			LexicalUnit::Atom(name) => result.push_str(name),
			_ => {
				for operand in lexical_unit.operands() {
					self.to_linear_form_recurse(operand, result);
				}
			}
		}
		if let Some(connective) = lexical_unit.connective() {
			result.push(connective.symbol());
		}
	}

	// operands then operator, no separators: for display only, it does not re-parse
	pub fn to_linear_form(&self) -> String {
		let mut result = String::new();
		self.to_linear_form_recurse(self.root(), &mut result);
		result
	}
}

impl FromStr for PropTree {
	type Err = ParseError;

	fn from_str(string: &str) -> Result<Self, Self::Err> {
		PropTree::from_string(string)
	}
}

impl fmt::Display for PropTree {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.to_linear_form())
	}
}
