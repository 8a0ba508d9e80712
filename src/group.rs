use crate::log::targets::GROUP as LOG_GROUP;
use crate::token::{Connective, Token};
use std::fmt;

// parentheses are consumed by grouping, so they never appear here
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenOrGroup {
	Ident(String),
	Connective(Connective, usize),
	Group(Vec<TokenOrGroup>),
}

impl TokenOrGroup {
	pub fn is_connective(&self) -> bool {
		matches!(self, TokenOrGroup::Connective(_, _))
	}

	pub fn offset(&self) -> Option<usize> {
		match self {
			TokenOrGroup::Connective(_, offset) => Some(*offset),
			_ => None,
		}
	}
}

impl fmt::Display for TokenOrGroup {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			TokenOrGroup::Ident(name) => write!(f, "{}", name),
			TokenOrGroup::Connective(connective, _) => write!(f, "{}", connective.symbol()),
			TokenOrGroup::Group(units) => write!(f, "({})", render(units)),
		}
	}
}

pub fn render(units: &[TokenOrGroup]) -> String {
	units
		.iter()
		.map(|unit| unit.to_string())
		.collect::<Vec<_>>()
		.join(" ")
}

// descend along trailing groups, opening fresh ones where the tail is not a group
fn insert_at_depth(context: &mut Vec<TokenOrGroup>, unit: TokenOrGroup, depth: usize) {
	if depth == 0 {
		context.push(unit);
		return;
	}
	if !matches!(context.last(), Some(TokenOrGroup::Group(_))) {
		context.push(TokenOrGroup::Group(Vec::new()));
	}
	if let Some(TokenOrGroup::Group(inner)) = context.last_mut() {
		insert_at_depth(inner, unit, depth - 1);
	}
}

/// Nests the token stream by parenthesis depth.
///
/// Never fails. A left parenthesis met while the whole context is one group reopens that
/// group instead of nesting deeper, and a right parenthesis with nothing open wraps
/// everything parsed so far in a new group. Unclosed groups are closed by the end of input.
pub fn group(tokens: Vec<Token>) -> Vec<TokenOrGroup> {
	let mut context: Vec<TokenOrGroup> = Vec::new();
	let mut depth: usize = 0;
	for token in tokens {
		let unit = match token {
			Token::LeftParenthesis { .. } => {
				depth += 1;
				while depth > 0 && matches!(context.as_slice(), [TokenOrGroup::Group(_)]) {
					if let Some(TokenOrGroup::Group(inner)) = context.pop() {
						context = inner;
					}
					depth -= 1;
				}
				continue;
			}
			Token::RightParenthesis { offset } => {
				if depth == 0 {
					log::trace!(target: LOG_GROUP, "unmatched ')' at {}, regrouping", offset);
					context = vec![TokenOrGroup::Group(context)];
				} else {
					depth -= 1;
				}
				continue;
			}
			Token::Ident { name, .. } => TokenOrGroup::Ident(name),
			Token::Connective { connective, offset } => TokenOrGroup::Connective(connective, offset),
		};
		insert_at_depth(&mut context, unit, depth);
	}
	log::trace!(target: LOG_GROUP, "grouped: {}", render(&context));
	context
}

/// Binds every NOT to its right neighbour, producing a `(¬ operand)` group.
///
/// Walks right to left, so the neighbour is already fused when the NOT is reached and a chain
/// of NOTs nests from the inside out. A NOT with nothing to its right is left bare.
pub fn fuse_unary(units: Vec<TokenOrGroup>) -> Vec<TokenOrGroup> {
	let mut fused: Vec<TokenOrGroup> = Vec::with_capacity(units.len());
	for unit in units.into_iter().rev() {
		let unit = match unit {
			TokenOrGroup::Group(inner) => TokenOrGroup::Group(fuse_unary(inner)),
			TokenOrGroup::Connective(Connective::Not, offset) => {
				let not = TokenOrGroup::Connective(Connective::Not, offset);
				match fused.pop() {
					Some(operand) => TokenOrGroup::Group(vec![not, operand]),
					None => not,
				}
			}
			other => other,
		};
		fused.push(unit);
	}
	fused.reverse();
	fused
}
