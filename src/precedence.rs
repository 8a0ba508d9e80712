use crate::group::{render, TokenOrGroup};
use crate::log::targets::PRECEDENCE as LOG_PRECEDENCE;
use crate::token::Connective;

// loosest first, NOT is already fused by the time these run
pub const PRECEDENCE_CLASSES: [&[Connective]; 4] = [
	&[Connective::Xnor],
	&[Connective::Imply, Connective::Converse],
	&[Connective::Or],
	&[Connective::And],
];

fn operand(mut units: Vec<TokenOrGroup>) -> TokenOrGroup {
	match units.len() {
		1 => units.remove(0),
		_ => TokenOrGroup::Group(units),
	}
}

// A - B - C <<< op - D
// left side is split again for left associativity, right side holds no op of this class
fn split_top(mut units: Vec<TokenOrGroup>, class: &[Connective]) -> Vec<TokenOrGroup> {
	let position = units.iter().rposition(|unit| match unit {
		TokenOrGroup::Connective(connective, _) => class.contains(connective),
		_ => false,
	});
	match position {
		None => units,
		Some(i) => {
			let right = units.split_off(i + 1);
			let op = units.remove(i);
			let left = split_top(units, class);
			vec![operand(left), op, operand(right)]
		}
	}
}

/// Groups every top-level chain of `class` operators into left-associative binary triples.
///
/// Nested groups are processed first and substituted back in place. Each split yields
/// `[left, op, right]` at the rightmost operator of the class; a missing operand becomes an
/// empty group and is rejected later, when the tree is built.
pub fn split(units: Vec<TokenOrGroup>, class: &[Connective]) -> Vec<TokenOrGroup> {
	let units = units
		.into_iter()
		.map(|unit| match unit {
			TokenOrGroup::Group(inner) => TokenOrGroup::Group(split(inner, class)),
			other => other,
		})
		.collect();
	split_top(units, class)
}

pub fn split_all(units: Vec<TokenOrGroup>) -> Vec<TokenOrGroup> {
	PRECEDENCE_CLASSES.iter().fold(units, |units, class| {
		let units = split(units, class);
		log::trace!(target: LOG_PRECEDENCE, "{:?}: {}", class, render(&units));
		units
	})
}
