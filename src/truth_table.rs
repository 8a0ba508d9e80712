use crate::config::defaults;
use crate::log::targets::TRUTH_TABLE as LOG_TRUTH_TABLE;
use crate::prop_tree::{Assignment, PropTree};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
	pub inputs: Vec<bool>,
	pub output: bool,
}

/// Every assignment of a formula's free variables together with its result.
///
/// `inputs` of each row follow `header` order. Rows are in counter order, where the first
/// symbol is the least significant bit. Over [`defaults::MAX_TABLE_SYMBOLS`] symbols the table
/// is left empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TruthTable {
	pub header: Vec<String>,
	pub rows: Vec<Row>,
}

impl TruthTable {
	pub fn new(prop_tree: &PropTree) -> TruthTable {
		let header = prop_tree.symbols();
		if header.len() > defaults::MAX_TABLE_SYMBOLS {
			log::debug!(
				target: LOG_TRUTH_TABLE,
				"{} free symbols, not enumerating over more than {}",
				header.len(),
				defaults::MAX_TABLE_SYMBOLS
			);
			return TruthTable::default();
		}
		let rows = (0..1usize << header.len())
			.map(|counter| {
				let inputs: Vec<bool> = (0..header.len())
					.map(|index| (counter >> index) & 1 == 1)
					.collect();
				let assignment: Assignment = header.iter().cloned().zip(inputs.iter().copied()).collect();
				let output = prop_tree.evaluate(&assignment);
				Row { inputs, output }
			})
			.collect();
		TruthTable { header, rows }
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

impl fmt::Display for TruthTable {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let widths: Vec<usize> = self.header.iter().map(|name| name.chars().count()).collect();
		for name in &self.header {
			write!(f, "{} ", name)?;
		}
		writeln!(f, "|")?;
		for row in &self.rows {
			for (input, width) in row.inputs.iter().zip(&widths) {
				write!(f, "{:>width$} ", u8::from(*input), width = *width)?;
			}
			writeln!(f, "| {}", u8::from(row.output))?;
		}
		Ok(())
	}
}
