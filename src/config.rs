pub mod defaults {
	// reserved constant leaves, never collected as free variables
	pub const TRUE_LITERAL: &str = "1";
	pub const FALSE_LITERAL: &str = "0";

	// enumeration is skipped entirely above this many free variables
	pub const MAX_TABLE_SYMBOLS: usize = 4;
}

pub fn is_literal(name: &str) -> bool {
	name == defaults::TRUE_LITERAL || name == defaults::FALSE_LITERAL
}
