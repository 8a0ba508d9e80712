pub mod targets {
	pub const TOKENIZE: &str = "tokenize";
	pub const GROUP: &str = "group";
	pub const PRECEDENCE: &str = "precedence";
	pub const REFORMAT: &str = "reformat";
	pub const TRUTH_TABLE: &str = "truth table";
}
