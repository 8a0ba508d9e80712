extern crate proptable;

use proptable::prop_tree::PropTree;
use proptable::truth_table::TruthTable;

fn disp(string: &str) {
	println!("{}", string);
	match PropTree::from_string(string) {
		Ok(prop_tree) => {
			println!("{}", prop_tree);
			print!("{}", TruthTable::new(&prop_tree));
		}
		Err(err) => println!("{}", err),
	}
	println!();
}

fn main() {
	for input_str in [
		"b ∨ (b ∧ ¬a) ∨ a",
		"a or not a",
		"(a -> b) <-> (not b -> not a)",
		"a and not (a or b)",
		"p <- q",
		"1 ∨ 0",
		"∧ a",
	] {
		disp(input_str);
	}
}
