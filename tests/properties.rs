use proptable::{parse, Assignment, ParseError, PropTree, TruthTable};
use rstest::rstest;

// every assignment of `names`, first name least significant
fn assignments(names: &[&str]) -> Vec<Assignment> {
	(0..1usize << names.len())
		.map(|counter| {
			names
				.iter()
				.enumerate()
				.map(|(index, name)| (name.to_string(), (counter >> index) & 1 == 1))
				.collect()
		})
		.collect()
}

fn equivalent(a: &PropTree, b: &PropTree, names: &[&str]) -> bool {
	assignments(names)
		.iter()
		.all(|assignment| a.evaluate(assignment) == b.evaluate(assignment))
}

#[test]
fn evaluation_is_deterministic() {
	let prop_tree = parse("(a → b) ∧ ¬c ↔ a").unwrap();
	for assignment in assignments(&["a", "b", "c"]) {
		let first = prop_tree.evaluate(&assignment);
		assert!((0..4).all(|_| prop_tree.evaluate(&assignment) == first));
	}
}

#[rstest]
#[case("a ∧ b")]
#[case("a AND b")]
#[case("a And b")]
fn aliases_are_equivalent(#[case] input: &str) {
	let reference = parse("a and b").unwrap();
	let prop_tree = parse(input).unwrap();
	assert_eq!(prop_tree.to_linear_form(), "ab∧");
	assert!(equivalent(&reference, &prop_tree, &["a", "b"]));
}

#[test]
fn uppercase_alias_resolves_but_names_keep_case() {
	let prop_tree = parse("A AND B").unwrap();
	assert_eq!(prop_tree.symbols(), vec!["A", "B"]);
	let reference = parse("A ∧ B").unwrap();
	assert!(equivalent(&reference, &prop_tree, &["A", "B"]));
}

#[test]
fn and_binds_tighter_than_or() {
	let implicit = parse("a ∨ b ∧ c").unwrap();
	let explicit = parse("a ∨ (b ∧ c)").unwrap();
	assert!(equivalent(&implicit, &explicit, &["a", "b", "c"]));
	assert!(!equivalent(&implicit, &parse("(a ∨ b) ∧ c").unwrap(), &["a", "b", "c"]));
}

#[test]
fn implication_is_left_associative() {
	let prop_tree = parse("a → b → c").unwrap();
	assert_eq!(prop_tree.to_linear_form(), "ab→c→");
	let assignment: Assignment = [("a", true), ("b", false), ("c", true)]
		.iter()
		.map(|(name, value)| (name.to_string(), *value))
		.collect();
	assert!(prop_tree.evaluate(&assignment));
	assert!(equivalent(&prop_tree, &parse("(a → b) → c").unwrap(), &["a", "b", "c"]));
	assert!(!equivalent(&prop_tree, &parse("a → (b → c)").unwrap(), &["a", "b", "c"]));
}

#[test]
fn unbound_symbols_default_to_false() {
	let empty = Assignment::new();
	assert!(!parse("p").unwrap().evaluate(&empty));
	assert!(parse("1").unwrap().evaluate(&empty));
	assert!(!parse("0").unwrap().evaluate(&empty));
}

#[test]
fn truth_table_of_conjunction() {
	let truth_table = TruthTable::new(&parse("a ∧ b ∧ c").unwrap());
	assert_eq!(truth_table.header, vec!["a", "b", "c"]);
	assert_eq!(truth_table.rows.len(), 8);
	for row in &truth_table.rows {
		assert_eq!(row.inputs.len(), 3);
		assert_eq!(row.output, row.inputs[0] && row.inputs[1] && row.inputs[2]);
	}
}

#[test]
fn truth_table_without_variables() {
	let truth_table = TruthTable::new(&parse("1 ∨ 0").unwrap());
	assert!(truth_table.header.is_empty());
	assert_eq!(truth_table.rows.len(), 1);
	assert!(truth_table.rows[0].inputs.is_empty());
	assert!(truth_table.rows[0].output);
}

#[test]
fn truth_table_over_cap_is_empty() {
	let truth_table = TruthTable::new(&parse("a ∨ b ∨ c ∨ d ∨ e").unwrap());
	assert!(truth_table.header.is_empty());
	assert!(truth_table.rows.is_empty());
}

#[rstest]
#[case("∧ a", ParseError::MalformedBinary { offset: Some(0) })]
#[case("()", ParseError::EmptyExpression)]
fn malformed_formulas_fail(#[case] input: &str, #[case] expected: ParseError) {
	assert_eq!(parse(input), Err(expected));
}

#[rstest]
#[case("(a ∧ b")]
#[case("a ∧ b)")]
#[case("((a ∧ b)")]
#[case("a ∧ b))")]
fn unbalanced_parentheses_are_absorbed(#[case] input: &str) {
	let prop_tree = parse(input).unwrap();
	assert!(equivalent(&prop_tree, &parse("a ∧ b").unwrap(), &["a", "b"]));
}

#[test]
fn truth_table_serializes() {
	let truth_table = TruthTable::new(&parse("¬p").unwrap());
	assert_eq!(
		serde_json::to_string(&truth_table).unwrap(),
		r#"{"header":["p"],"rows":[{"inputs":[false],"output":true},{"inputs":[true],"output":false}]}"#
	);
}
