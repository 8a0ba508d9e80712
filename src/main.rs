use clap::{Arg, ArgAction, ArgMatches, Command};
use proptable::{Assignment, ParseError, PropTree, TruthTable};
use std::process::ExitCode;

fn cli() -> Command {
	Command::new("proptable")
		.about("Parses a propositional formula, evaluates it or prints its truth table")
		.version(env!("CARGO_PKG_VERSION"))

		.arg(Arg::new("assign")
			.short('a')
			.long("assign")
			.value_name("NAME=BOOL")
			.value_parser(parse_binding)
			.action(ArgAction::Append)
			.conflicts_with("table")
			.help("Binds a variable for evaluation. Unbound variables are false."))

		.arg(Arg::new("table")
			.short('t')
			.long("table")
			.action(ArgAction::SetTrue)
			.help("Prints the truth table instead of a single evaluation (at most 4 variables)."))

		.arg(Arg::new("json")
			.long("json")
			.action(ArgAction::SetTrue)
			.help("Prints the result as JSON."))

		.arg(Arg::new("formula")
			.required(true)
			.num_args(1..)
			.trailing_var_arg(true)
			.allow_hyphen_values(true)
			.help("The formula, e.g. 'a and (b -> c)'. Words are joined with single spaces."))
}

fn parse_binding(binding: &str) -> Result<(String, bool), String> {
	let (name, value) = binding
		.split_once('=')
		.ok_or_else(|| format!("expected NAME=BOOL, found {:?}", binding))?;
	let value = match value.trim().to_lowercase().as_str() {
		"1" | "t" | "true" => true,
		"0" | "f" | "false" => false,
		other => return Err(format!("not a boolean: {:?}", other)),
	};
	Ok((name.trim().to_owned(), value))
}

fn report(formula: &str, err: ParseError) -> ExitCode {
	match err.offset() {
		Some(offset) => eprintln!("{:?}: {} (at byte {})", formula, err, offset),
		None => eprintln!("{:?}: {}", formula, err),
	}
	ExitCode::FAILURE
}

fn run(matches: &ArgMatches, prop_tree: &PropTree) -> Result<(), serde_json::Error> {
	let json = matches.get_flag("json");
	if matches.get_flag("table") {
		let truth_table = TruthTable::new(prop_tree);
		if json {
			println!("{}", serde_json::to_string_pretty(&truth_table)?);
		} else if truth_table.is_empty() {
			println!("too many variables to tabulate: {}", prop_tree.symbols().join(" "));
		} else {
			print!("{}", truth_table);
		}
		return Ok(());
	}

	let assignment: Assignment = matches
		.get_many::<(String, bool)>("assign")
		.map(|bindings| bindings.cloned().collect())
		.unwrap_or_default();
	let result = prop_tree.evaluate(&assignment);
	if json {
		let value = serde_json::json!({
			"formula": prop_tree.to_linear_form(),
			"result": result,
		});
		println!("{}", serde_json::to_string_pretty(&value)?);
	} else {
		println!("{}", prop_tree);
		println!("{}", result);
	}
	Ok(())
}

fn main() -> ExitCode {
	env_logger::init();

	let matches = cli().get_matches();
	let formula = matches
		.get_many::<String>("formula")
		.map(|words| words.cloned().collect::<Vec<_>>().join(" "))
		.unwrap_or_default();

	let prop_tree = match PropTree::from_string(&formula) {
		Ok(prop_tree) => prop_tree,
		Err(err) => return report(&formula, err),
	};
	match run(&matches, &prop_tree) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{}", err);
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_cli() {
		cli().debug_assert();
	}

	#[test]
	fn test_parse_binding() {
		assert_eq!(parse_binding("a=true"), Ok(("a".to_string(), true)));
		assert_eq!(parse_binding("b = 0"), Ok(("b".to_string(), false)));
		assert_eq!(parse_binding("c=T"), Ok(("c".to_string(), true)));
		assert!(parse_binding("d").is_err());
		assert!(parse_binding("e=maybe").is_err());
	}

	#[test]
	fn test_formula_words() {
		let matches = cli()
			.try_get_matches_from(["proptable", "-a", "a=1", "a", "->", "b"])
			.unwrap();
		let words: Vec<&String> = matches.get_many::<String>("formula").unwrap().collect();
		assert_eq!(words, ["a", "->", "b"]);
		assert!(!matches.get_flag("table"));
	}

	#[test]
	fn test_assign_conflicts_with_table() {
		let result = cli().try_get_matches_from(["proptable", "-t", "-a", "a=1", "a"]);
		assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ArgumentConflict);
	}
}
