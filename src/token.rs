use crate::log::targets::TOKENIZE as LOG_TOKENIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
	And,
	Or,
	Not,
	Imply,
	Converse,
	Xnor,
}

impl Connective {
	pub fn symbol(self) -> char {
		match self {
			Connective::And => '∧',
			Connective::Or => '∨',
			Connective::Not => '¬',
			Connective::Imply => '→',
			Connective::Converse => '←',
			Connective::Xnor => '↔',
		}
	}

	// case-insensitive, applied to a whole identifier run only
	pub fn from_alias(text: &str) -> Option<Connective> {
		match text.to_lowercase().as_str() {
			"or" => Some(Connective::Or),
			"and" => Some(Connective::And),
			"not" => Some(Connective::Not),
			"implies" | "impl" | "->" => Some(Connective::Imply),
			"<->" | "==" => Some(Connective::Xnor),
			"<-" => Some(Connective::Converse),
			_ => None,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
	Ident { name: String, offset: usize },
	Connective { connective: Connective, offset: usize },
	LeftParenthesis { offset: usize },
	RightParenthesis { offset: usize },
}

/// Splits `string` into identifier, connective and parenthesis tokens.
///
/// Whitespace only separates identifiers and never yields a token. Base symbols always stand
/// alone, everything else accumulates into identifier runs which are then matched against the
/// alias table. Any input is accepted.
pub fn tokenize(string: &str) -> Vec<Token> {
	use plex::lexer;
	enum Lexeme {
		Whitespace,
		Ident(String),
		Connective(Connective),
		LeftParenthesis,
		RightParenthesis,
	}
	lexer! {
		fn next_lexeme(text: 'a) -> Lexeme;

		r#"[ \t\r\n\x0B\x0C]+"# => Lexeme::Whitespace,
		r#"∧"# => Lexeme::Connective(Connective::And),
		r#"∨"# => Lexeme::Connective(Connective::Or),
		r#"¬"# => Lexeme::Connective(Connective::Not),
		r#"→"# => Lexeme::Connective(Connective::Imply),
		r#"←"# => Lexeme::Connective(Connective::Converse),
		r#"↔"# => Lexeme::Connective(Connective::Xnor),
		r#"\("# => Lexeme::LeftParenthesis,
		r#"\)"# => Lexeme::RightParenthesis,
		r#"[^ \t\r\n\x0B\x0C∧∨¬→←↔()]+"# => Lexeme::Ident(text.to_owned()),
	}

	let mut tokens = Vec::new();
	let mut remaining = string;
	while let Some((lexeme, new_remaining)) = next_lexeme(remaining) {
		let offset = string.len() - remaining.len();
		let token = match lexeme {
			Lexeme::Whitespace => None,
			Lexeme::Ident(name) => Some(match Connective::from_alias(&name) {
				Some(connective) => Token::Connective { connective, offset },
				None => Token::Ident { name, offset },
			}),
			Lexeme::Connective(connective) => Some(Token::Connective { connective, offset }),
			Lexeme::LeftParenthesis => Some(Token::LeftParenthesis { offset }),
			Lexeme::RightParenthesis => Some(Token::RightParenthesis { offset }),
		};
		if let Some(token) = token {
			tokens.push(token);
		}
		remaining = new_remaining;
	}
	log::trace!(target: LOG_TOKENIZE, "{:?} -> {:?}", string, tokens);
	tokens
}
