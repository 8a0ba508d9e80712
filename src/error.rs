use thiserror::Error;

/// Failures raised while turning a grouped formula into a [`PropTree`](crate::PropTree).
///
/// Tokenizing and grouping never fail, so every variant comes from the reformatting stage.
/// Offsets are byte positions in the original text, when the offending operator is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("empty expression")]
	EmptyExpression,
	#[error("operator has no operand")]
	OperatorWithoutOperand { offset: usize },
	#[error("malformed unary operator")]
	MalformedUnary { offset: Option<usize> },
	#[error("malformed binary operator")]
	MalformedBinary { offset: Option<usize> },
	#[error("malformed expression")]
	MalformedExpression,
}

impl ParseError {
	pub fn offset(&self) -> Option<usize> {
		match self {
			ParseError::OperatorWithoutOperand { offset } => Some(*offset),
			ParseError::MalformedUnary { offset } | ParseError::MalformedBinary { offset } => *offset,
			ParseError::EmptyExpression | ParseError::MalformedExpression => None,
		}
	}
}
