use core::fmt;

use strum_macros::EnumIter;

// Expression tree. Each node owns its children; the tree is built once by the
// analyzer and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(f64),
    UnaryMinus(Box<Expression>),
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn literal(value: f64) -> Self {
        Expression::Literal(value)
    }

    pub fn negate(operand: Expression) -> Self {
        Expression::UnaryMinus(Box::new(operand))
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Literal(_) => 1,
            Expression::UnaryMinus(operand) => 1 + operand.depth(),
            Expression::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Fully parenthesized rendering: every unary and binary node is wrapped, so
/// the grouping the analyzer chose is visible, e.g. `((2 - 3) - 4)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::UnaryMinus(operand) => write!(f, "(-{})", operand),
            Expression::BinaryOp { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_fully_parenthesized() {
        let expr = Expression::binary(
            BinaryOperator::Subtract,
            Expression::binary(
                BinaryOperator::Subtract,
                Expression::literal(2.0),
                Expression::literal(3.0),
            ),
            Expression::literal(4.0),
        );
        assert_eq!(expr.to_string(), "((2 - 3) - 4)");

        let expr = Expression::binary(
            BinaryOperator::Multiply,
            Expression::negate(Expression::literal(2.5)),
            Expression::literal(3.0),
        );
        assert_eq!(expr.to_string(), "((-2.5) * 3)");
    }

    #[test]
    fn test_depth() {
        assert_eq!(Expression::literal(1.0).depth(), 1);
        let expr = Expression::binary(
            BinaryOperator::Add,
            Expression::literal(1.0),
            Expression::negate(Expression::literal(2.0)),
        );
        assert_eq!(expr.depth(), 3);
    }

    #[test]
    fn test_operator_symbols_match_tokens() {
        use crate::tokenizer::symbol::Operator;
        use strum::IntoEnumIterator;

        for op in BinaryOperator::iter() {
            let token: Operator = op.symbol().parse().unwrap();
            assert_eq!(token.to_string(), op.to_string());
        }
    }
}
