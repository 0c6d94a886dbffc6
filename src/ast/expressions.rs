use crate::{lexer::tokens::Token, Span, MK_EXPR_IMPL};

use super::{ast::ExprWrapper, statements::BlockStmt};

// LITERALS

/// The kind tag of a literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind {
    String,
    Numeric,
    Boolean,
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Numeric(f64),
    Boolean(bool),
    Null,
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::String(_) => LiteralKind::String,
            Literal::Numeric(_) => LiteralKind::Numeric,
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::Null => LiteralKind::Null,
        }
    }
}

/// Literal Expression
/// Represents a string, numeric, boolean or null literal in the AST.
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

MK_EXPR_IMPL!(LiteralExpr, Literal);

/// Identifier Expression
/// Represents a name in the AST. Also used for declaration names and parameters.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub name: String,
    pub span: Span,
}

MK_EXPR_IMPL!(IdentifierExpr, Identifier);

#[derive(Debug, Clone)]
pub struct ThisExpr {
    pub span: Span,
}

MK_EXPR_IMPL!(ThisExpr, This);

/// Super Expression
/// Only ever appears as the callee of a `CallExpr`.
#[derive(Debug, Clone)]
pub struct SuperExpr {
    pub span: Span,
}

MK_EXPR_IMPL!(SuperExpr, Super);

#[derive(Debug, Clone)]
pub struct ArrayLiteralExpr {
    pub elements: Vec<ExprWrapper>,
    pub span: Span,
}

MK_EXPR_IMPL!(ArrayLiteralExpr, ArrayLiteral);

/// Key of an object property.
#[derive(Debug, Clone)]
pub enum PropertyKey {
    Identifier(IdentifierExpr),
    Literal(LiteralExpr),
}

/// Property
/// A `key: value` entry of an object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: PropertyKey,
    pub value: ExprWrapper,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ObjectLiteralExpr {
    pub properties: Vec<Property>,
    pub span: Span,
}

MK_EXPR_IMPL!(ObjectLiteralExpr, ObjectLiteral);

// COMPLEX

/// Binary Expression
/// Represents an arithmetic, equality or relational operation in the AST.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

MK_EXPR_IMPL!(BinaryExpr, Binary);

/// Logical Expression
/// Represents `||` and `&&` in the AST.
#[derive(Debug, Clone)]
pub struct LogicalExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

MK_EXPR_IMPL!(LogicalExpr, Logical);

/// Unary Expression
/// Represents a prefix `+` or `-` in the AST.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: Token,
    pub argument: ExprWrapper,
    pub span: Span,
}

MK_EXPR_IMPL!(UnaryExpr, Unary);

/// Assignment Expression
/// `left` is always an identifier or a member expression.
#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub operator: Token,
    pub left: ExprWrapper,
    pub right: ExprWrapper,
    pub span: Span,
}

MK_EXPR_IMPL!(AssignmentExpr, Assignment);

/// Sequence Expression
/// Always holds at least two expressions.
#[derive(Debug, Clone)]
pub struct SequenceExpr {
    pub expressions: Vec<ExprWrapper>,
    pub span: Span,
}

MK_EXPR_IMPL!(SequenceExpr, Sequence);

/// Member Expression
/// `object.property` when `computed` is false, `object[property]` otherwise.
#[derive(Debug, Clone)]
pub struct MemberExpr {
    pub object: ExprWrapper,
    pub property: ExprWrapper,
    pub computed: bool,
    pub span: Span,
}

MK_EXPR_IMPL!(MemberExpr, Member);

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
    pub span: Span,
}

MK_EXPR_IMPL!(CallExpr, Call);

/// New Expression
/// Represents `new Callee(arguments)` in the AST.
#[derive(Debug, Clone)]
pub struct NewExpr {
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
    pub span: Span,
}

MK_EXPR_IMPL!(NewExpr, New);

/// Lambda Expression
/// Represents `(params) -> { body }` in the AST.
#[derive(Debug, Clone)]
pub struct LambdaExpr {
    pub params: Vec<IdentifierExpr>,
    pub body: BlockStmt,
    pub span: Span,
}

MK_EXPR_IMPL!(LambdaExpr, Lambda);
