use crate::{Span, MK_STMT_IMPL};

use super::{
    ast::{ExprWrapper, StmtWrapper},
    expressions::IdentifierExpr,
};

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

MK_STMT_IMPL!(BlockStmt, BlockStmt);

#[derive(Debug, Clone)]
pub struct EmptyStmt {
    pub span: Span,
}

MK_STMT_IMPL!(EmptyStmt, EmptyStmt);

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: ExprWrapper,
    pub span: Span,
}

MK_STMT_IMPL!(ExpressionStmt, ExpressionStmt);

#[derive(Debug, Clone)]
pub struct VariableDeclarator {
    pub id: IdentifierExpr,
    pub init: Option<ExprWrapper>,
    pub span: Span,
}

/// `let a, b = 1;` - one declarator per comma separated name.
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub declarations: Vec<VariableDeclarator>,
    pub span: Span,
}

MK_STMT_IMPL!(VarDeclStmt, VarDeclStmt);

#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    pub id: IdentifierExpr,
    pub params: Vec<IdentifierExpr>,
    pub body: BlockStmt,
    pub span: Span,
}

MK_STMT_IMPL!(FnDeclStmt, FnDeclStmt);

#[derive(Debug, Clone)]
pub struct ClassDeclStmt {
    pub id: IdentifierExpr,
    pub super_class: Option<IdentifierExpr>,
    pub body: BlockStmt,
    pub span: Span,
}

MK_STMT_IMPL!(ClassDeclStmt, ClassDeclStmt);

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub test: ExprWrapper,
    pub consequent: StmtWrapper,
    pub alternate: Option<StmtWrapper>,
    pub span: Span,
}

MK_STMT_IMPL!(IfStmt, IfStmt);

#[derive(Debug, Clone)]
pub struct DoWhileStmt {
    pub body: StmtWrapper,
    pub test: ExprWrapper,
    pub span: Span,
}

MK_STMT_IMPL!(DoWhileStmt, DoWhileStmt);

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub test: ExprWrapper,
    pub body: StmtWrapper,
    pub span: Span,
}

MK_STMT_IMPL!(WhileStmt, WhileStmt);

/// Head of a `for` loop before the first `;` or `:`.
#[derive(Debug, Clone)]
pub enum ForInit {
    VarDecl(VarDeclStmt),
    Expression(ExprWrapper),
}

#[derive(Debug, Clone)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub test: Option<ExprWrapper>,
    pub update: Option<ExprWrapper>,
    pub body: StmtWrapper,
    pub span: Span,
}

MK_STMT_IMPL!(ForStmt, ForStmt);

/// `for (binding : iterable) body`
///
/// A `VarDecl` on the left always has exactly one declarator, and an
/// `Expression` on the left is always an identifier or member expression.
#[derive(Debug, Clone)]
pub struct ForPropStmt {
    pub left: ForInit,
    pub right: ExprWrapper,
    pub body: StmtWrapper,
    pub span: Span,
}

MK_STMT_IMPL!(ForPropStmt, ForPropStmt);

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub argument: Option<ExprWrapper>,
    pub span: Span,
}

MK_STMT_IMPL!(ReturnStmt, ReturnStmt);

#[derive(Debug, Clone)]
pub struct BreakStmt {
    pub span: Span,
}

MK_STMT_IMPL!(BreakStmt, BreakStmt);

#[derive(Debug, Clone)]
pub struct ContinueStmt {
    pub span: Span,
}

MK_STMT_IMPL!(ContinueStmt, ContinueStmt);
