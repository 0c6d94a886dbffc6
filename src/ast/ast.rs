use std::{any::Any, fmt::Debug, ops::Deref};

use crate::Span;

/// Statement Types
///
/// The variant tag carried by every statement node.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    BlockStmt,
    EmptyStmt,
    VarDeclStmt,
    FnDeclStmt,
    ExpressionStmt,
    IfStmt,
    DoWhileStmt,
    WhileStmt,
    ForStmt,
    ForPropStmt,
    ReturnStmt,
    BreakStmt,
    ContinueStmt,
    ClassDeclStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Debug {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Owned counterpart of `as_any`, used to move a node out of its wrapper.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
    /// Returns the span of the statement.
    fn get_span(&self) -> &Span;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }

    /// Borrows the inner node as `T` if that is its concrete type.
    pub fn downcast_ref<T: Stmt + 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Consumes the wrapper, returning the inner node if it is a `T`.
    pub fn into_inner<T: Stmt + 'static>(self) -> Option<T> {
        self.0.into_any().downcast::<T>().ok().map(|stmt| *stmt)
    }
}

impl Deref for StmtWrapper {
    type Target = Box<dyn Stmt>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.0.clone_wrapper()
    }
}

/// Expression Types
///
/// The variant tag carried by every expression node.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    Literal,
    Binary,
    Logical,
    Unary,
    Assignment,
    Sequence,
    Member,
    Call,
    New,
    This,
    Super,
    ArrayLiteral,
    ObjectLiteral,
    Lambda,
}

impl ExprType {
    /// Human readable name used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            ExprType::Identifier => "identifier",
            ExprType::Literal => "literal",
            ExprType::Binary => "binary expression",
            ExprType::Logical => "logical expression",
            ExprType::Unary => "unary expression",
            ExprType::Assignment => "assignment",
            ExprType::Sequence => "sequence expression",
            ExprType::Member => "member expression",
            ExprType::Call => "call expression",
            ExprType::New => "new expression",
            ExprType::This => "`this`",
            ExprType::Super => "`super`",
            ExprType::ArrayLiteral => "array literal",
            ExprType::ObjectLiteral => "object literal",
            ExprType::Lambda => "lambda",
        }
    }
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Owned counterpart of `as_any`, used to move a node out of its wrapper.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &Span;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }

    /// Borrows the inner node as `T` if that is its concrete type.
    pub fn downcast_ref<T: Expr + 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Consumes the wrapper, returning the inner node if it is a `T`.
    pub fn into_inner<T: Expr + 'static>(self) -> Option<T> {
        self.0.into_any().downcast::<T>().ok().map(|expr| *expr)
    }
}

impl Deref for ExprWrapper {
    type Target = Box<dyn Expr>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.0.clone_wrapper()
    }
}

/// Program
///
/// Root of the tree; owns every statement of one source unit.
#[derive(Debug, Clone)]
pub struct Program {
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}
