//! lira-par - AST node definitions.
//!
//! One tagged sum type per syntactic category: [`Expr`] for expressions,
//! [`Stmt`] for statements, [`LiteralKind`] for literals. Every node
//! carries the source position of its first (or operator) token, which is
//! the position runtime errors report.

use std::fmt;

use indexmap::IndexMap;
use lira_util::SourcePosition;

/// The type enumeration of the source language.
///
/// `Void` is valid only as a function return type; parameters and
/// declarations use the other seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Float,
    Str,
    Cur,
    Curtype,
    Bool,
    Dict,
    Void,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::Cur => "cur",
            ValueType::Curtype => "curtype",
            ValueType::Bool => "bool",
            ValueType::Dict => "dict",
            ValueType::Void => "void",
        };
        f.write_str(name)
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Literal(LiteralExpr),
    Access(ObjectAccess),
}

impl Expr {
    /// The position errors about this expression should point at.
    pub fn position(&self) -> SourcePosition {
        match self {
            Expr::Binary(e) => e.position,
            Expr::Unary(e) => e.position,
            Expr::Literal(e) => e.position,
            Expr::Access(e) => e.position,
        }
    }
}

/// Binary expression; the position is the operator token's.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub position: SourcePosition,
}

/// Binary operators, lowest- to highest-binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Or,
    And,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The surface spelling, used in diagnostics.
    pub fn spelling(&self) -> &'static str {
        match self {
            BinOp::Or => "||",
            BinOp::And => "&&",
            BinOp::Less => "<",
            BinOp::LessEqual => "<=",
            BinOp::Greater => ">",
            BinOp::GreaterEqual => ">=",
            BinOp::Equal => "==",
            BinOp::NotEqual => "!=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// True for the six relation operators.
    pub fn is_relation(&self) -> bool {
        matches!(
            self,
            BinOp::Less
                | BinOp::LessEqual
                | BinOp::Greater
                | BinOp::GreaterEqual
                | BinOp::Equal
                | BinOp::NotEqual
        )
    }
}

/// Unary expression (logical `!` or arithmetic `-`).
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnOp,
    pub operand: Box<Expr>,
    pub position: SourcePosition,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Not,
    Neg,
}

impl UnOp {
    pub fn spelling(&self) -> &'static str {
        match self {
            UnOp::Not => "!",
            UnOp::Neg => "-",
        }
    }
}

/// Literal expression
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub kind: LiteralKind,
    pub position: SourcePosition,
}

/// Literal payloads. A currency literal is a number fused with a trailing
/// currency-type constant by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralKind {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Curtype(String),
    Currency { amount: f64, curtype: String },
    Dict(Vec<Pair>),
}

/// One `"name": expression` pair of a dict literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub name: String,
    pub value: Expr,
    pub position: SourcePosition,
}

/// A dotted chain of identifier references and calls, evaluated
/// left-to-right against the runtime value of the head.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectAccess {
    pub segments: Vec<Segment>,
    pub position: SourcePosition,
}

impl ObjectAccess {
    /// True when the final segment is a call (method or function).
    pub fn ends_in_call(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Call(_)))
    }
}

/// One segment of an object access.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Ident(IdentSegment),
    Call(CallSegment),
}

impl Segment {
    pub fn position(&self) -> SourcePosition {
        match self {
            Segment::Ident(s) => s.position,
            Segment::Call(s) => s.position,
        }
    }
}

/// A plain identifier reference.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentSegment {
    pub name: String,
    pub position: SourcePosition,
}

/// A function or method call with its argument expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSegment {
    pub name: String,
    pub args: Vec<Expr>,
    pub position: SourcePosition,
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(Declaration),
    Assign(Assign),
    CompoundAssign(CompoundAssign),
    /// A bare call chain used as a statement, e.g. `print(x);`.
    Expression(ObjectAccess),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Return(ReturnStmt),
    Transfer(TransferStmt),
}

/// `type name [= init];`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub ty: ValueType,
    pub name: String,
    pub init: Option<Expr>,
    pub position: SourcePosition,
}

/// `target = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub target: ObjectAccess,
    pub value: Expr,
    pub position: SourcePosition,
}

/// `target += value;` / `target -= value;`
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundAssign {
    pub target: ObjectAccess,
    pub op: AssignOp,
    pub value: Expr,
    pub position: SourcePosition,
}

/// Compound-assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Add,
    Sub,
}

impl AssignOp {
    pub fn spelling(&self) -> &'static str {
        match self {
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
        }
    }
}

/// `if cond block { elif cond block } [ else block ]`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub block: Block,
    pub elif_branches: Vec<ElifBranch>,
    pub else_block: Option<Block>,
    pub position: SourcePosition,
}

/// One `elif` arm.
#[derive(Debug, Clone, PartialEq)]
pub struct ElifBranch {
    pub condition: Expr,
    pub block: Block,
}

/// `while cond block`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub block: Block,
    pub position: SourcePosition,
}

/// `for name in iterable block`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub binding: String,
    pub iterable: Expr,
    pub block: Block,
    pub position: SourcePosition,
}

/// `return [expr];`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub position: SourcePosition,
}

/// `from source -> amount [ -> target ];`
///
/// With a target, source and target must be assignable accesses; without,
/// at least one of source/amount must be (the parser enforces both).
#[derive(Debug, Clone, PartialEq)]
pub struct TransferStmt {
    pub source: Expr,
    pub amount: Expr,
    pub target: Option<Expr>,
    pub position: SourcePosition,
}

/// `{ statement* }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub position: SourcePosition,
}

/// One `type name` parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: ValueType,
    pub position: SourcePosition,
}

/// A function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub return_type: ValueType,
    pub params: Vec<Parameter>,
    pub block: Block,
    pub position: SourcePosition,
}

/// A parsed program: the name -> definition mapping, in definition order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub functions: IndexMap<String, FunctionDef>,
}
