//! The tree-walking interpreter.
//!
//! Expression evaluation returns a [`Handle`] (identifiers yield the
//! binding's own cell, literals and operations a fresh one); statement
//! execution returns a [`Flow`] control value instead of threading
//! `returning`/`declaring` flags through the walk. Assignment targets are
//! resolved by a dedicated place walk over the access chain, separate
//! from value evaluation.

use std::io::{self, BufRead, Write};
use std::mem;

use rustc_hash::FxHashMap;

use lira_par::{
    Assign, AssignOp, BinOp, BinaryExpr, Block, CallSegment, CompoundAssign, Declaration, Expr,
    ForStmt, FunctionDef, IdentSegment, IfStmt, LiteralExpr, LiteralKind, ObjectAccess, Program,
    ReturnStmt, Segment, Stmt, TransferStmt, UnOp, ValueType, WhileStmt,
};
use lira_util::SourcePosition;

use crate::builtins::Builtin;
use crate::currency::{CurrencyDict, CurrencyType, CurrencyValue, DictEntry};
use crate::error::RuntimeError;
use crate::exchange::Exchange;
use crate::handle::Handle;
use crate::ops;
use crate::scope::Frame;
use crate::value::Value;

/// An entry of the global function table.
#[derive(Clone, Copy)]
enum Function<'p> {
    User(&'p FunctionDef),
    Builtin(Builtin),
}

/// How a statement finished.
enum Flow {
    Normal,
    Return(Option<Handle>),
}

/// The interpreter: global function table, exchange rates, the current
/// call frame and the stack of saved caller frames.
pub struct Interpreter<'p> {
    functions: FxHashMap<String, Function<'p>>,
    exchange: Exchange,
    frame: Frame,
    saved_frames: Vec<Frame>,
    out: Box<dyn Write>,
    input: Box<dyn BufRead>,
}

impl<'p> Interpreter<'p> {
    /// An interpreter wired to stdin/stdout.
    pub fn new(exchange: Exchange) -> Self {
        Self::with_io(
            exchange,
            Box::new(io::stdout()),
            Box::new(io::BufReader::new(io::stdin())),
        )
    }

    /// An interpreter with explicit I/O, used by tests to capture output.
    pub fn with_io(exchange: Exchange, out: Box<dyn Write>, input: Box<dyn BufRead>) -> Self {
        Self {
            functions: FxHashMap::default(),
            exchange,
            frame: Frame::new(None),
            saved_frames: Vec::new(),
            out,
            input,
        }
    }

    /// Runs a program: registers user functions and builtins, then calls
    /// `main`, which must exist, be void and take no parameters.
    pub fn run(&mut self, program: &'p Program) -> Result<(), RuntimeError> {
        self.functions.clear();
        for (name, def) in &program.functions {
            self.functions.insert(name.clone(), Function::User(def));
        }
        for builtin in Builtin::ALL {
            self.functions
                .insert(builtin.name().to_string(), Function::Builtin(builtin));
        }

        let start = SourcePosition::START;
        let Some(Function::User(main)) = self.functions.get("main").copied() else {
            return Err(RuntimeError::new("missing main function", start));
        };
        if main.return_type != ValueType::Void {
            return Err(RuntimeError::new(
                "main function has to be void type",
                main.position,
            ));
        }
        if !main.params.is_empty() {
            return Err(RuntimeError::new(
                "main function takes no parameters",
                main.position,
            ));
        }

        self.call_user(main, Vec::new(), start)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Calls
    // ------------------------------------------------------------------

    fn call_function(
        &mut self,
        name: &str,
        args: Vec<Handle>,
        position: SourcePosition,
    ) -> Result<Option<Handle>, RuntimeError> {
        let function = self.functions.get(name).copied().ok_or_else(|| {
            RuntimeError::new(format!("function '{name}' not found"), position)
        })?;

        match function {
            Function::User(def) => self.call_user(def, args, position),
            Function::Builtin(builtin) => self.call_builtin(builtin, args, position),
        }
    }

    /// Calls a user function: checks arity, binds arguments to parameters
    /// positionally (type-checked), swaps in a fresh frame, runs the body
    /// and restores the caller frame.
    fn call_user(
        &mut self,
        def: &'p FunctionDef,
        args: Vec<Handle>,
        call_position: SourcePosition,
    ) -> Result<Option<Handle>, RuntimeError> {
        if args.len() != def.params.len() {
            return Err(RuntimeError::new(
                format!(
                    "wrong number of arguments for '{}', expected {}, got {}",
                    def.name,
                    def.params.len(),
                    args.len()
                ),
                call_position,
            ));
        }

        let mut callee = Frame::new(expected_return(def.return_type));
        for (param, arg) in def.params.iter().zip(&args) {
            let matches = arg.with(|value| value.value_type() == Some(param.ty));
            if !matches {
                let found = arg.with(|value| value.type_name());
                return Err(RuntimeError::new(
                    format!(
                        "parameter type mismatch for '{}', expected {}, got {}",
                        param.name, param.ty, found
                    ),
                    call_position,
                ));
            }
            callee.insert(param.name.clone(), arg.clone());
        }

        self.saved_frames.push(mem::replace(&mut self.frame, callee));
        let flow = self.exec_block(&def.block);
        if let Some(caller) = self.saved_frames.pop() {
            self.frame = caller;
        }

        match flow? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(None),
        }
    }

    /// Builtins take one argument; a zero-argument call passes a single
    /// space string.
    fn call_builtin(
        &mut self,
        builtin: Builtin,
        args: Vec<Handle>,
        position: SourcePosition,
    ) -> Result<Option<Handle>, RuntimeError> {
        let arg = match args.len() {
            0 => Value::Str(" ".to_string()),
            1 => args[0].cloned(),
            n => {
                return Err(RuntimeError::new(
                    format!(
                        "wrong number of arguments for '{}', expected 1, got {n}",
                        builtin.name()
                    ),
                    position,
                ));
            }
        };

        let result = builtin.invoke(&arg, &mut *self.out, &mut *self.input, position)?;
        Ok(result.map(Handle::new))
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn exec_block(&mut self, block: &Block) -> Result<Flow, RuntimeError> {
        self.frame.enter_scope();
        let mut flow = Flow::Normal;
        for statement in &block.statements {
            flow = self.exec_stmt(statement)?;
            if matches!(flow, Flow::Return(_)) {
                break;
            }
        }
        self.frame.leave_scope();
        Ok(flow)
    }

    fn exec_stmt(&mut self, statement: &Stmt) -> Result<Flow, RuntimeError> {
        match statement {
            Stmt::Declaration(decl) => self.exec_declaration(decl),
            Stmt::Assign(assign) => self.exec_assign(assign),
            Stmt::CompoundAssign(assign) => self.exec_compound_assign(assign),
            Stmt::Expression(access) => {
                self.eval_access(access)?;
                Ok(Flow::Normal)
            }
            Stmt::If(if_stmt) => self.exec_if(if_stmt),
            Stmt::While(while_stmt) => self.exec_while(while_stmt),
            Stmt::For(for_stmt) => self.exec_for(for_stmt),
            Stmt::Return(ret) => self.exec_return(ret),
            Stmt::Transfer(transfer) => self.exec_transfer(transfer),
        }
    }

    /// Declarations refuse shadowing within the current scope and always
    /// bind a fresh handle: a clone of the initialiser's value, or an
    /// uninitialised marker carrying the declared type.
    fn exec_declaration(&mut self, decl: &Declaration) -> Result<Flow, RuntimeError> {
        if self.frame.declared_in_current(&decl.name) {
            return Err(RuntimeError::new(
                format!("redeclaration of a variable '{}'", decl.name),
                decl.position,
            ));
        }

        let value = match &decl.init {
            Some(init) => {
                let value = self.eval_expr(init)?.cloned();
                if value.value_type() != Some(decl.ty) {
                    return Err(RuntimeError::new(
                        format!(
                            "type mismatch in declaration of '{}': expected {}, got {}",
                            decl.name,
                            decl.ty,
                            value.type_name()
                        ),
                        decl.position,
                    ));
                }
                value
            }
            None => Value::Uninit(decl.ty),
        };

        self.frame.insert(decl.name.clone(), Handle::new(value));
        Ok(Flow::Normal)
    }

    fn exec_assign(&mut self, assign: &Assign) -> Result<Flow, RuntimeError> {
        let place = self.resolve_place(&assign.target)?;
        let value = self.eval_expr(&assign.value)?.cloned();

        let (expected_ty, expected_name) =
            place.with(|current| (current.value_type(), current.type_name()));
        if value.value_type() != expected_ty {
            return Err(RuntimeError::new(
                format!(
                    "type mismatch, expected {}, got {}",
                    expected_ty
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| expected_name.to_string()),
                    value.type_name()
                ),
                assign.position,
            ));
        }

        place.set(value);
        Ok(Flow::Normal)
    }

    fn exec_compound_assign(&mut self, assign: &CompoundAssign) -> Result<Flow, RuntimeError> {
        let place = self.resolve_place(&assign.target)?;
        let value = self.eval_expr(&assign.value)?.cloned();
        let current = place.cloned();

        if let Value::Uninit(_) = current {
            return Err(RuntimeError::new(
                format!("'{}' used before assignment", target_name(&assign.target)),
                assign.position,
            ));
        }

        let op = match assign.op {
            AssignOp::Add => BinOp::Add,
            AssignOp::Sub => BinOp::Sub,
        };
        let result = ops::binary(&self.exchange, op, &current, &value, assign.position)?;
        place.set(result);
        Ok(Flow::Normal)
    }

    fn exec_if(&mut self, if_stmt: &IfStmt) -> Result<Flow, RuntimeError> {
        if self.eval_condition(&if_stmt.condition)? {
            return self.exec_block(&if_stmt.block);
        }
        for branch in &if_stmt.elif_branches {
            if self.eval_condition(&branch.condition)? {
                return self.exec_block(&branch.block);
            }
        }
        match &if_stmt.else_block {
            Some(block) => self.exec_block(block),
            None => Ok(Flow::Normal),
        }
    }

    fn exec_while(&mut self, while_stmt: &WhileStmt) -> Result<Flow, RuntimeError> {
        while self.eval_condition(&while_stmt.condition)? {
            if let Flow::Return(value) = self.exec_block(&while_stmt.block)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// The iterable must be a dictionary; the loop identifier is bound in
    /// the current scope to a fresh entry handle per iteration, whose
    /// `value` field aliases the stored currency handle.
    fn exec_for(&mut self, for_stmt: &ForStmt) -> Result<Flow, RuntimeError> {
        let iterable = self.eval_expr(&for_stmt.iterable)?.cloned();
        let entries = match iterable {
            Value::Dict(dict) => dict.entries(),
            other => {
                return Err(RuntimeError::new(
                    format!("for loop expects a dict, got {}", other.type_name()),
                    for_stmt.iterable.position(),
                ));
            }
        };

        for (name, value) in entries {
            let entry = Handle::new(Value::Entry(DictEntry { name, value }));
            self.frame.insert(for_stmt.binding.clone(), entry);
            if let Flow::Return(result) = self.exec_block(&for_stmt.block)? {
                return Ok(Flow::Return(result));
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_return(&mut self, ret: &ReturnStmt) -> Result<Flow, RuntimeError> {
        match &ret.value {
            Some(expr) => {
                let handle = self.eval_expr(expr)?;
                let found = handle.with(|value| value.value_type());
                match self.frame.expected_return() {
                    Some(expected) if found == Some(expected) => {
                        Ok(Flow::Return(Some(handle)))
                    }
                    Some(expected) => Err(RuntimeError::new(
                        format!(
                            "wrong return type, expected {}, got {}",
                            expected,
                            handle.with(|value| value.type_name())
                        ),
                        ret.position,
                    )),
                    None => Err(RuntimeError::new(
                        format!(
                            "wrong return type, expected void, got {}",
                            handle.with(|value| value.type_name())
                        ),
                        ret.position,
                    )),
                }
            }
            None => match self.frame.expected_return() {
                None => Ok(Flow::Return(None)),
                Some(expected) => Err(RuntimeError::new(
                    format!("expected return of a type {expected}"),
                    ret.position,
                )),
            },
        }
    }

    /// Currency transfer. All expressions must evaluate to currency
    /// values. With a target the source is decreased first, then the
    /// target increased; the amount is re-read between the two writes so
    /// aliasing stays faithful. Without a target both sides are updated
    /// symmetrically from their pre-transfer values.
    fn exec_transfer(&mut self, transfer: &TransferStmt) -> Result<Flow, RuntimeError> {
        let position = transfer.position;
        let source = self.eval_expr(&transfer.source)?;
        let amount = self.eval_expr(&transfer.amount)?;
        let target = match &transfer.target {
            Some(expr) => Some(self.eval_expr(expr)?),
            None => None,
        };

        currency_of(&source, position)?;
        currency_of(&amount, position)?;
        if let Some(target) = &target {
            currency_of(target, position)?;
        }

        match target {
            Some(target) => {
                let new_source = self.exchange.sub(
                    &currency_of(&source, position)?,
                    &currency_of(&amount, position)?,
                    position,
                )?;
                source.set(Value::Currency(new_source));

                let new_target = self.exchange.add(
                    &currency_of(&target, position)?,
                    &currency_of(&amount, position)?,
                    position,
                )?;
                target.set(Value::Currency(new_target));
            }
            None => {
                let source_value = currency_of(&source, position)?;
                let amount_value = currency_of(&amount, position)?;
                let new_amount = self.exchange.add(&amount_value, &source_value, position)?;
                let new_source = self.exchange.sub(&source_value, &amount_value, position)?;
                amount.set(Value::Currency(new_amount));
                source.set(Value::Currency(new_source));
            }
        }

        Ok(Flow::Normal)
    }

    fn eval_condition(&mut self, condition: &Expr) -> Result<bool, RuntimeError> {
        match self.eval_expr(condition)?.cloned() {
            Value::Bool(value) => Ok(value),
            other => Err(RuntimeError::new(
                format!("condition must be a bool, got {}", other.type_name()),
                condition.position(),
            )),
        }
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn eval_expr(&mut self, expr: &Expr) -> Result<Handle, RuntimeError> {
        match expr {
            Expr::Literal(literal) => self.eval_literal(literal),
            Expr::Unary(unary) => {
                let operand = self.eval_expr(&unary.operand)?.cloned();
                let result = match unary.op {
                    UnOp::Not => ops::not(&operand, unary.position)?,
                    UnOp::Neg => ops::negate(&operand, unary.position)?,
                };
                Ok(Handle::new(result))
            }
            Expr::Binary(binary) => match binary.op {
                BinOp::And => self.eval_logical(binary, false),
                BinOp::Or => self.eval_logical(binary, true),
                op => {
                    let left = self.eval_expr(&binary.left)?.cloned();
                    let right = self.eval_expr(&binary.right)?.cloned();
                    let result =
                        ops::binary(&self.exchange, op, &left, &right, binary.position)?;
                    Ok(Handle::new(result))
                }
            },
            Expr::Access(access) => {
                let result = self.eval_access(access)?;
                result.ok_or_else(|| {
                    RuntimeError::new(
                        "void function call used as a value",
                        access.position,
                    )
                })
            }
        }
    }

    /// `&&` and `||` short-circuit on the deciding operand; both operands
    /// must be booleans.
    fn eval_logical(
        &mut self,
        binary: &BinaryExpr,
        decides: bool,
    ) -> Result<Handle, RuntimeError> {
        let spelling = binary.op.spelling();
        let left = self.eval_expr(&binary.left)?.cloned();
        let Value::Bool(left) = left else {
            return Err(RuntimeError::new(
                format!("wrong operand type for '{spelling}': {}", left.type_name()),
                binary.position,
            ));
        };
        if left == decides {
            return Ok(Handle::new(Value::Bool(decides)));
        }

        let right = self.eval_expr(&binary.right)?.cloned();
        let Value::Bool(right) = right else {
            return Err(RuntimeError::new(
                format!("wrong operand type for '{spelling}': {}", right.type_name()),
                binary.position,
            ));
        };
        Ok(Handle::new(Value::Bool(right)))
    }

    fn eval_literal(&mut self, literal: &LiteralExpr) -> Result<Handle, RuntimeError> {
        let value = match &literal.kind {
            LiteralKind::Int(v) => Value::Int(*v),
            LiteralKind::Float(v) => Value::Float(*v),
            LiteralKind::Str(v) => Value::Str(v.clone()),
            LiteralKind::Bool(v) => Value::Bool(*v),
            LiteralKind::Curtype(name) => Value::Curtype(CurrencyType::new(name.clone())),
            LiteralKind::Currency { amount, curtype } => Value::Currency(CurrencyValue::new(
                *amount,
                CurrencyType::new(curtype.clone()),
            )),
            LiteralKind::Dict(pairs) => {
                let dict = CurrencyDict::new();
                for pair in pairs {
                    let value = self.eval_expr(&pair.value)?.cloned();
                    if !matches!(value, Value::Currency(_)) {
                        return Err(RuntimeError::new(
                            format!(
                                "expected cur in dict value for '{}', got {}",
                                pair.name,
                                value.type_name()
                            ),
                            pair.position,
                        ));
                    }
                    if !dict.insert(pair.name.clone(), Handle::new(value)) {
                        return Err(RuntimeError::new(
                            format!("multiple account name '{}' defined", pair.name),
                            pair.position,
                        ));
                    }
                }
                Value::Dict(dict)
            }
        };
        Ok(Handle::new(value))
    }

    /// Evaluates an access chain. Returns `None` when the chain ends in a
    /// void call (valid as a statement, an error as a value).
    fn eval_access(&mut self, access: &ObjectAccess) -> Result<Option<Handle>, RuntimeError> {
        let Some((first, rest)) = access.segments.split_first() else {
            return Ok(None);
        };

        let mut current = match first {
            Segment::Ident(segment) => Some(self.resolve_variable(segment)?),
            Segment::Call(call) => {
                let args = self.eval_args(&call.args)?;
                self.call_function(&call.name, args, call.position)?
            }
        };

        for segment in rest {
            let receiver = current.ok_or_else(|| {
                RuntimeError::new("void value has no members", segment.position())
            })?;
            current = match segment {
                Segment::Ident(field) => Some(self.attribute(&receiver, field)?),
                Segment::Call(call) => {
                    let args = self.eval_args(&call.args)?;
                    self.call_method(&receiver, call, args)?
                }
            };
        }

        Ok(current)
    }

    fn eval_args(&mut self, args: &[Expr]) -> Result<Vec<Handle>, RuntimeError> {
        args.iter().map(|arg| self.eval_expr(arg)).collect()
    }

    /// Resolves a head identifier to its bound handle; reading an
    /// uninitialised variable is a semantic error.
    fn resolve_variable(&mut self, segment: &IdentSegment) -> Result<Handle, RuntimeError> {
        let handle = self.frame.lookup(&segment.name).ok_or_else(|| {
            RuntimeError::new(
                format!("'{}' was not declared in this scope", segment.name),
                segment.position,
            )
        })?;
        let uninitialised = handle.with(|value| matches!(value, Value::Uninit(_)));
        if uninitialised {
            return Err(RuntimeError::new(
                format!("'{}' used before assignment", segment.name),
                segment.position,
            ));
        }
        Ok(handle)
    }

    /// Attribute lookup on a value: dictionary entries expose `name` and
    /// `value`.
    fn attribute(
        &mut self,
        receiver: &Handle,
        field: &IdentSegment,
    ) -> Result<Handle, RuntimeError> {
        let value = receiver.cloned();
        match value {
            Value::Entry(entry) => match field.name.as_str() {
                "name" => Ok(Handle::new(Value::Str(entry.name))),
                "value" => Ok(entry.value),
                _ => Err(RuntimeError::new(
                    format!("dict entry has no field '{}'", field.name),
                    field.position,
                )),
            },
            other => Err(RuntimeError::new(
                format!("'{}' has no field '{}'", other.type_name(), field.name),
                field.position,
            )),
        }
    }

    /// The fixed method surface of the runtime types: `cur.set_value`,
    /// `dict.add`, `dict.get`.
    fn call_method(
        &mut self,
        receiver: &Handle,
        call: &CallSegment,
        args: Vec<Handle>,
    ) -> Result<Option<Handle>, RuntimeError> {
        let position = call.position;
        let receiver_value = receiver.cloned();

        match (&receiver_value, call.name.as_str()) {
            (Value::Currency(_), "set_value") => {
                expect_arity(&args, 1, "set_value", position)?;
                let amount = match args[0].cloned() {
                    Value::Int(i) => i as f64,
                    Value::Float(f) => f,
                    _ => {
                        return Err(RuntimeError::new(
                            "cur.set_value() accepts only int or float",
                            position,
                        ));
                    }
                };
                receiver.with_mut(|value| {
                    if let Value::Currency(currency) = value {
                        currency.set_value(amount);
                    }
                });
                Ok(None)
            }
            (Value::Dict(dict), "add") => {
                expect_arity(&args, 2, "add", position)?;
                let name = match args[0].cloned() {
                    Value::Str(name) => name,
                    _ => {
                        return Err(RuntimeError::new(
                            "dictionary accepts only str and cur",
                            position,
                        ));
                    }
                };
                let is_currency = args[1].with(|value| matches!(value, Value::Currency(_)));
                if !is_currency {
                    return Err(RuntimeError::new(
                        "dictionary accepts only str and cur",
                        position,
                    ));
                }
                if !dict.insert(name, args[1].clone()) {
                    return Err(RuntimeError::new("this name already exists", position));
                }
                Ok(None)
            }
            (Value::Dict(dict), "get") => {
                expect_arity(&args, 1, "get", position)?;
                match args[0].cloned() {
                    Value::Str(key) => dict.get(&key).map(Some).ok_or_else(|| {
                        RuntimeError::new(
                            format!("get(\"{key}\") - no such name in dictionary"),
                            position,
                        )
                    }),
                    Value::Curtype(tag) => Ok(Some(Handle::new(Value::Dict(
                        dict.filter_by_type(&tag),
                    )))),
                    _ => Err(RuntimeError::new("expected str or curtype", position)),
                }
            }
            (other, name) => Err(RuntimeError::new(
                format!("'{}' has no method '{}'", other.type_name(), name),
                position,
            )),
        }
    }

    // ------------------------------------------------------------------
    // Assignment places
    // ------------------------------------------------------------------

    /// Resolves an assignment target to the handle to write through: a
    /// simple identifier resolves to its binding (which may be
    /// uninitialised), a dotted path to the assignable attribute of the
    /// evaluated prefix.
    fn resolve_place(&mut self, target: &ObjectAccess) -> Result<Handle, RuntimeError> {
        match target.segments.as_slice() {
            [Segment::Ident(segment)] => {
                self.frame.lookup(&segment.name).ok_or_else(|| {
                    RuntimeError::new(
                        format!("undefined variable '{}'", segment.name),
                        segment.position,
                    )
                })
            }
            [prefix @ .., Segment::Ident(field)] if !prefix.is_empty() => {
                let prefix_access = ObjectAccess {
                    segments: prefix.to_vec(),
                    position: target.position,
                };
                let receiver = self.eval_access(&prefix_access)?.ok_or_else(|| {
                    RuntimeError::new("void value in assignment target", target.position)
                })?;
                self.assignable_attribute(&receiver, field)
            }
            _ => Err(RuntimeError::new(
                "can't assign to a function call",
                target.position,
            )),
        }
    }

    /// Only a dict entry's `value` field is assignable.
    fn assignable_attribute(
        &mut self,
        receiver: &Handle,
        field: &IdentSegment,
    ) -> Result<Handle, RuntimeError> {
        let value = receiver.cloned();
        match value {
            Value::Entry(entry) if field.name == "value" => Ok(entry.value),
            Value::Entry(_) => Err(RuntimeError::new(
                format!("cannot assign to entry field '{}'", field.name),
                field.position,
            )),
            other => Err(RuntimeError::new(
                format!(
                    "'{}' has no assignable field '{}'",
                    other.type_name(),
                    field.name
                ),
                field.position,
            )),
        }
    }
}

/// The frame's expected return type; void maps to `None`.
fn expected_return(ty: ValueType) -> Option<ValueType> {
    match ty {
        ValueType::Void => None,
        other => Some(other),
    }
}

fn currency_of(handle: &Handle, position: SourcePosition) -> Result<CurrencyValue, RuntimeError> {
    match handle.cloned() {
        Value::Currency(currency) => Ok(currency),
        other => Err(RuntimeError::new(
            format!(
                "expected a cur expression in transfer, got {}",
                other.type_name()
            ),
            position,
        )),
    }
}

fn expect_arity(
    args: &[Handle],
    expected: usize,
    name: &str,
    position: SourcePosition,
) -> Result<(), RuntimeError> {
    if args.len() != expected {
        return Err(RuntimeError::new(
            format!(
                "wrong number of arguments for '{name}', expected {expected}, got {}",
                args.len()
            ),
            position,
        ));
    }
    Ok(())
}

fn target_name(target: &ObjectAccess) -> String {
    match target.segments.first() {
        Some(Segment::Ident(segment)) => segment.name.clone(),
        Some(Segment::Call(call)) => call.name.clone(),
        None => String::new(),
    }
}
