//! Tree-walking interpreter.
//!
//! An `Interpreter` is cheap: it only holds the print handler. Each call to
//! [`Interpreter::eval_file`] is an independent session with its own source
//! file, AST, and runtime environment.

use calc_diagnostic::{
    division_by_zero, not_a_function, unknown_identifier, ErrorCode, SourceFile,
};
use calc_ir::{CompOp, File, MathOp, NodeId, NodeKind, Pos, ScopeId};

use crate::operators::{compare, fold_math};
use crate::{stdout_handler, Binding, Environment, SharedPrintHandler, Value};

pub struct Interpreter {
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Create an interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Interpreter { print_handler }
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate `text` as a file called `name`.
    ///
    /// Returns the value of the last top-level form, or `None` if any
    /// diagnostic was recorded. Diagnostics are printed before returning.
    #[tracing::instrument(level = "debug", skip(self, text))]
    pub fn eval_file(&self, name: &str, text: &str) -> Option<Value> {
        let mut source = SourceFile::new(name, text);
        let file = calc_parse::parse_file(&mut source, text)?;
        self.eval_parsed(&file, &mut source)
    }

    /// Evaluate `text` as an unnamed file.
    pub fn eval_expr(&self, text: &str) -> Option<Value> {
        self.eval_file("", text)
    }

    /// Evaluate an already parsed file.
    ///
    /// If `source` already holds diagnostics, they are printed and nothing
    /// is evaluated.
    pub fn eval_parsed(&self, file: &File, source: &mut SourceFile) -> Option<Value> {
        if source.has_errors() {
            self.print_errors(source);
            return None;
        }

        let mut session = Session::new(file, source, self);
        let result = session.run();
        let scopes = session.env.scope_count();
        tracing::debug!(result = ?result, scopes, errors = source.num_errors(), "session finished");

        if source.has_errors() {
            self.print_errors(source);
            return None;
        }
        Some(result)
    }

    fn print_errors(&self, source: &SourceFile) {
        for line in source.formatted_errors() {
            self.print_handler.println(&line);
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one evaluation session.
struct Session<'a> {
    file: &'a File,
    source: &'a mut SourceFile,
    env: Environment,
    interpreter: &'a Interpreter,
}

impl<'a> Session<'a> {
    fn new(file: &'a File, source: &'a mut SourceFile, interpreter: &'a Interpreter) -> Self {
        Session {
            file,
            source,
            env: Environment::new(),
            interpreter,
        }
    }

    /// Evaluate the top-level forms in order.
    ///
    /// Stops after the first form that leaves a diagnostic behind.
    fn run(&mut self) -> Value {
        let file = self.file;
        let root = self.env.root();
        let mut last = Value::Nil;
        for &id in &file.nodes {
            let value = self.eval(id, root);
            if let Value::Unresolved { name, pos } = &value {
                let _ = self.source.report(unknown_identifier(*pos, name));
            }
            if self.source.has_errors() {
                return Value::Nil;
            }
            last = value;
        }
        last
    }

    fn eval(&mut self, id: NodeId, scope: ScopeId) -> Value {
        calc_stack::ensure_sufficient_stack(|| self.eval_inner(id, scope))
    }

    fn eval_inner(&mut self, id: NodeId, scope: ScopeId) -> Value {
        let file = self.file;
        let node = file.node(id);
        match &node.kind {
            NodeKind::Number { value, .. } => Value::Int(*value),
            NodeKind::Str { lit } => Value::Str(unquote(lit).to_string()),
            NodeKind::Identifier { name } => match self.env.lookup(scope, name) {
                Some(Binding::Value(value)) => value.clone(),
                Some(Binding::Function { .. }) => Value::Nil,
                None => Value::Unresolved {
                    name: name.clone(),
                    pos: node.pos(),
                },
            },
            NodeKind::Math { op, operands } => self.eval_math(*op, operands, scope, node.pos()),
            NodeKind::Comp { op, lhs, rhs } => self.eval_comp(*op, *lhs, *rhs, scope),
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(*cond, scope).is_truthy() {
                    self.eval(*then_branch, scope)
                } else if let Some(else_branch) = else_branch {
                    self.eval(*else_branch, scope)
                } else {
                    Value::Nil
                }
            }
            NodeKind::Define { name, .. } => {
                self.env.define(scope, name, id);
                Value::Nil
            }
            NodeKind::Set { name, value } => {
                let value = self.eval(*value, scope);
                self.env.bind(scope, name, value);
                Value::Nil
            }
            NodeKind::Print { args } => {
                let line = args
                    .iter()
                    .map(|&arg| self.eval(arg, scope).to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                self.interpreter.print_handler.println(&line);
                Value::Nil
            }
            NodeKind::Concat { args } => {
                let mut joined = String::new();
                for &arg in args {
                    // Number literals keep their source spelling.
                    if let NodeKind::Number { lit, .. } = &file.node(arg).kind {
                        joined.push_str(lit);
                        continue;
                    }
                    match self.eval(arg, scope) {
                        Value::Int(n) => joined.push_str(&n.to_string()),
                        Value::Str(s) => joined.push_str(&s),
                        Value::Nil | Value::Unresolved { .. } => {}
                    }
                }
                Value::Str(joined)
            }
            NodeKind::Call { callee, args } => self.eval_call(callee, args, scope, node.pos()),
            NodeKind::Case { test, body } => {
                if self.eval(*test, scope).is_truthy() {
                    self.eval_body(body, scope)
                } else {
                    Value::Nil
                }
            }
            NodeKind::Switch { pred, cases } => self.eval_switch(*pred, cases, scope),
        }
    }

    /// Left fold of the operands. A non-integer operand makes the result 0.
    fn eval_math(&mut self, op: MathOp, operands: &[NodeId], scope: ScopeId, pos: Pos) -> Value {
        let mut values = Vec::with_capacity(operands.len());
        for &operand in operands {
            match self.eval(operand, scope).as_int() {
                Some(n) => values.push(n),
                None => return Value::Int(0),
            }
        }
        match fold_math(op, &values) {
            Ok(n) => Value::Int(n),
            Err(_) => {
                let _ = self.source.report(division_by_zero(pos));
                Value::Int(0)
            }
        }
    }

    fn eval_comp(&mut self, op: CompOp, lhs: NodeId, rhs: NodeId, scope: ScopeId) -> Value {
        let lhs = self.eval(lhs, scope).as_int();
        let rhs = self.eval(rhs, scope).as_int();
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => Value::from(compare(op, lhs, rhs)),
            _ => Value::Int(0),
        }
    }

    /// Run the first matching case and return its last body value.
    fn eval_switch(&mut self, pred: Option<NodeId>, cases: &[NodeId], scope: ScopeId) -> Value {
        let file = self.file;
        let pred = pred.map(|pred| self.eval(pred, scope));
        for &case in cases {
            let NodeKind::Case { test, body } = &file.node(case).kind else {
                continue;
            };
            let test = self.eval(*test, scope);
            let matched = match &pred {
                Some(pred) => test == *pred,
                None => test.is_truthy(),
            };
            if matched {
                return self.eval_body(body, scope);
            }
        }
        Value::Nil
    }

    /// Evaluate `body` in order, returning the last value.
    fn eval_body(&mut self, body: &[NodeId], scope: ScopeId) -> Value {
        let mut last = Value::Nil;
        for &node in body {
            last = self.eval(node, scope);
        }
        last
    }

    /// Call a user function.
    ///
    /// Arguments are evaluated in the caller's scope and bound, in order, in
    /// a fresh frame under the function's defining scope. The first body form
    /// with a non-nil value is the result.
    #[tracing::instrument(level = "debug", skip(self, args, scope, pos))]
    fn eval_call(&mut self, callee: &str, args: &[NodeId], scope: ScopeId, pos: Pos) -> Value {
        let file = self.file;
        let function = match self.env.lookup(scope, callee) {
            Some(Binding::Function { node, env }) => match &file.node(*node).kind {
                NodeKind::Define { params, body, .. } => Some((params, body, *env)),
                _ => None,
            },
            _ => None,
        };
        let Some((params, body, env)) = function else {
            let _ = self
                .source
                .report(not_a_function(ErrorCode::E2003, pos, callee));
            return Value::Nil;
        };

        let values: Vec<Value> = args.iter().map(|&arg| self.eval(arg, scope)).collect();

        let frame = self.env.push_frame(env);
        for (param, value) in params.iter().zip(values) {
            self.env.bind(frame, param, value);
        }
        let mut result = Value::Nil;
        for &node in body {
            let value = self.eval(node, frame);
            if !value.is_nil() {
                result = value;
                break;
            }
        }
        self.env.pop_frame(frame);
        result
    }
}

/// Strip the quotes from a string literal.
fn unquote(lit: &str) -> &str {
    lit.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(lit)
}
