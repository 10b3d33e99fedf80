//! Runtime environment.
//!
//! The evaluator keeps its own `ScopeTree`, separate from the parser's, with
//! runtime bindings. Every call activation pushes a fresh scope whose parent
//! is the scope the function was defined in, and pops it on return.

use calc_ir::{NodeId, ScopeId, ScopeTree};

use crate::Value;

/// What a name is bound to at run time.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    /// Bound by `set` or as a call argument.
    Value(Value),
    /// Bound by `define`. `env` is the scope the definition ran in.
    Function { node: NodeId, env: ScopeId },
}

#[derive(Debug, Default)]
pub struct Environment {
    scopes: ScopeTree<Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: ScopeTree::new(),
        }
    }

    pub fn root(&self) -> ScopeId {
        self.scopes.root()
    }

    /// Bind `name` to a value in `scope`.
    pub fn bind(&mut self, scope: ScopeId, name: &str, value: Value) {
        self.scopes.insert(scope, name, Binding::Value(value));
    }

    /// Bind `name` to the `define` node `node`, closing over `scope`.
    pub fn define(&mut self, scope: ScopeId, name: &str, node: NodeId) {
        self.scopes
            .insert(scope, name, Binding::Function { node, env: scope });
    }

    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Binding> {
        self.scopes.lookup(scope, name)
    }

    /// Open the scope for one call activation.
    pub fn push_frame(&mut self, env: ScopeId) -> ScopeId {
        self.scopes.push(env)
    }

    /// Close a call activation.
    ///
    /// # Panics
    /// Panics if `frame` is not the innermost open activation.
    pub fn pop_frame(&mut self, frame: ScopeId) {
        self.scopes.pop(frame);
    }

    /// Number of live scopes, root included.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}
