//! Flat AST for calc programs.
//!
//! Nodes live in a `NodeArena` and refer to their children by `NodeId`.
//! `NodeKind` is a closed set: the parser and evaluator match on it
//! exhaustively.

use std::fmt;
use std::ops::Index;

use crate::{Pos, ScopeId, ScopeTree, Span, TokenKind};

/// Index into a `NodeArena`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Arithmetic and boolean operators heading a `Math` form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
}

impl MathOp {
    pub fn from_token(kind: TokenKind) -> Option<MathOp> {
        Some(match kind {
            TokenKind::Add => MathOp::Add,
            TokenKind::Sub => MathOp::Sub,
            TokenKind::Mul => MathOp::Mul,
            TokenKind::Div => MathOp::Div,
            TokenKind::Mod => MathOp::Mod,
            TokenKind::And => MathOp::And,
            TokenKind::Or => MathOp::Or,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "*",
            MathOp::Div => "/",
            MathOp::Mod => "%",
            MathOp::And => "and",
            MathOp::Or => "or",
        }
    }
}

/// Comparison operators heading a `Comp` form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompOp {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
}

impl CompOp {
    pub fn from_token(kind: TokenKind) -> Option<CompOp> {
        Some(match kind {
            TokenKind::Lt => CompOp::Lt,
            TokenKind::Lte => CompOp::Lte,
            TokenKind::Gt => CompOp::Gt,
            TokenKind::Gte => CompOp::Gte,
            TokenKind::Eq => CompOp::Eq,
            TokenKind::Neq => CompOp::Neq,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompOp::Lt => "<",
            CompOp::Lte => "<=",
            CompOp::Gt => ">",
            CompOp::Gte => ">=",
            CompOp::Eq => "=",
            CompOp::Neq => "<>",
        }
    }
}

/// The shape of a node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum NodeKind {
    /// Reference to a bound name.
    Identifier { name: String },
    /// Integer literal; `lit` is the source text, sign included.
    Number { lit: String, value: i64 },
    /// String literal; `lit` keeps its surrounding quotes.
    Str { lit: String },
    /// `(op a b ...)` over `+ - * / % and or`.
    Math { op: MathOp, operands: Vec<NodeId> },
    /// `(op a b)` over `< <= > >= = <>`.
    Comp { op: CompOp, lhs: NodeId, rhs: NodeId },
    If {
        cond: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    },
    /// User function. `scope` is the parse-time scope holding the parameters.
    Define {
        name: String,
        params: Vec<String>,
        body: Vec<NodeId>,
        scope: ScopeId,
    },
    Set { name: String, value: NodeId },
    Print { args: Vec<NodeId> },
    Concat { args: Vec<NodeId> },
    /// Call of a previously defined function.
    Call { callee: String, args: Vec<NodeId> },
    Case { test: NodeId, body: Vec<NodeId> },
    Switch {
        pred: Option<NodeId>,
        cases: Vec<NodeId>,
    },
}

impl NodeKind {
    /// Short name of the variant, for logs and test failures.
    pub fn describe(&self) -> &'static str {
        match self {
            NodeKind::Identifier { .. } => "identifier",
            NodeKind::Number { .. } => "number",
            NodeKind::Str { .. } => "string",
            NodeKind::Math { .. } => "math expression",
            NodeKind::Comp { .. } => "comparison",
            NodeKind::If { .. } => "if expression",
            NodeKind::Define { .. } => "define",
            NodeKind::Set { .. } => "set",
            NodeKind::Print { .. } => "print",
            NodeKind::Concat { .. } => "concat",
            NodeKind::Call { .. } => "call",
            NodeKind::Case { .. } => "case",
            NodeKind::Switch { .. } => "switch",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.span.start
    }
}

/// Contiguous storage for all nodes of one file.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Store a node and return its handle.
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("node arena exceeds {} nodes", u32::MAX));
        self.nodes.push(Node { kind, span });
        NodeId(id)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.get(id)
    }
}

/// What a name means to the parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    /// Bound by `define`; calls must pass `arity` arguments.
    Function { arity: usize },
    /// Bound by `set`.
    Variable,
    /// Parameter of the enclosing `define`, unbound until call time.
    Parameter,
}

/// A parsed source file: its top-level forms plus everything they refer to.
#[derive(Clone, Debug)]
pub struct File {
    pub span: Span,
    /// Top-level forms in source order.
    pub nodes: Vec<NodeId>,
    pub arena: NodeArena,
    /// Parse-time scopes; `define` bodies point into this tree.
    pub scopes: ScopeTree<Symbol>,
}

impl File {
    pub fn new(span: Span) -> Self {
        File {
            span,
            nodes: Vec::new(),
            arena: NodeArena::new(),
            scopes: ScopeTree::new(),
        }
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }
}
