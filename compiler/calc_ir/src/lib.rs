//! Calc IR - shared data types for the calc interpreter.
//!
//! This crate contains the data structures every stage agrees on:
//! - `Pos` and `Span` for source locations
//! - `TokenKind` and the keyword table for scanner output
//! - The flat AST (`NodeKind` in a `NodeArena`, addressed by `NodeId`)
//! - `ScopeTree`, an arena of lexical scopes linked by parent index
//!
//! # Design
//!
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)` handles.
//! - **No back-pointers**: scopes refer to their parent by `ScopeId`, and
//!   bindings refer to nodes by `NodeId`, so a `define` can bind itself into
//!   its enclosing scope without an ownership cycle.

mod ast;
mod pos;
mod scope;
mod token;

pub use ast::{CompOp, File, MathOp, Node, NodeArena, NodeId, NodeKind, Symbol};
pub use pos::{Pos, Span};
pub use scope::{ScopeId, ScopeTree};
pub use token::{lookup_keyword, TokenKind};
