//! Lexical scopes as an arena.
//!
//! Each scope record stores its bindings and the index of its parent, so a
//! lookup walks parent indices from the innermost scope out to the root.
//! There are no parent pointers and no ownership cycles.
//!
//! The tree is generic over the binding type: the parser binds names to
//! [`Symbol`](crate::Symbol)s, the evaluator binds them to runtime values.

use rustc_hash::FxHashMap;
use std::fmt;

/// Index into a `ScopeTree`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The root scope of every tree.
    pub const ROOT: ScopeId = ScopeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}

/// A single scope: name bindings plus the enclosing scope.
#[derive(Clone, Debug)]
struct ScopeData<T> {
    bindings: FxHashMap<String, T>,
    parent: Option<ScopeId>,
}

/// Arena of scopes rooted at `ScopeId::ROOT`.
#[derive(Clone, Debug)]
pub struct ScopeTree<T> {
    scopes: Vec<ScopeData<T>>,
}

impl<T> ScopeTree<T> {
    /// Create a tree holding only an empty root scope.
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![ScopeData {
                bindings: FxHashMap::default(),
                parent: None,
            }],
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId::ROOT
    }

    /// Number of scopes in the arena.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// A tree always holds its root, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Open a new child scope of `parent`.
    pub fn push(&mut self, parent: ScopeId) -> ScopeId {
        let id = u32::try_from(self.scopes.len())
            .unwrap_or_else(|_| panic!("scope arena exceeds {} scopes", u32::MAX));
        self.scopes.push(ScopeData {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        });
        ScopeId(id)
    }

    /// Discard the newest scope.
    ///
    /// # Panics
    /// Panics if `id` is the root or is not the most recently pushed scope;
    /// either means scope pushes and pops are out of balance.
    pub fn pop(&mut self, id: ScopeId) {
        assert!(
            id != ScopeId::ROOT && id.index() + 1 == self.scopes.len(),
            "imbalanced scope: cannot pop {id:?} with {} scopes open",
            self.scopes.len()
        );
        self.scopes.pop();
    }

    /// Bind `name` in `scope`, replacing any previous binding there.
    pub fn insert(&mut self, scope: ScopeId, name: impl Into<String>, binding: T) {
        self.scopes[scope.index()]
            .bindings
            .insert(name.into(), binding);
    }

    /// Look `name` up from `scope` outward to the root.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&T> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let data = &self.scopes[id.index()];
            if let Some(binding) = data.bindings.get(name) {
                return Some(binding);
            }
            current = data.parent;
        }
        None
    }
}

impl<T> Default for ScopeTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
