//! Lexically-scoped environment chain.
//!
//! The teacher's `Scope` keeps every live block frame in one `Vec` of
//! maps and walks it back-to-front. That collapses distinct lexical
//! scopes into a single owner, which doesn't survive the evaluator
//! needing to hold onto an *outer* environment reference across a block
//! boundary (exactly the case the `for`-desugaring and nested blocks
//! need). Here each scope is its own node with an explicit reference to
//! its enclosing scope, shared by `Rc<RefCell<_>>` so a block's fresh
//! link can be dropped independently of whoever still references its
//! parent.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

#[derive(Debug)]
struct EnvironmentData {
    values: HashMap<String, Value>,
    enclosing: Option<Environment>,
}

/// A single link in the environment chain. Cheap to clone (an `Rc`
/// bump) — cloning an `Environment` shares the same underlying scope,
/// it does not copy it.
#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

impl Environment {
    /// Creates a fresh global environment with no enclosing scope.
    pub fn global() -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData {
            values: HashMap::new(),
            enclosing: None,
        })))
    }

    /// Creates a fresh child scope enclosed by `self`.
    pub fn child(&self) -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData {
            values: HashMap::new(),
            enclosing: Some(self.clone()),
        })))
    }

    /// Binds `name` in *this* scope, overwriting silently if it is
    /// already bound here (redeclaration in the same scope is legal).
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().values.insert(name.into(), value);
    }

    /// Walks outward from this scope looking for `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        let data = self.0.borrow();
        if let Some(value) = data.values.get(name) {
            return Some(value.clone());
        }
        data.enclosing.as_ref().and_then(|parent| parent.get(name))
    }

    /// Walks outward to the innermost scope that already defines `name`
    /// and overwrites the binding there. Returns `false` if no scope in
    /// the chain defines `name` — assignment never implicitly declares.
    pub fn assign(&self, name: &str, value: Value) -> bool {
        let mut data = self.0.borrow_mut();
        if data.values.contains_key(name) {
            data.values.insert(name.to_owned(), value);
            return true;
        }
        match &data.enclosing {
            Some(parent) => parent.assign(name, value),
            None => false,
        }
    }
}
