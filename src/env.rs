// ABOUTME: Environment module for managing variable bindings and scopes

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A symbol table with an optional parent scope.
///
/// The top-level environment has no parent and receives global definitions.
/// Every lambda carries its own environment, whose parent is attached to the
/// caller's scope at invocation time; a child scope never outlives its parent
/// because parent links are reference counted.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates a new root environment with no parent
    pub fn new() -> Rc<Self> {
        Rc::new(Environment::default())
    }

    /// Creates a new child environment with a parent
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(Some(parent)),
        })
    }

    /// Binds in THIS scope, replacing any existing binding
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Walks to the root scope and binds there
    pub fn define_global(&self, name: String, value: Value) {
        let parent = self.parent.borrow().clone();
        match parent {
            Some(mut scope) => {
                loop {
                    let grandparent = scope.parent.borrow().clone();
                    match grandparent {
                        Some(p) => scope = p,
                        None => break,
                    }
                }
                scope.define(name, value);
            }
            None => self.define(name, value),
        }
    }

    /// Looks up a symbol in THIS scope and parent scopes recursively,
    /// returning an independent copy of the bound value
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }

        if let Some(ref parent) = *self.parent.borrow() {
            return parent.get(name);
        }

        None
    }

    /// Attaches the caller's scope as this environment's parent; called when
    /// a fully applied lambda is about to evaluate its body
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Copies every binding; the parent pointer is shared, not copied
    pub fn deep_copy(&self) -> Environment {
        Environment {
            bindings: RefCell::new(self.bindings.borrow().clone()),
            parent: RefCell::new(self.parent.borrow().clone()),
        }
    }
}
