use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to an environment. Function objects hold one of these for
/// their captured scope, and a scope holds one for its parent, so a
/// function whose own binding lives in its captured scope forms a cycle;
/// such cycles are left alive for the session's lifetime.
pub type Env = Rc<RefCell<Environment>>;

/// A lexically-scoped name→value mapping with an optional outer scope.
/// Lookups walk outward; new bindings always land in the innermost scope.
/// Nothing ever rebinds an existing entry in an outer scope — `let` always
/// defines here.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Create the top-level environment for a session.
    pub fn new_global() -> Env {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Create a scope enclosed by `outer`, as for a function call frame.
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        match &self.outer {
            Some(outer) => outer.borrow().get(name),
            None => None,
        }
    }

    pub fn define(&mut self, name: &str, value: Object) {
        // insert or shadow, no further checks
        self.store.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_walks_the_outer_chain() {
        let global = Environment::new_global();
        global
            .borrow_mut()
            .define("x", Object::Integer(1));

        let inner = Environment::new_enclosed(&global);
        assert_eq!(inner.borrow().get("x"), Some(Object::Integer(1)));
        assert_eq!(inner.borrow().get("y"), None);
    }

    #[test]
    fn inner_bindings_shadow_without_touching_outer() {
        let global = Environment::new_global();
        global.borrow_mut().define("x", Object::Integer(1));

        let inner = Environment::new_enclosed(&global);
        inner.borrow_mut().define("x", Object::Integer(2));

        assert_eq!(inner.borrow().get("x"), Some(Object::Integer(2)));
        assert_eq!(global.borrow().get("x"), Some(Object::Integer(1)));
    }

    #[test]
    fn definitions_after_enclosure_are_visible() {
        // a closure's captured scope keeps evolving; later bindings must
        // be observable through the chain
        let global = Environment::new_global();
        let inner = Environment::new_enclosed(&global);
        global.borrow_mut().define("late", Object::Integer(3));
        assert_eq!(inner.borrow().get("late"), Some(Object::Integer(3)));
    }
}
