//! Lexical environments.
//!
//! An [`Environment`] is a cheap handle to one frame of bindings. Frames link
//! to their enclosing frame, forming the chain that identifier lookup walks.
//! Closures and quoted values hold handles, which keeps their frames alive.
//!
//! Borrows of a frame never outlive a single method call, so no borrow is
//! held while the interpreter evaluates anything.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{already_defined, not_defined};
use crate::{EvalError, EvalResult, Value};

/// Single-threaded shared cell. All frame allocation goes through
/// [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One frame of bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

/// Handle to a frame. Clones share the frame.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A fresh root frame with no parent.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A fresh, empty child frame of `self`.
    pub fn new_scope(&self) -> Environment {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        }))
    }

    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// Bind `name` in this frame.
    ///
    /// Fails with `AlreadyDefined` if this frame already binds `name`;
    /// bindings in enclosing frames are shadowed, not touched.
    pub fn define(&self, name: impl Into<String>, value: Value) -> EvalResult {
        let name = name.into();
        let mut scope = self.0.borrow_mut();
        if scope.bindings.contains_key(&name) {
            return Err(already_defined(&name));
        }
        scope.bindings.insert(name, value.clone());
        Ok(value)
    }

    /// Value of the nearest binding of `name`.
    pub fn get(&self, name: &str) -> EvalResult {
        let frame = self.owner_of(name).ok_or_else(|| not_defined(name))?;
        let scope = frame.0.borrow();
        scope
            .bindings
            .get(name)
            .cloned()
            .ok_or_else(|| not_defined(name))
    }

    /// Overwrite the nearest binding of `name` in the frame that owns it.
    pub fn set(&self, name: &str, value: Value) -> EvalResult {
        let frame = self.owner_of(name).ok_or_else(|| not_defined(name))?;
        frame
            .0
            .borrow_mut()
            .bindings
            .insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Define every pair, stopping at the first collision.
    pub fn load<N, I>(&self, pairs: I) -> Result<(), EvalError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        for (name, value) in pairs {
            self.define(name, value)?;
        }
        Ok(())
    }

    /// Whether this frame itself binds `name`.
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// Number of enclosing frames; a root frame has depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(frame) = current {
            depth += 1;
            current = frame.parent();
        }
        depth
    }

    /// Whether both handles refer to the same frame.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        LocalScope::ptr_eq(&self.0, &other.0)
    }

    /// Names bound in this frame, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// The nearest frame binding `name`, walking outward iteratively.
    fn owner_of(&self, name: &str) -> Option<Environment> {
        let mut current = self.clone();
        loop {
            if current.contains_local(name) {
                return Some(current);
            }
            current = current.parent()?;
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

/// Shows only this frame's names; values may contain the frame itself.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.local_names())
            .field("depth", &self.depth())
            .finish()
    }
}
