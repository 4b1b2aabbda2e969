//! Symbol tables.
//!
//! Block scopes live in an arena of frames, each pointing at its parent by
//! index. Below the outermost frame sits a read-only base table, by default
//! the builtin operator and function signatures.

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::trace;

use super::types::Type;

lazy_static! {
    /// Signatures of the operators and builtin functions, shared by every
    /// type check that does not bring its own base table.
    pub static ref BUILTINS: HashMap<String, Type> = {
        let mut map = HashMap::new();

        for operator in ["+", "-", "*", "/", "%"] {
            map.insert(
                operator.to_string(),
                Type::function(vec![Type::Int, Type::Int], Type::Int),
            );
        }
        for operator in ["<", "<=", ">", ">="] {
            map.insert(
                operator.to_string(),
                Type::function(vec![Type::Int, Type::Int], Type::Bool),
            );
        }
        for operator in ["and", "or"] {
            map.insert(
                operator.to_string(),
                Type::function(vec![Type::Bool, Type::Bool], Type::Bool),
            );
        }
        map.insert(
            String::from("print_int"),
            Type::function(vec![Type::Int], Type::Unit),
        );
        map.insert(
            String::from("print_bool"),
            Type::function(vec![Type::Bool], Type::Unit),
        );

        map
    };
}

#[derive(Debug, Default)]
pub struct Scope {
    bindings: HashMap<String, Type>,
    parent: Option<usize>,
}

impl Scope {
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.bindings.get(name)
    }
}

#[derive(Debug)]
pub struct SymbolTable<'a> {
    base: &'a HashMap<String, Type>,
    scopes: Vec<Scope>,
    current: Option<usize>,
}

impl SymbolTable<'static> {
    pub fn with_builtins() -> Self {
        SymbolTable::new(&BUILTINS)
    }
}

impl<'a> SymbolTable<'a> {
    /// A table over `base` with one empty global frame for the caller's own
    /// declarations.
    pub fn new(base: &'a HashMap<String, Type>) -> Self {
        let mut table = SymbolTable {
            base,
            scopes: vec![],
            current: None,
        };
        table.push_scope();
        table
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope {
            bindings: HashMap::new(),
            parent: self.current,
        });
        self.current = Some(self.scopes.len() - 1);
        trace!(depth = self.depth(), "entered scope");
    }

    /// Drops the innermost frame and everything declared in it.
    pub fn pop_scope(&mut self) {
        if let Some(scope) = self.scopes.pop() {
            self.current = scope.parent;
            trace!(depth = self.depth(), dropped = scope.bindings.len(), "left scope");
        }
    }

    /// Number of frames currently open, not counting the base table.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Binds `name` in the innermost frame, replacing a binding of the same
    /// name in that frame only.
    pub fn declare(&mut self, name: &str, ty: Type) {
        if self.current.is_none() {
            self.push_scope();
        }

        if let Some(index) = self.current {
            self.scopes[index].bindings.insert(name.to_string(), ty);
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Type> {
        let mut index = self.current;

        while let Some(i) = index {
            if let Some(ty) = self.scopes[i].get(name) {
                return Some(ty);
            }
            index = self.scopes[i].parent;
        }

        self.base.get(name)
    }

    /// Rebinds `name` in the nearest frame that defines it. Returns false
    /// when no frame or base entry defines it. The base table is never
    /// written.
    pub fn assign(&mut self, name: &str, ty: Type) -> bool {
        let mut index = self.current;

        while let Some(i) = index {
            if let Some(binding) = self.scopes[i].bindings.get_mut(name) {
                *binding = ty;
                return true;
            }
            index = self.scopes[i].parent;
        }

        self.base.contains_key(name)
    }
}
