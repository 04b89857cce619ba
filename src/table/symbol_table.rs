use std::{collections::HashMap, fmt::Display};

use crate::errors::errors::Error;

use super::entries::{Entry, ProcedureEntry};

/// Index of a scope inside a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    pub const GLOBAL: ScopeId = ScopeId(0);
}

/// A single scope: the names declared in it and the scope enclosing it.
#[derive(Debug)]
pub struct Scope {
    entries: HashMap<String, Entry>,
    parent: Option<ScopeId>,
}

impl Scope {
    fn new(parent: Option<ScopeId>) -> Self {
        Scope {
            entries: HashMap::new(),
            parent,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name.
    pub fn sorted_entries(&self) -> Vec<(&String, &Entry)> {
        let mut entries = self.entries.iter().collect::<Vec<_>>();
        entries.sort_by(|left, right| left.0.cmp(right.0));
        entries
    }
}

/// Every scope of a compilation unit.
///
/// Scopes live in an arena and refer to their parent by index. The global
/// scope is created with the table and is the root of every parent chain.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope::new(None)],
        }
    }

    /// Creates an empty scope nested in `parent`.
    pub fn add_scope(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(Scope::new(Some(parent)));
        ScopeId(self.scopes.len() - 1)
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Declares `name` in `scope`.
    ///
    /// Fails with the error built by `on_redeclaration` if the name already
    /// has an entry in that exact scope; enclosing scopes are not consulted.
    pub fn enter(
        &mut self,
        scope: ScopeId,
        name: &str,
        entry: Entry,
        on_redeclaration: impl FnOnce() -> Error,
    ) -> Result<(), Error> {
        let scope = &mut self.scopes[scope.0];
        if scope.entries.contains_key(name) {
            Err(on_redeclaration())
        } else {
            log::trace!("entered {} as {}", name, entry);
            scope.entries.insert(name.to_string(), entry);
            Ok(())
        }
    }

    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<&Entry> {
        self.scope(scope).get(name)
    }

    /// Finds the nearest declaration of `name`, starting at `scope` and
    /// walking outwards to the global scope.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Entry> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.scope(id);
            if let Some(entry) = scope.get(name) {
                return Some(entry);
            }
            current = scope.parent;
        }
        None
    }

    pub fn lookup_procedure(&self, name: &str) -> Option<&ProcedureEntry> {
        match self.lookup_local(ScopeId::GLOBAL, name) {
            Some(Entry::Procedure(procedure)) => Some(procedure),
            _ => None,
        }
    }

    /// Nesting depth, 0 for the global scope.
    pub fn level(&self, scope: ScopeId) -> usize {
        let mut level = 0;
        let mut current = self.scope(scope).parent;
        while let Some(id) = current {
            level += 1;
            current = self.scope(id).parent;
        }
        level
    }

    /// Renders `scope` and all scopes enclosing it.
    pub fn display_scope(&self, scope: ScopeId) -> ScopeDisplay<'_> {
        ScopeDisplay { table: self, scope }
    }
}

pub struct ScopeDisplay<'a> {
    table: &'a SymbolTable,
    scope: ScopeId,
}

impl Display for ScopeDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut current = Some(self.scope);
        while let Some(id) = current {
            let scope = self.table.scope(id);
            writeln!(f, "  level {}", self.table.level(id))?;
            if scope.is_empty() {
                writeln!(f, "    <empty>")?;
            }
            for (name, entry) in scope.sorted_entries() {
                writeln!(f, "    {:<15} : {}", name, entry)?;
            }
            current = scope.parent;
        }
        Ok(())
    }
}
