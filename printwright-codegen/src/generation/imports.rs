//! Import registration and alias resolution.

use std::{
    cell::{OnceCell, RefCell},
    collections::{BTreeMap, HashMap},
    fmt,
    rc::Rc,
};

use printwright_core::{default_alias, sanitize, unvendor};

use crate::error::{ContractViolation, violation};

/// Tracks the imports a generated file needs and the alias each one is
/// referenced by.
///
/// Every distinct (unvendored) path gets exactly one alias. The preferred
/// name is used when it is free; otherwise the sanitized full path becomes
/// the alias. Aliases never collide.
///
/// # Example
///
/// ```
/// use printwright_codegen::ImportRegistry;
///
/// let mut imports = ImportRegistry::new();
/// assert_eq!(imports.register("fmt", "fmt"), "fmt");
/// assert_eq!(imports.register("fmt", "example.com/pkg/fmt"), "example_com_pkg_fmt");
/// assert_eq!(imports.register("other", "fmt"), "fmt");
///
/// let entries: Vec<_> = imports.entries().collect();
/// assert_eq!(
///     entries,
///     [("example_com_pkg_fmt", "example.com/pkg/fmt"), ("fmt", "fmt")]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    /// Alias -> path
    aliases: HashMap<String, String>,
    /// Path -> alias, ordered by path for the import block
    paths: BTreeMap<String, String>,
}

impl ImportRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `raw_path` under the preferred `name` and return the alias to
    /// use in generated code.
    ///
    /// An empty `name` is replaced by the last segment of the path.
    ///
    /// # Panics
    ///
    /// Panics when the preferred name is taken and the sanitized path is
    /// already the alias of a different path, or when no non-empty alias
    /// can be derived (empty name and empty path).
    #[track_caller]
    pub fn register(&mut self, name: &str, raw_path: &str) -> String {
        let path = unvendor(raw_path);

        if let Some(alias) = self.paths.get(path) {
            return alias.clone();
        }

        let name = if name.is_empty() {
            default_alias(path)
        } else {
            name.to_string()
        };
        if name.is_empty() {
            violation(ContractViolation::EmptyAlias {
                path: path.to_string(),
            });
        }
        if !self.aliases.contains_key(&name) {
            tracing::debug!(alias = %name, path, "registered import");
            self.insert(name.clone(), path);
            return name;
        }

        let fallback = sanitize(path);
        if fallback.is_empty() {
            violation(ContractViolation::EmptyAlias {
                path: path.to_string(),
            });
        }
        if let Some(existing) = self.aliases.get(&fallback) {
            violation(ContractViolation::AmbiguousImport {
                alias: fallback,
                existing: existing.clone(),
                requested: path.to_string(),
            });
        }
        tracing::debug!(
            preferred = %name,
            alias = %fallback,
            path,
            "import alias taken, using full path"
        );
        self.insert(fallback.clone(), path);
        fallback
    }

    /// Look up the alias registered for a path.
    pub fn alias_of(&self, raw_path: &str) -> Option<&str> {
        self.paths.get(unvendor(raw_path)).map(String::as_str)
    }

    /// Iterate `(alias, path)` pairs sorted by path.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths
            .iter()
            .map(|(path, alias)| (alias.as_str(), path.as_str()))
    }

    /// Check if no import has been registered.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Get the number of registered imports.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    fn insert(&mut self, alias: String, path: &str) {
        self.paths.insert(path.to_string(), alias.clone());
        self.aliases.insert(alias, path.to_string());
    }
}

/// A deferred import.
///
/// Obtaining an `Import` is free; the import only becomes part of the file
/// once [`Import::resolve`] is called, which returns the alias to emit.
/// Resolving again returns the same alias without touching the registry.
pub struct Import {
    name: String,
    path: String,
    registry: Rc<RefCell<ImportRegistry>>,
    alias: OnceCell<String>,
}

impl Import {
    pub(crate) fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        registry: Rc<RefCell<ImportRegistry>>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            registry,
            alias: OnceCell::new(),
        }
    }

    /// Register the import if needed and return its alias.
    #[track_caller]
    pub fn resolve(&self) -> &str {
        self.alias
            .get_or_init(|| self.registry.borrow_mut().register(&self.name, &self.path))
    }

    /// Whether [`Import::resolve`] has been called.
    pub fn is_resolved(&self) -> bool {
        self.alias.get().is_some()
    }

    /// The path as requested, before unvendoring.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Debug for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Import")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("alias", &self.alias.get())
            .finish()
    }
}
