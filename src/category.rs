use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use lazy_static::lazy_static;

/// Named tag attached to a log call so the engine can filter or route it.
///
/// Clones share the same underlying category. A category may reference other
/// categories; [`Category::contains`] walks those references. References are
/// for [`LogHandle`](crate::LogHandle) implementations that filter on them;
/// [`LogBridge`](crate::LogBridge) routes on the name alone.
#[derive(Clone)]
pub struct Category {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    references: RwLock<Vec<Category>>,
}

impl Category {
    /// Creates a category that is not interned in any registry.
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            inner: Arc::new(Inner {
                name: name.into(),
                references: RwLock::new(Vec::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Adds a reference to `other`. No-op when `other` is already referenced
    /// or when `other` already contains `self`.
    pub fn add(&self, other: &Category) {
        // Check and insert must not interleave with another `add`, or two
        // opposite adds can both pass the check and close a cycle.
        let _link = LINK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        if other.contains(self) {
            return;
        }
        let mut refs = self
            .inner
            .references
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if !refs.iter().any(|r| r == other) {
            refs.push(other.clone());
        }
    }

    /// Removes a direct reference. Returns whether one was removed.
    pub fn remove(&self, other: &Category) -> bool {
        let mut refs = self
            .inner
            .references
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = refs.len();
        refs.retain(|r| r != other);
        refs.len() != before
    }

    pub fn has_references(&self) -> bool {
        !self
            .inner
            .references
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Snapshot of the direct references.
    pub fn references(&self) -> Vec<Category> {
        self.inner
            .references
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// True if `other` is this category or is reachable through its references.
    pub fn contains(&self, other: &Category) -> bool {
        self.contains_name(other.name())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        if self.name() == name {
            return true;
        }
        self.inner
            .references
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|r| r.contains_name(name))
    }
}

impl AsRef<Category> for Category {
    fn as_ref(&self) -> &Category {
        self
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        let refs = self.references();
        if !refs.is_empty() {
            f.write_str(" [ ")?;
            for (i, r) in refs.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(r, f)?;
            }
            f.write_str(" ]")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Category")
            .field("name", &self.name())
            .field("references", &self.references())
            .finish()
    }
}

/// Interns categories by name.
#[derive(Default)]
pub struct CategoryRegistry {
    categories: Mutex<HashMap<String, Category>>,
}

lazy_static! {
    static ref GLOBAL_REGISTRY: CategoryRegistry = CategoryRegistry::new();
    static ref LINK_LOCK: Mutex<()> = Mutex::new(());
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static CategoryRegistry {
        &GLOBAL_REGISTRY
    }

    /// Returns the category registered under `name`, creating it on first use.
    pub fn get(&self, name: &str) -> Category {
        let mut categories = self
            .categories
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        categories
            .entry(name.to_string())
            .or_insert_with(|| Category::new(name))
            .clone()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.categories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Drops `name` from the registry. Clones already handed out stay valid.
    pub fn detach(&self, name: &str) -> bool {
        self.categories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .is_some()
    }

    /// A fresh category that is never stored in the registry.
    pub fn detached(&self, name: &str) -> Category {
        Category::new(name)
    }
}

/// Shorthand for `CategoryRegistry::global().get(name)`.
pub fn category(name: &str) -> Category {
    CategoryRegistry::global().get(name)
}
