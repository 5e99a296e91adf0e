use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::builtin::authored_entries;
use crate::entry::{CatalogEntry, Category};
use crate::error::{CatalogError, Result};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::index(authored_entries()));

/// Ordered, read-only set of components.
///
/// Iteration order is insertion order and never changes after construction.
/// Both resolvers enumerate this list, and it doubles as the "show
/// everything" fallback offered when neither resolver has a confident guess.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, usize>,
    /// Case-folded name/alias -> first entry (catalog order) that declares it.
    by_surface: HashMap<String, usize>,
}

/// A case-folded name or alias declared by more than one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceCollision {
    pub surface: String,
    /// Entry names in catalog order; the first one wins exact matching.
    pub entries: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { components: Vec<CatalogEntry> },
    List(Vec<CatalogEntry>),
}

impl Catalog {
    /// The bundled catalog, built on first use and shared for the process lifetime.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog from authored entries, enforcing unique non-empty names.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !seen.insert(fold(&entry.name)) {
                return Err(CatalogError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }

        let catalog = Self::index(entries);
        for collision in catalog.surface_collisions() {
            log::warn!(
                "Surface '{}' is declared by {}; '{}' wins exact matches",
                collision.surface,
                collision.entries.join(", "),
                collision.entries[0]
            );
        }
        Ok(catalog)
    }

    /// Parse a JSON catalog: either a bare array of entries or `{"components": [...]}`.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let entries = match serde_json::from_slice::<CatalogDocument>(bytes)? {
            CatalogDocument::Wrapped { components } => components,
            CatalogDocument::List(entries) => entries,
        };
        Self::from_entries(entries)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let catalog = Self::from_json(&bytes)?;
        log::debug!(
            "Loaded {} components from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn index(entries: Vec<CatalogEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_surface = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_name.entry(entry.name.clone()).or_insert(idx);
            for surface in entry.surfaces() {
                by_surface.entry(fold(surface)).or_insert(idx);
            }
        }
        Self {
            entries,
            by_name,
            by_surface,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Case-insensitive lookup by name or alias; the first entry in catalog
    /// order wins when a surface string is shared.
    pub fn find_ci(&self, text: &str) -> Option<&CatalogEntry> {
        self.by_surface
            .get(&fold(text.trim()))
            .map(|&idx| &self.entries[idx])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// Resolve names in the given order, silently dropping any that are not
    /// in the catalog.
    pub fn select<'a>(&'a self, names: &[&str]) -> Vec<&'a CatalogEntry> {
        names
            .iter()
            .filter_map(|name| {
                let found = self.get(name);
                if found.is_none() {
                    log::debug!("Dropping unknown component '{name}'");
                }
                found
            })
            .collect()
    }

    /// Every case-folded name/alias that more than one entry declares.
    pub fn surface_collisions(&self) -> Vec<SurfaceCollision> {
        let mut owners: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            let mut own: HashSet<String> = HashSet::new();
            for surface in entry.surfaces() {
                let folded = fold(surface);
                if own.insert(folded.clone()) {
                    owners.entry(folded).or_default().push(idx);
                }
            }
        }

        owners
            .into_iter()
            .filter(|(_, idxs)| idxs.len() > 1)
            .map(|(surface, idxs)| SurfaceCollision {
                surface,
                entries: idxs
                    .into_iter()
                    .map(|idx| self.entries[idx].name.clone())
                    .collect(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Case folding shared by every surface comparison.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}
