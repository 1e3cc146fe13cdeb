//! Static catalog of icon sets and their families
//!
//! The catalog is a two-level table: set -> ordered families. It is built once
//! and only read afterwards. Enumeration order is the declaration order of the
//! table and is relied on by resolution (set expansion) and by suggestions.

mod data;

pub use data::STYLES;

use crate::errors::StreamlineError;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_static(data::BUILTIN_SETS).with_aliases(
        data::BUILTIN_ALIASES
            .iter()
            .map(|(alias, key)| (alias.to_string(), key.to_string())),
    )
});

/// A single icon style within a set, addressed by its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub slug: String,
    pub display_name: String,
}

impl Family {
    pub fn new(slug: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            display_name: display_name.into(),
        }
    }
}

/// A named group of related families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySet {
    /// Lowercase lookup key, e.g. `material-pro`.
    pub key: String,
    /// Human name, e.g. `Material Pro`.
    pub name: String,
    pub families: Vec<Family>,
}

impl FamilySet {
    pub fn new(key: impl Into<String>, name: impl Into<String>, families: Vec<Family>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            families,
        }
    }

    pub fn slugs(&self) -> Vec<String> {
        self.families.iter().map(|f| f.slug.clone()).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sets: Vec<FamilySet>,
    aliases: HashMap<String, String>,
}

impl Catalog {
    /// The table shipped with the tool.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog, rejecting duplicate family slugs or set keys.
    pub fn try_new(sets: Vec<FamilySet>) -> Result<Self, StreamlineError> {
        let mut seen_slugs = HashSet::new();
        let mut seen_keys = HashSet::new();
        for set in &sets {
            if !seen_keys.insert(set.key.to_lowercase()) {
                return Err(StreamlineError::ConfigError(format!(
                    "duplicate set key '{}'",
                    set.key
                )));
            }
            for family in &set.families {
                if !seen_slugs.insert(family.slug.as_str()) {
                    return Err(StreamlineError::ConfigError(format!(
                        "family slug '{}' appears more than once",
                        family.slug
                    )));
                }
            }
        }

        Ok(Self {
            sets,
            aliases: HashMap::new(),
        })
    }

    fn from_static(entries: &[data::SetEntry]) -> Self {
        let sets = entries
            .iter()
            .map(|(key, name, families)| {
                FamilySet::new(
                    *key,
                    *name,
                    families
                        .iter()
                        .map(|(slug, display)| Family::new(*slug, *display))
                        .collect(),
                )
            })
            .collect();

        Self {
            sets,
            aliases: HashMap::new(),
        }
    }

    /// Add alias -> set key mappings. Aliases are stored lowercase.
    pub fn with_aliases<I>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (alias, key) in aliases {
            self.aliases.insert(alias.to_lowercase(), key);
        }
        self
    }

    pub fn sets(&self) -> &[FamilySet] {
        &self.sets
    }

    /// Every family in enumeration order.
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.sets.iter().flat_map(|set| set.families.iter())
    }

    pub fn all_slugs(&self) -> Vec<&str> {
        self.families().map(|f| f.slug.as_str()).collect()
    }

    pub fn set_names(&self) -> Vec<&str> {
        self.sets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Case-insensitive slug lookup.
    pub fn find_family(&self, slug: &str) -> Option<&Family> {
        self.families().find(|f| f.slug.eq_ignore_ascii_case(slug))
    }

    pub fn set_by_key(&self, key: &str) -> Option<&FamilySet> {
        self.sets.iter().find(|s| s.key.eq_ignore_ascii_case(key))
    }

    /// Match against a set's key or display name, ignoring case.
    pub fn find_set(&self, name: &str) -> Option<&FamilySet> {
        let name = name.trim();
        self.sets
            .iter()
            .find(|s| s.key.eq_ignore_ascii_case(name) || s.name.eq_ignore_ascii_case(name))
    }

    /// Resolve an alias to its set. `alias` is lowercased before lookup.
    pub fn set_for_alias(&self, alias: &str) -> Option<&FamilySet> {
        self.aliases
            .get(&alias.to_lowercase())
            .and_then(|key| self.set_by_key(key))
    }

    /// Display name for a slug, falling back to the slug itself.
    pub fn display_name(&self, slug: &str) -> String {
        self.find_family(slug)
            .map(|f| f.display_name.clone())
            .unwrap_or_else(|| slug.to_string())
    }
}
