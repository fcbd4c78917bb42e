//! Process-wide catalogue of the built-in code pages.
//!
//! The registry indexes every page by numeric id and by normalized name.
//! Tables are built on first lookup, at most once per page even under
//! concurrent first use, and are read-only afterwards.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::table::{CodePageInfo, CodePageTable};
use crate::tables::{self, PageDef};
use crate::{Error, Result};

static GLOBAL: OnceLock<CodePageRegistry> = OnceLock::new();

/// Key used to look up a code page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodePageKey<'a> {
    /// Numeric identifier, e.g. `1141`
    Id(u16),
    /// Canonical name or alias, e.g. `"IBM01141"`. All-digit names are ids.
    Name(Cow<'a, str>),
}

impl From<u16> for CodePageKey<'_> {
    fn from(id: u16) -> Self {
        CodePageKey::Id(id)
    }
}

impl<'a> From<&'a str> for CodePageKey<'a> {
    fn from(name: &'a str) -> Self {
        CodePageKey::Name(Cow::Borrowed(name))
    }
}

impl<'a> From<&'a String> for CodePageKey<'a> {
    fn from(name: &'a String) -> Self {
        CodePageKey::Name(Cow::Borrowed(name.as_str()))
    }
}

impl From<String> for CodePageKey<'_> {
    fn from(name: String) -> Self {
        CodePageKey::Name(Cow::Owned(name))
    }
}

impl fmt::Display for CodePageKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodePageKey::Id(id) => write!(f, "{id}"),
            CodePageKey::Name(name) => f.write_str(name),
        }
    }
}

/// Name/number indexed catalogue of code page tables
pub struct CodePageRegistry {
    defs: &'static [PageDef],
    tables: Box<[OnceLock<Result<CodePageTable>>]>,
    by_id: HashMap<u16, usize>,
    by_name: HashMap<String, usize>,
}

impl CodePageRegistry {
    /// The registry of built-in code pages
    pub fn global() -> &'static CodePageRegistry {
        GLOBAL.get_or_init(|| Self::from_defs(tables::PAGES))
    }

    pub(crate) fn from_defs(defs: &'static [PageDef]) -> Self {
        let mut by_id: HashMap<u16, usize> = HashMap::with_capacity(defs.len());
        let mut by_name: HashMap<String, usize> = HashMap::with_capacity(defs.len() * 4);

        for (index, def) in defs.iter().enumerate() {
            if by_id.insert(def.id, index).is_some() {
                log::warn!("code page id {} registered twice", def.id);
            }
            for name in std::iter::once(def.name).chain(def.aliases.iter().copied()) {
                let key = normalize_name(name);
                if let Some(&existing) = by_name.get(&key) {
                    if existing != index {
                        log::warn!(
                            "name {:?} of code page {} already names code page {}",
                            name,
                            def.id,
                            defs[existing].id
                        );
                    }
                    continue;
                }
                by_name.insert(key, index);
            }
        }

        let tables = defs.iter().map(|_| OnceLock::new()).collect();
        Self {
            defs,
            tables,
            by_id,
            by_name,
        }
    }

    /// Number of registered code pages
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Look up a code page by id or name, building its table on first use
    pub fn lookup<'k>(&self, key: impl Into<CodePageKey<'k>>) -> Result<&CodePageTable> {
        let key = key.into();
        let index = self.index_of(&key)?;
        self.table_at(index)
    }

    /// Metadata of a code page without building its table
    pub fn info<'k>(&self, key: impl Into<CodePageKey<'k>>) -> Result<CodePageInfo> {
        let key = key.into();
        let index = self.index_of(&key)?;
        Ok(self.defs[index].info())
    }

    /// Metadata of every registered code page, in registration order
    pub fn pages(&self) -> impl Iterator<Item = CodePageInfo> + '_ {
        self.defs.iter().map(PageDef::info)
    }

    /// Whether `key` names a registered code page
    pub fn contains<'k>(&self, key: impl Into<CodePageKey<'k>>) -> bool {
        self.index_of(&key.into()).is_ok()
    }

    fn index_of(&self, key: &CodePageKey<'_>) -> Result<usize> {
        let index = match key {
            CodePageKey::Id(id) => self.by_id.get(id).copied(),
            CodePageKey::Name(name) => {
                let normalized = normalize_name(name);
                self.by_name.get(&normalized).copied().or_else(|| {
                    normalized
                        .parse::<u16>()
                        .ok()
                        .and_then(|id| self.by_id.get(&id).copied())
                })
            }
        };
        index.ok_or_else(|| {
            log::debug!("no code page registered for {key}");
            Error::UnknownCodePage(key.to_string())
        })
    }

    fn table_at(&self, index: usize) -> Result<&CodePageTable> {
        self.tables[index]
            .get_or_init(|| self.defs[index].build())
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl fmt::Debug for CodePageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let built = self.tables.iter().filter(|slot| slot.get().is_some()).count();
        f.debug_struct("CodePageRegistry")
            .field("pages", &self.defs.len())
            .field("built", &built)
            .finish()
    }
}

/// Lowercase ASCII and drop `-`, `_`, `.` and spaces.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_by_id_and_name() {
        let registry = CodePageRegistry::global();

        let by_id = registry.lookup(1141).unwrap();
        let by_name = registry.lookup("IBM01141").unwrap();
        let by_alias = registry.lookup("cp1141").unwrap();
        assert_eq!(by_id.name(), "IBM01141");
        assert!(std::ptr::eq(by_id, by_name));
        assert!(std::ptr::eq(by_id, by_alias));
    }

    #[test]
    fn test_name_normalization() {
        let registry = CodePageRegistry::global();
        assert_eq!(registry.lookup("Windows_1252").unwrap().id(), 1252);
        assert_eq!(registry.lookup("ISO 8859-1").unwrap().id(), 28591);
        assert_eq!(registry.lookup("KOI8-R").unwrap().id(), 20866);
        assert_eq!(registry.lookup("20290").unwrap().name(), "IBM290");
        assert_eq!(registry.lookup(String::from("latin1")).unwrap().id(), 28591);
    }

    #[test]
    fn test_unknown_code_page() {
        let registry = CodePageRegistry::global();
        assert_eq!(
            registry.lookup(4242).unwrap_err(),
            Error::UnknownCodePage("4242".to_string())
        );
        assert_eq!(
            registry.lookup("EBCDIC-KLINGON").unwrap_err(),
            Error::UnknownCodePage("EBCDIC-KLINGON".to_string())
        );
        assert!(!registry.contains("EBCDIC-KLINGON"));
        assert!(registry.contains(866));
    }

    #[test]
    fn test_info_does_not_need_table() {
        let registry = CodePageRegistry::global();
        let info = registry.info("cp866").unwrap();
        assert_eq!(info.id, 866);
        assert_eq!(info.description, "Cyrillic (DOS)");
    }

    #[test]
    fn test_names_and_ids_are_unique() {
        let registry = CodePageRegistry::global();
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for info in registry.pages() {
            assert!(ids.insert(info.id), "duplicate id {}", info.id);
            for name in std::iter::once(&info.name).chain(info.aliases.iter()) {
                assert!(names.insert(normalize_name(name)), "duplicate name {name}");
            }
        }
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_every_page_builds() {
        let registry = CodePageRegistry::global();
        for info in registry.pages() {
            let table = registry.lookup(info.id).unwrap();
            assert_eq!(table.info(), info);
        }
    }

    #[test]
    fn test_concurrent_first_use_builds_once() {
        let registry = CodePageRegistry::from_defs(tables::PAGES);
        let addresses: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        registry.lookup("IBM875").unwrap() as *const CodePageTable as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(format!("{registry:?}").contains("built: 1"));
    }
}
