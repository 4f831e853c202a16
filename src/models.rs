//! Data structures describing a Vite build manifest.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Typed view of a single manifest entry.
///
/// Fields are read leniently: a value of the wrong JSON type is treated as absent, so one
/// odd entry never hides the rest of the manifest.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Hashed output path relative to the build directory.
    pub file: Option<String>,
    /// Source path the entry was built from.
    pub src: Option<String>,
    /// Chunk name assigned by the bundler.
    pub name: Option<String>,
    /// Whether the bundler treated this record as an entry point.
    pub is_entry: bool,
    /// Whether the record is only reachable through a dynamic `import()`.
    pub is_dynamic_entry: bool,
    /// Hashed stylesheets emitted for this entry, in load order.
    pub css: Vec<String>,
    /// Manifest keys of chunks that must load before this entry.
    pub imports: Vec<String>,
    /// Manifest keys of chunks loaded lazily by this entry.
    pub dynamic_imports: Vec<String>,
    /// Other static files (images, fonts) referenced by this entry.
    pub assets: Vec<String>,
}

impl ManifestEntry {
    /// Read the known fields out of a raw manifest value.
    ///
    /// Anything other than a JSON object yields an entry with every field absent.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        Self {
            file: string_field(fields, "file"),
            src: string_field(fields, "src"),
            name: string_field(fields, "name"),
            is_entry: bool_field(fields, "isEntry"),
            is_dynamic_entry: bool_field(fields, "isDynamicEntry"),
            css: string_list(fields, "css"),
            imports: string_list(fields, "imports"),
            dynamic_imports: string_list(fields, "dynamicImports"),
            assets: string_list(fields, "assets"),
        }
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn bool_field(fields: &Map<String, Value>, key: &str) -> bool {
    fields.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn string_list(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Parsed build manifest keyed by entry name, preserving file order.
///
/// The raw JSON of every entry is kept next to its typed view, so serialising a manifest
/// reproduces the file it was read from, including fields this crate does not know about.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Manifest {
    entries: IndexMap<String, ManifestEntry>,
    raw: IndexMap<String, Value>,
}

impl Manifest {
    /// Manifest without entries, used whenever no manifest file could be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up an entry by its exact key.
    pub fn get(&self, key: &str) -> Option<&ManifestEntry> {
        self.entries.get(key)
    }

    /// Raw JSON of the entry with the exact key, as it appeared in the manifest file.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Output file of the entry with the exact key, when both exist.
    pub fn file_of(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|entry| entry.file.as_deref())
    }

    /// Whether an entry with the exact key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over entries in manifest file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Iterate over entry keys in manifest file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Borrow the typed entries.
    pub fn entries(&self) -> &IndexMap<String, ManifestEntry> {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<IndexMap<String, Value>> for Manifest {
    fn from(raw: IndexMap<String, Value>) -> Self {
        let entries = raw
            .iter()
            .map(|(key, value)| (key.clone(), ManifestEntry::from_value(value)))
            .collect();
        Self { entries, raw }
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, Value>::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}
