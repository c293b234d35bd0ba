//! Shape-checked model of the type registry and location dataset.
//!
//! Loading separates two failure classes:
//!
//! - a document that cannot be read, is not JSON, or whose top level is not an
//!   object is a [`LoadError`] and aborts the run;
//! - anything below the top level is kept, with wrong shapes captured as
//!   [`Field::Malformed`] or an `Other`/`NotRecord` variant so checks can report
//!   them as issues.
//!
//! Key order of both documents is preserved (`serde_json` is built with
//! `preserve_order`), so iteration follows the files.

use miette::Diagnostic;
use serde::de::{DeserializeOwned, Deserializer, Error as _, IgnoredAny};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Errors that abort loading a document.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum LoadError {
    /// The document path does not exist.
    #[error("File not found: {path}")]
    #[diagnostic(
        code(asset_lint::load::not_found),
        help("check --types/--locations or the [documents] section of asset-lint.toml")
    )]
    NotFound {
        /// Missing path.
        path: PathBuf,
    },

    /// The document exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    #[diagnostic(code(asset_lint::load::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("Invalid JSON in {path}: {source}")]
    #[diagnostic(code(asset_lint::load::parse))]
    Parse {
        /// Path of the document.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_json::Error,
    },

    /// The top level of the document has the wrong shape.
    #[error("Unexpected document shape in {path}: expected {expected}")]
    #[diagnostic(code(asset_lint::load::shape))]
    Shape {
        /// Path of the document.
        path: PathBuf,
        /// Expected top-level shape.
        expected: &'static str,
    },
}

/// Reads and parses a JSON document.
///
/// # Errors
///
/// Returns [`LoadError`] if the file is missing, unreadable or not JSON.
pub fn read_json(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&content, path)
}

fn parse_json(content: &str, path: &Path) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn inline_origin() -> PathBuf {
    PathBuf::from("<inline>")
}

/// An optional document field.
///
/// Deserialization never fails: a value that does not fit `T` is kept as
/// [`Field::Malformed`] so the caller can report it.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Key missing or `null`.
    Absent,
    /// Value of the expected shape.
    Present(T),
    /// Value of another shape.
    Malformed(Value),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: DeserializeOwned> Field<T> {
    /// Classifies a raw JSON value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if value.is_null() {
            return Self::Absent;
        }
        match serde_json::from_value::<T>(value.clone()) {
            Ok(parsed) => Self::Present(parsed),
            Err(_) => Self::Malformed(value),
        }
    }
}

impl<T> Field<T> {
    /// Returns true if the key was missing or `null`.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the parsed value, if any.
    #[must_use]
    pub fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Describes the raw value for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String
    where
        T: std::fmt::Debug,
    {
        match self {
            Self::Absent => "missing".to_string(),
            Self::Present(value) => format!("{value:?}"),
            Self::Malformed(value) => value.to_string(),
        }
    }
}

impl Field<String> {
    /// Returns the trimmed string if present and not blank.
    #[must_use]
    pub fn non_empty(&self) -> Option<&str> {
        self.present().map(|s| s.trim()).filter(|s| !s.is_empty())
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

// ── Type registry ──

/// A type registry entry that is a JSON object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeDefinition {
    /// Icon path, relative to the project root.
    #[serde(default)]
    pub icon: Field<String>,
    /// Default zoom level.
    #[serde(default)]
    pub zoom: Field<f64>,
}

/// Shape of a type registry entry.
#[derive(Debug, Clone)]
pub enum TypeShape {
    /// The entry is an object.
    Definition(TypeDefinition),
    /// The entry is some other JSON value.
    NotRecord(Value),
}

impl From<Value> for TypeShape {
    fn from(value: Value) -> Self {
        if !value.is_object() {
            return Self::NotRecord(value);
        }
        serde_json::from_value(value.clone()).map_or(Self::NotRecord(value), Self::Definition)
    }
}

/// Catalog of location-marker categories, in document order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<(String, TypeShape)>,
}

impl TypeRegistry {
    /// Loads the registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be loaded or is not an object.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Self::from_value(read_json(path)?, path)
    }

    /// Parses the registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the string is not a JSON object.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let origin = inline_origin();
        Self::from_value(parse_json(content, &origin)?, &origin)
    }

    fn from_value(value: Value, path: &Path) -> Result<Self, LoadError> {
        let Value::Object(map) = value else {
            return Err(LoadError::Shape {
                path: path.to_path_buf(),
                expected: "an object mapping type names to definitions",
            });
        };
        let types = map
            .into_iter()
            .map(|(name, entry)| (name, TypeShape::from(entry)))
            .collect();
        Ok(Self { types })
    }

    /// Iterates over entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeShape)> {
        self.types.iter().map(|(name, shape)| (name.as_str(), shape))
    }

    /// Returns true if the registry has a key with this exact name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.iter().any(|(key, _)| key == name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

// ── Location dataset ──

/// One element of a `videos` list.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoItem {
    /// A bare URL.
    Url(String),
    /// An object with `url` and optional `title`.
    Linked {
        /// Video URL.
        url: Field<String>,
        /// Display title.
        title: Field<String>,
    },
    /// Any other JSON value.
    Other(Value),
}

impl From<Value> for VideoItem {
    fn from(value: Value) -> Self {
        match value {
            Value::String(url) => Self::Url(url),
            Value::Object(mut map) => Self::Linked {
                url: take_field(&mut map, "url"),
                title: take_field(&mut map, "title"),
            },
            other => Self::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for VideoItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// One element of a `pnjs` (non-player character) list.
#[derive(Debug, Clone, PartialEq)]
pub enum PnjItem {
    /// An object.
    Record {
        /// Character name.
        name: Field<String>,
        /// Character role.
        role: Field<String>,
        /// Free-form description.
        description: Field<String>,
    },
    /// Any other JSON value.
    Other(Value),
}

impl From<Value> for PnjItem {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self::Record {
                name: take_field(&mut map, "name"),
                role: take_field(&mut map, "role"),
                description: take_field(&mut map, "description"),
            },
            other => Self::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for PnjItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// A text field that accepts a single string or a list of strings.
#[derive(Debug, Clone, PartialEq)]
pub enum TextGroup {
    /// A single string.
    Single(String),
    /// A list whose elements may have any shape.
    List(Vec<Field<String>>),
}

impl<'de> Deserialize<'de> for TextGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(text) => Ok(Self::Single(text)),
            Value::Array(items) => Ok(Self::List(
                items.into_iter().map(Field::from_value).collect(),
            )),
            _ => Err(D::Error::custom("expected a string or a list of strings")),
        }
    }
}

fn take_field<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Field<T> {
    map.remove(key).map_or(Field::Absent, Field::from_value)
}

fn mark_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

/// A location entry that is a JSON object.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationEntry {
    /// Display name, unique across the dataset.
    #[serde(default)]
    pub name: Field<String>,
    /// Registry type or the default marker.
    #[serde(default, rename = "type")]
    pub kind: Field<String>,
    /// Horizontal map coordinate.
    #[serde(default)]
    pub x: Field<f64>,
    /// Vertical map coordinate.
    #[serde(default)]
    pub y: Field<f64>,
    /// Ambient audio path.
    #[serde(default)]
    pub audio: Field<String>,
    /// Image paths.
    #[serde(default)]
    pub images: Field<Vec<Field<String>>>,
    /// Video URLs or `{url, title}` objects.
    #[serde(default)]
    pub videos: Field<Vec<VideoItem>>,
    /// Quest descriptions.
    #[serde(default)]
    pub quests: Field<TextGroup>,
    /// History paragraphs.
    #[serde(default)]
    pub history: Field<TextGroup>,
    /// Lore paragraphs.
    #[serde(default)]
    pub lore: Field<TextGroup>,
    /// Search tags.
    #[serde(default)]
    pub tags: Field<TextGroup>,
    /// Non-player characters.
    #[serde(default)]
    pub pnjs: Field<Vec<PnjItem>>,
    /// Whether the legacy `videoTitles` key is present, whatever its value.
    #[serde(default, rename = "videoTitles", deserialize_with = "mark_present")]
    pub legacy_video_titles: bool,
}

/// Shape of one element of a continent list.
#[derive(Debug, Clone)]
pub enum EntryShape {
    /// The element is an object.
    Record(Box<LocationEntry>),
    /// The element is some other JSON value.
    NotRecord(Value),
}

impl From<Value> for EntryShape {
    fn from(value: Value) -> Self {
        if !value.is_object() {
            return Self::NotRecord(value);
        }
        serde_json::from_value(value.clone())
            .map_or(Self::NotRecord(value), |entry| Self::Record(Box::new(entry)))
    }
}

/// Shape of a continent value.
#[derive(Debug, Clone)]
pub enum ContinentEntries {
    /// The value is a list.
    List(Vec<EntryShape>),
    /// The value is some other JSON value.
    Malformed(Value),
}

/// A continent and its locations.
#[derive(Debug, Clone)]
pub struct Continent {
    /// Key as written in the dataset.
    pub name: String,
    /// The continent value.
    pub entries: ContinentEntries,
}

/// Continent-grouped points of interest, in document order.
#[derive(Debug, Clone, Default)]
pub struct LocationDataset {
    continents: Vec<Continent>,
}

impl LocationDataset {
    /// Loads the dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be loaded or is not an object.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Self::from_value(read_json(path)?, path)
    }

    /// Parses the dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the string is not a JSON object.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let origin = inline_origin();
        Self::from_value(parse_json(content, &origin)?, &origin)
    }

    fn from_value(value: Value, path: &Path) -> Result<Self, LoadError> {
        let Value::Object(map) = value else {
            return Err(LoadError::Shape {
                path: path.to_path_buf(),
                expected: "an object mapping continent names to location lists",
            });
        };
        let continents = map
            .into_iter()
            .map(|(name, value)| {
                let entries = match value {
                    Value::Array(items) => {
                        ContinentEntries::List(items.into_iter().map(EntryShape::from).collect())
                    }
                    other => ContinentEntries::Malformed(other),
                };
                Continent { name, entries }
            })
            .collect();
        Ok(Self { continents })
    }

    /// Continents in document order.
    #[must_use]
    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }

    /// Iterates over every record entry with its continent and index.
    pub fn records(&self) -> impl Iterator<Item = (&str, usize, &LocationEntry)> {
        self.continents.iter().flat_map(|continent| {
            let entries: &[EntryShape] = match &continent.entries {
                ContinentEntries::List(entries) => entries,
                ContinentEntries::Malformed(_) => &[],
            };
            entries
                .iter()
                .enumerate()
                .filter_map(move |(index, shape)| match shape {
                    EntryShape::Record(entry) => Some((continent.name.as_str(), index, &**entry)),
                    EntryShape::NotRecord(_) => None,
                })
        })
    }

    /// Number of list elements across continents whose value is a list.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.continents
            .iter()
            .map(|c| match &c.entries {
                ContinentEntries::List(entries) => entries.len(),
                ContinentEntries::Malformed(_) => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_classifies_values() {
        assert_eq!(Field::<String>::from_value(Value::Null), Field::Absent);
        assert_eq!(
            Field::<String>::from_value(json!("a")),
            Field::Present("a".to_string())
        );
        assert_eq!(Field::<String>::from_value(json!(3)), Field::Malformed(json!(3)));
        assert_eq!(Field::<f64>::from_value(json!(3)), Field::Present(3.0));
        assert_eq!(
            Field::<f64>::from_value(json!("3")),
            Field::Malformed(json!("3"))
        );
    }

    #[test]
    fn non_empty_trims() {
        assert_eq!(Field::Present("  a ".to_string()).non_empty(), Some("a"));
        assert_eq!(Field::Present("   ".to_string()).non_empty(), None);
        assert_eq!(Field::<String>::Absent.non_empty(), None);
    }

    #[test]
    fn registry_preserves_order() {
        let registry =
            TypeRegistry::from_json_str(r#"{"zeta": {"icon": "z.png", "zoom": 1}, "alpha": 3}"#)
                .expect("registry should parse");
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert!(registry.contains("alpha"));
        assert!(!registry.contains("Alpha"));
        assert!(matches!(
            registry.iter().nth(1),
            Some((_, TypeShape::NotRecord(_)))
        ));
    }

    #[test]
    fn registry_must_be_object() {
        let err = TypeRegistry::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = LocationDataset::from_json_str("{").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = TypeRegistry::load(Path::new("/nonexistent/types.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn entry_fields_keep_malformed_values() {
        let dataset = LocationDataset::from_json_str(
            r#"{"Europe": [{
                "name": "Basecamp",
                "x": "12",
                "images": ["a.png", 4, null],
                "videos": ["https://v", {"url": "https://w", "title": 2}, 7],
                "quests": 5,
                "pnjs": [{"name": "Ann", "role": "smith"}, "Bob"],
                "videoTitles": null
            }]}"#,
        )
        .expect("dataset should parse");

        let (continent, index, entry) = dataset.records().next().expect("one record");
        assert_eq!(continent, "Europe");
        assert_eq!(index, 0);
        assert_eq!(entry.name.non_empty(), Some("Basecamp"));
        assert_eq!(entry.x, Field::Malformed(json!("12")));
        assert!(entry.y.is_absent());
        assert_eq!(
            entry.images,
            Field::Present(vec![
                Field::Present("a.png".to_string()),
                Field::Malformed(json!(4)),
                Field::Absent,
            ])
        );
        let videos = entry.videos.present().expect("videos list");
        assert_eq!(videos[0], VideoItem::Url("https://v".to_string()));
        assert_eq!(
            videos[1],
            VideoItem::Linked {
                url: Field::Present("https://w".to_string()),
                title: Field::Malformed(json!(2)),
            }
        );
        assert_eq!(videos[2], VideoItem::Other(json!(7)));
        assert_eq!(entry.quests, Field::Malformed(json!(5)));
        let pnjs = entry.pnjs.present().expect("pnjs list");
        assert!(matches!(pnjs[0], PnjItem::Record { .. }));
        assert_eq!(pnjs[1], PnjItem::Other(json!("Bob")));
        assert!(entry.legacy_video_titles);
    }

    #[test]
    fn legacy_flag_off_when_key_missing() {
        let dataset = LocationDataset::from_json_str(r#"{"Asia": [{"name": "Tower"}]}"#)
            .expect("dataset should parse");
        let (_, _, entry) = dataset.records().next().expect("one record");
        assert!(!entry.legacy_video_titles);
    }

    #[test]
    fn text_group_shapes() {
        assert_eq!(
            Field::<TextGroup>::from_value(json!("one")),
            Field::Present(TextGroup::Single("one".to_string()))
        );
        assert_eq!(
            Field::<TextGroup>::from_value(json!(["a", 1])),
            Field::Present(TextGroup::List(vec![
                Field::Present("a".to_string()),
                Field::Malformed(json!(1)),
            ]))
        );
        assert_eq!(
            Field::<TextGroup>::from_value(json!({"a": 1})),
            Field::Malformed(json!({"a": 1}))
        );
    }

    #[test]
    fn location_count_skips_malformed_continents() {
        let dataset = LocationDataset::from_json_str(
            r#"{"Europe": [{"name": "A"}, 3], "Asia": "oops", "Africa": []}"#,
        )
        .expect("dataset should parse");
        assert_eq!(dataset.continents().len(), 3);
        assert_eq!(dataset.location_count(), 2);
        assert_eq!(dataset.records().count(), 1);
        assert!(matches!(
            dataset.continents()[1].entries,
            ContinentEntries::Malformed(_)
        ));
    }
}
