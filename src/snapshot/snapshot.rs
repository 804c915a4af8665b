use std::borrow::Cow;
use std::path::Path;

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::ext::PathDisplayExt;
use crate::filesystem::{
    InvalidArgumentError, MissingArgumentSnafu, ReadOnlyFileSystem, SimpleDirectory, Size,
    StringFile,
};

type YamlMap<'input> = LinkedHashMap<Yaml<'input>, Yaml<'input>>;

fn key(name: &'static str) -> Yaml<'static> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

fn is_null(value: &Yaml) -> bool {
    matches!(value, Yaml::Value(Scalar::Null))
}

/// A filesystem loaded from a YAML snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    filesystem: ReadOnlyFileSystem,
}

impl Snapshot {
    pub async fn read(path: &Path) -> Result<Self, SnapshotError> {
        debug!("Opening snapshot file: {}", path.best_effort_display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_display(),
        })?;
        debug!("Successfully read snapshot file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_display(),
        })?;
        contents.as_str().try_into()
    }

    pub fn filesystem(&self) -> &ReadOnlyFileSystem {
        &self.filesystem
    }

    pub fn into_filesystem(self) -> ReadOnlyFileSystem {
        self.filesystem
    }

    fn parse_capacity(top_level: &YamlMap) -> Result<i64, SnapshotError> {
        let value = required(top_level, "capacity")?;
        match value {
            Yaml::Value(Scalar::Integer(bytes)) => Ok(*bytes),
            Yaml::Value(Scalar::String(quantity)) => {
                parse_quantity(quantity).context(InvalidCapacitySnafu {
                    value: quantity.to_string(),
                })
            }
            _ => InvalidTypeSnafu {
                field: "capacity",
                expected: "a byte count",
            }
            .fail(),
        }
    }

    fn parse_directory(node: &Yaml) -> Result<SimpleDirectory, SnapshotError> {
        let mapping = node.as_mapping().context(InvalidTypeSnafu {
            field: "directories",
            expected: "a list of maps",
        })?;

        let name = required_str(mapping, "name")?;
        let subdirectories = optional_sequence(mapping, "directories")?
            .iter()
            .map(Self::parse_directory)
            .collect::<Result<Vec<_>, _>>()?;
        let files = optional_sequence(mapping, "files")?
            .iter()
            .map(Self::parse_file)
            .collect::<Result<Vec<_>, _>>()?;

        SimpleDirectory::new(name, subdirectories, files).context(InvalidArgumentSnafu)
    }

    fn parse_file(node: &Yaml) -> Result<StringFile, SnapshotError> {
        let mapping = node.as_mapping().context(InvalidTypeSnafu {
            field: "files",
            expected: "a list of maps",
        })?;

        let name = required_str(mapping, "name")?;
        let content = required_str(mapping, "content")?;

        StringFile::new(name, content).context(InvalidArgumentSnafu)
    }
}

impl TryFrom<&str> for Snapshot {
    type Error = SnapshotError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedSnapshotSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        let capacity = Self::parse_capacity(top_level)?;
        let root = Self::parse_directory(required(top_level, "root")?)?;
        let filesystem =
            ReadOnlyFileSystem::new(capacity, root).context(InvalidArgumentSnafu)?;
        debug!(
            "Loaded snapshot rooted at '{}' with capacity {} bytes",
            filesystem.root().name(),
            filesystem.capacity()
        );

        Ok(Snapshot { filesystem })
    }
}

/// Looks up a key that must be present and not `null`.
fn required<'a, 'input>(
    mapping: &'a YamlMap<'input>,
    field: &'static str,
) -> Result<&'a Yaml<'input>, SnapshotError> {
    match mapping.get(&key(field)) {
        Some(value) if !is_null(value) => Ok(value),
        _ => MissingArgumentSnafu { argument: field }
            .fail()
            .context(InvalidArgumentSnafu),
    }
}

fn required_str<'a>(mapping: &'a YamlMap, field: &'static str) -> Result<&'a str, SnapshotError> {
    required(mapping, field)?.as_str().context(InvalidTypeSnafu {
        field,
        expected: "a string",
    })
}

/// Looks up a list that may be left out. An explicit `null` is still rejected.
fn optional_sequence<'a, 'input>(
    mapping: &'a YamlMap<'input>,
    field: &'static str,
) -> Result<&'a [Yaml<'input>], SnapshotError> {
    match mapping.get(&key(field)) {
        None => Ok(&[]),
        Some(_) => required(mapping, field)?
            .as_sequence()
            .map(Vec::as_slice)
            .context(InvalidTypeSnafu {
                field,
                expected: "a list",
            }),
    }
}

/// Parses `"<n>"`, `"<n> <unit>"` or `"<n><unit>"` into a byte count.
fn parse_quantity(quantity: &str) -> Option<i64> {
    let quantity = quantity.trim();
    let split = quantity
        .char_indices()
        .find(|(index, c)| !(c.is_ascii_digit() || (*index == 0 && *c == '-')))
        .map(|(index, _)| index)
        .unwrap_or(quantity.len());
    let (amount, unit) = quantity.split_at(split);

    let amount = amount.parse::<i64>().ok()?;
    let unit = match unit.trim() {
        "" => Size::Byte,
        unit => unit.parse::<Size>().ok()?,
    };
    amount.checked_mul(unit.in_bytes())
}

#[derive(Debug, Snafu)]
pub enum SnapshotError {
    #[snafu(display("Failed to read the snapshot file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The snapshot file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the snapshot"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted snapshot"))]
    MalformedSnapshot,
    #[snafu(display("Top level of snapshot should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Field '{}' should be {}", field, expected))]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    #[snafu(display("Capacity '{}' is not a byte count", value))]
    InvalidCapacity { value: String },
    #[snafu(display("The snapshot describes an invalid filesystem"))]
    InvalidArgument { source: InvalidArgumentError },
}
