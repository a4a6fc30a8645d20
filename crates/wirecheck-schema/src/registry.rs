use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::{debug, warn};
use wirecheck_data::DataContainer;

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::schema::{ContentType, Schema};
use crate::validator::validate_instance;

const SCHEMA_SUFFIX: &str = ".schema.json";
const BINARY_SCHEMA_SUFFIX: &str = ".binary.schema.json";

/// Name-keyed registry of compiled schemas.
///
/// Registration is write-once: a name, once registered, keeps its schema
/// for the lifetime of the registry. Lookups hold the lock only long enough
/// to clone the schema handle, so validation never runs under the lock.
pub struct SchemaRegistry {
    schemas: Mutex<HashMap<String, Arc<Schema>>>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            schemas: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Register a schema under its name.
    ///
    /// Fails with [`SchemaError::Redefinition`] if the name is taken; the
    /// existing schema is left untouched.
    pub fn register(&self, schema: Schema) -> Result<()> {
        let mut schemas = self.lock();
        match schemas.entry(schema.name().to_string()) {
            Entry::Occupied(entry) => {
                warn!(schema = entry.key().as_str(), "rejected schema redefinition");
                Err(SchemaError::Redefinition(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                debug!(
                    schema = entry.key().as_str(),
                    content_type = %schema.content_type(),
                    "registered schema"
                );
                entry.insert(Arc::new(schema));
                Ok(())
            }
        }
    }

    /// Validate a document against the schema registered as `schema_name`.
    ///
    /// Fails with [`SchemaError::NotFound`] for an unknown name, and with
    /// [`SchemaError::ValidationFailed`] carrying every reported error when
    /// the document does not conform.
    pub fn validate(&self, data: &DataContainer, schema_name: &str) -> Result<()> {
        self.validate_value(data.as_value(), schema_name)
    }

    /// Validate a raw JSON value against the schema registered as `schema_name`.
    pub fn validate_value(&self, value: &Value, schema_name: &str) -> Result<()> {
        let schema = self.lookup(schema_name)?;
        validate_instance(&schema, value)
    }

    /// Check if a schema is registered under `schema_name`.
    pub fn includes_schema(&self, schema_name: &str) -> bool {
        self.lock().contains_key(schema_name)
    }

    /// Content type of the schema registered as `schema_name`.
    pub fn schema_content_type(&self, schema_name: &str) -> Result<ContentType> {
        self.lookup(schema_name).map(|schema| schema.content_type())
    }

    /// Shared handle to the schema registered as `schema_name`.
    pub fn schema(&self, schema_name: &str) -> Option<Arc<Schema>> {
        self.lock().get(schema_name).cloned()
    }

    /// Registered schema names, sorted.
    pub fn schema_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Load from embedded `(name, content type, schema JSON)` entries.
    pub fn from_embedded(schemas: &[(&str, ContentType, &str)]) -> Result<Self> {
        Self::from_embedded_with_config(schemas, RegistryConfig::default())
    }

    /// Load from embedded entries with explicit config.
    pub fn from_embedded_with_config(
        schemas: &[(&str, ContentType, &str)],
        config: RegistryConfig,
    ) -> Result<Self> {
        let registry = Self::with_config(config);
        for (name, content_type, text) in schemas {
            registry.register(registry.compile(name, *content_type, text)?)?;
        }
        Ok(registry)
    }

    /// Load schemas from a directory.
    ///
    /// `<name>.schema.json` files register `name` with [`ContentType::Json`];
    /// `<name>.binary.schema.json` files register it with
    /// [`ContentType::Binary`]. Other files are ignored.
    pub fn from_directory(path: &Path) -> Result<Self> {
        Self::from_directory_with_config(path, RegistryConfig::default())
    }

    /// Load schemas from a directory with explicit config.
    ///
    /// The directory is listed before anything is read: the schema count
    /// limit applies to the listing, and each file is read with a bound of
    /// `max_schema_file_size` bytes. Files register in file-name order.
    pub fn from_directory_with_config(path: &Path, config: RegistryConfig) -> Result<Self> {
        let files = list_schema_files(path)?;
        if files.len() > config.max_schemas_from_directory {
            return Err(SchemaError::LoadFailed(format!(
                "{} holds {} schema files, limit is {}",
                path.display(),
                files.len(),
                config.max_schemas_from_directory
            )));
        }

        let registry = Self::with_config(config);
        for file in &files {
            let text = read_schema_file(&file.path, registry.config.max_schema_file_size)?;
            debug!(
                schema = file.name.as_str(),
                content_type = %file.content_type,
                path = %file.path.display(),
                "loading schema file"
            );
            registry.register(registry.compile(&file.name, file.content_type, &text)?)?;
        }
        Ok(registry)
    }

    fn compile(&self, name: &str, content_type: ContentType, text: &str) -> Result<Schema> {
        let document: Value = serde_json::from_str(text)?;
        if self.config.strict_mode {
            Schema::strict(name, content_type, &document)
        } else {
            Schema::new(name, content_type, &document)
        }
    }

    /// Clone the handle for `schema_name` and release the lock.
    ///
    /// Published entries are never replaced, so the schema stays valid after
    /// the guard is dropped.
    fn lookup(&self, schema_name: &str) -> Result<Arc<Schema>> {
        let schema = self.lock().get(schema_name).cloned();
        schema.ok_or_else(|| SchemaError::NotFound(schema_name.to_string()))
    }

    // A panic while the lock is held cannot leave a half-written entry, so a
    // poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Schema>>> {
        self.schemas.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A schema file found while listing a directory.
struct SchemaFile {
    name: String,
    content_type: ContentType,
    path: PathBuf,
}

fn list_schema_files(dir: &Path) -> Result<Vec<SchemaFile>> {
    let entries = std::fs::read_dir(dir).map_err(|err| load_failed(dir, &err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| load_failed(dir, &err))?;
        let file_name = entry.file_name();
        let Some((name, content_type)) = file_name.to_str().and_then(resolve_schema_file) else {
            continue;
        };

        let path = entry.path();
        // DirEntry::file_type does not follow symlinks.
        let file_type = entry.file_type().map_err(|err| load_failed(&path, &err))?;
        if file_type.is_symlink() {
            return Err(SchemaError::LoadFailed(format!(
                "{} is a symlink, schema files must be regular files",
                path.display()
            )));
        }
        if file_type.is_file() {
            files.push(SchemaFile {
                name: name.to_string(),
                content_type,
                path,
            });
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn read_schema_file(path: &Path, max_bytes: usize) -> Result<String> {
    let file = File::open(path).map_err(|err| load_failed(path, &err))?;
    let bound = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);

    let mut text = String::new();
    file.take(bound)
        .read_to_string(&mut text)
        .map_err(|err| load_failed(path, &err))?;
    if text.len() > max_bytes {
        return Err(SchemaError::LoadFailed(format!(
            "{} is larger than the {max_bytes} byte schema limit",
            path.display()
        )));
    }
    Ok(text)
}

fn load_failed(path: &Path, err: &std::io::Error) -> SchemaError {
    SchemaError::LoadFailed(format!("{}: {err}", path.display()))
}

/// Map `<name>.schema.json` and `<name>.binary.schema.json` to a schema name
/// and content type.
fn resolve_schema_file(file_name: &str) -> Option<(&str, ContentType)> {
    let (name, content_type) = match file_name.strip_suffix(BINARY_SCHEMA_SUFFIX) {
        Some(name) => (name, ContentType::Binary),
        None => (file_name.strip_suffix(SCHEMA_SUFFIX)?, ContentType::Json),
    };
    (!name.is_empty()).then_some((name, content_type))
}
