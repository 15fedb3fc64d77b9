//! Document export with a pluggable writer per output format.
//!
//! A [`WriterRegistry`] maps each [`OutputFormat`] to a [`DocumentWriter`].
//! Saving always renders the complete output in memory first, then writes it
//! through a temporary sibling file that is atomically moved over the
//! target, so a failed save never leaves partial output behind.
//!
//! # Example
//!
//! ```no_run
//! use spiritual_homework::export::{OutputFormat, WriterRegistry};
//! use spiritual_homework::render::RenderOptions;
//!
//! fn main() -> spiritual_homework::Result<()> {
//!     let doc = spiritual_homework::build();
//!     let registry = WriterRegistry::with_defaults();
//!     registry.write(&doc, OutputFormat::Docx, "homework.docx".as_ref(), &RenderOptions::default())?;
//!     Ok(())
//! }
//! ```

mod writers;

#[cfg(feature = "docx")]
pub use writers::DocxWriter;
pub use writers::{JsonWriter, MarkdownWriter, TextWriter};

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::RenderOptions;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Library backing the DOCX writer.
pub const DOCX_LIBRARY: &str = "zip";

/// Command that installs a build with DOCX support.
pub const DOCX_INSTALL: &str = "cargo install spiritual-homework-cli --features docx";

/// Output format of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Word document (OOXML package)
    #[default]
    Docx,

    /// Markdown
    Markdown,

    /// Plain text
    Text,

    /// JSON structure
    Json,
}

impl OutputFormat {
    /// All formats, in display order.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Docx,
        OutputFormat::Markdown,
        OutputFormat::Text,
        OutputFormat::Json,
    ];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Lowercase format name.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Look up a format by name or extension, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower || f.extension() == lower)
    }
}

/// Trait for format writers.
///
/// Implement this trait to add support for a new output format.
pub trait DocumentWriter: Send + Sync {
    /// Get the format this writer produces.
    fn format(&self) -> OutputFormat;

    /// Get the name of this writer.
    fn name(&self) -> &str;

    /// Render a document to bytes.
    fn render(&self, doc: &Document, options: &RenderOptions) -> Result<Vec<u8>>;

    /// Render a document and save it to `path`.
    ///
    /// Rendering finishes before the file system is touched.
    fn write(&self, doc: &Document, path: &Path, options: &RenderOptions) -> Result<()> {
        let bytes = self.render(doc, options)?;
        save_atomic(path, &bytes)
    }
}

/// Registry for format writers.
pub struct WriterRegistry {
    writers: HashMap<OutputFormat, Arc<dyn DocumentWriter>>,
}

impl WriterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            writers: HashMap::new(),
        }
    }

    /// Create a registry with every writer compiled into this build.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        #[cfg(feature = "docx")]
        registry.register(Arc::new(DocxWriter::new()));
        registry.register(Arc::new(MarkdownWriter::new()));
        registry.register(Arc::new(TextWriter::new()));
        registry.register(Arc::new(JsonWriter::new()));
        registry
    }

    /// Register a writer, replacing any writer for the same format.
    pub fn register(&mut self, writer: Arc<dyn DocumentWriter>) {
        self.writers.insert(writer.format(), writer);
    }

    /// Get the writer for a format.
    pub fn get(&self, format: OutputFormat) -> Option<Arc<dyn DocumentWriter>> {
        self.writers.get(&format).cloned()
    }

    /// Check if a format has a writer.
    pub fn supports(&self, format: OutputFormat) -> bool {
        self.writers.contains_key(&format)
    }

    /// Get the writer for a format, or the missing-dependency error.
    pub fn require(&self, format: OutputFormat) -> Result<Arc<dyn DocumentWriter>> {
        self.get(format).ok_or_else(|| match format {
            OutputFormat::Docx => Error::missing_dependency(DOCX_LIBRARY, DOCX_INSTALL),
            other => Error::Other(format!("No writer for format: {}", other.name())),
        })
    }

    /// Render a document to bytes in the given format.
    pub fn render(
        &self,
        doc: &Document,
        format: OutputFormat,
        options: &RenderOptions,
    ) -> Result<Vec<u8>> {
        self.require(format)?.render(doc, options)
    }

    /// Save a document in the given format.
    pub fn write(
        &self,
        doc: &Document,
        format: OutputFormat,
        path: &Path,
        options: &RenderOptions,
    ) -> Result<()> {
        let writer = self.require(format)?;
        log::debug!("writing {} with the {} writer", path.display(), writer.name());
        writer.write(doc, path, options)
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Write `bytes` to `path` so that either the whole file appears or nothing
/// changes.
///
/// The bytes go to a temporary file in the target's directory, which is then
/// renamed over the target. On failure the temporary file is removed and an
/// existing target keeps its previous content.
pub fn save_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = output_temp_file(dir)?;
    match std::fs::metadata(path) {
        // An overwritten target keeps its permissions.
        Ok(existing) if existing.is_file() => {
            std::fs::set_permissions(temp.path(), existing.permissions())?;
        }
        _ => {}
    }
    if let Err(e) = temp.write_all(bytes).and_then(|_| temp.as_file().sync_all()) {
        log::warn!("discarding partial output for {}: {}", path.display(), e);
        return Err(e.into());
    }

    temp.persist(path).map_err(|e| {
        log::warn!("could not move output into {}: {}", path.display(), e.error);
        Error::Io(e.error)
    })?;

    log::info!("saved {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Create the temporary output file with the mode a plain file create would
/// get (0o666 less the umask), rather than tempfile's owner-only default.
#[cfg(unix)]
fn output_temp_file(dir: &Path) -> Result<tempfile::NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    let file = tempfile::Builder::new()
        .prefix(".homework")
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)?;
    Ok(file)
}

#[cfg(not(unix))]
fn output_temp_file(dir: &Path) -> Result<tempfile::NamedTempFile> {
    Ok(tempfile::Builder::new().prefix(".homework").tempfile_in(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DocumentBuilder;

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::default(), OutputFormat::Docx);
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::from_name("MARKDOWN"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_name("txt"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("pdf"), None);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = WriterRegistry::with_defaults();
        assert!(registry.supports(OutputFormat::Markdown));
        assert!(registry.supports(OutputFormat::Text));
        assert!(registry.supports(OutputFormat::Json));
        assert_eq!(registry.supports(OutputFormat::Docx), cfg!(feature = "docx"));
    }

    #[test]
    fn test_empty_registry_reports_missing_docx() {
        let registry = WriterRegistry::new();
        let doc = DocumentBuilder::default().text("x").build();

        let err = registry
            .render(&doc, OutputFormat::Docx, &RenderOptions::default())
            .unwrap_err();
        match err {
            Error::MissingDependency { library, install } => {
                assert_eq!(library, DOCX_LIBRARY);
                assert_eq!(install, DOCX_INSTALL);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_registry_other_format() {
        let registry = WriterRegistry::new();
        let doc = Document::default();
        let err = registry
            .render(&doc, OutputFormat::Json, &RenderOptions::default())
            .unwrap_err();
        assert!(!err.is_missing_dependency());
    }

    #[test]
    fn test_save_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        save_atomic(&path, b"first").unwrap();
        save_atomic(&path, b"second").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_atomic_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = save_atomic(&path, b"data").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_atomic_keeps_target_when_persist_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let target = dir.path().join("target");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), b"keep").unwrap();

        assert!(save_atomic(&target, b"data").is_err());
        assert!(target.is_dir());
        assert_eq!(std::fs::read(target.join("keep")).unwrap(), b"keep");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_save_atomic_new_file_mode_matches_plain_write() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.txt");
        std::fs::write(&reference, b"x").unwrap();

        let path = dir.path().join("out.txt");
        save_atomic(&path, b"data").unwrap();

        assert_eq!(mode(&path), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_atomic_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, b"old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        save_atomic(&path, b"new").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        assert_eq!(mode(&path), 0o640);
    }
}
