//! Batch extraction of a game install into a browsable file tree.
//!
//! Every `.arc` under the install tree is opened, its registered entries are
//! decompressed to `<game_path>/<entry path><extension>`, and the relative
//! path of every entry is collected into a manifest. When the install tree
//! is separate from the destination, loose files under
//! `<install>/<native_dir>` with a registered extension are copied across as
//! well.
//!
//! Extraction is incremental: files that already exist are never rewritten,
//! so a second run over the same tree only refreshes the manifest.
//!
//! ## Manifest
//! `<game_path>/<manifest_name>` is a JSON array of `/`-separated relative
//! paths, sorted and deduplicated, indented with tabs.

use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use walkdir::WalkDir;

use crate::crypto::ArchiveCipher;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::formats::arc::Archive;
use crate::registry::{self, ARCHIVE_EXTENSION};
use crate::{Error, Result};

/// Where to read from and where to write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Destination tree.
    pub game_path: PathBuf,
    /// Install tree holding the archives. [`None`] means `game_path`.
    pub install_path: Option<PathBuf>,
    /// Directory under the install tree holding loose files.
    pub native_dir: String,
    /// Log progress every this many archives; 0 disables.
    pub progress_interval: usize,
    /// Manifest file name, written under `game_path`.
    pub manifest_name: String,
}

impl ExtractOptions {
    pub fn new(game_path: impl Into<PathBuf>) -> Self {
        Self {
            game_path: game_path.into(),
            install_path: None,
            native_dir: "nativeDX11x64".to_owned(),
            progress_interval: 50,
            manifest_name: "file_list.json".to_owned(),
        }
    }

    pub fn with_install_path(mut self, install_path: impl Into<PathBuf>) -> Self {
        self.install_path = Some(install_path.into());
        self
    }

    /// Tree scanned for archives.
    pub fn source_root(&self) -> &Path {
        self.install_path.as_deref().unwrap_or(&self.game_path)
    }

    /// Whether loose files need copying from a separate install tree.
    pub fn copies_loose_files(&self) -> bool {
        self.install_path
            .as_deref()
            .is_some_and(|p| p != self.game_path)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.game_path.join(&self.manifest_name)
    }
}

/// Counters and manifest of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractSummary {
    pub archives_found: usize,
    pub archives_failed: usize,
    pub files_written: usize,
    /// Entries that already existed on disk.
    pub files_skipped: usize,
    /// Entries dropped for an unregistered type hash.
    pub entries_unresolved: usize,
    pub loose_files_found: usize,
    pub loose_files_copied: usize,
    pub manifest: BTreeSet<String>,
}

/// Extract every archive below the source root and write the manifest.
///
/// Missing input directories are fatal. Anything that goes wrong with a
/// single archive or file is reported to `sink` and the run continues.
pub fn extract_all(
    options: &ExtractOptions,
    cipher: &mut dyn ArchiveCipher,
    sink: &mut dyn DiagnosticSink,
) -> Result<ExtractSummary> {
    require_dir(&options.game_path)?;
    let source = options.source_root();
    require_dir(source)?;

    let archives = find_archives(source);
    tracing::info!("Found {} arc files.", archives.len());

    let mut summary = ExtractSummary {
        archives_found: archives.len(),
        ..Default::default()
    };
    for (i, path) in archives.iter().enumerate() {
        if let Err(e) = extract_archive(path, &options.game_path, cipher, &mut summary, sink) {
            summary.archives_failed += 1;
            sink.report(archive_diagnostic(path, e));
        }
        if options.progress_interval != 0 && i % options.progress_interval == 0 {
            tracing::info!("{i}/{} arc files extracted", archives.len());
        }
    }
    tracing::info!("{} arc files extracted.", archives.len() - summary.archives_failed);

    if options.copies_loose_files() {
        copy_loose_files(options, &mut summary, sink);
    }

    write_manifest(&options.manifest_path(), &summary.manifest)?;
    tracing::info!(
        written = summary.files_written,
        skipped = summary.files_skipped,
        copied = summary.loose_files_copied,
        manifest = summary.manifest.len(),
        "extraction finished"
    );
    Ok(summary)
}

fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::MissingDirectory(path.to_path_buf()))
    }
}

fn archive_diagnostic(path: &Path, error: Error) -> Diagnostic {
    let path = path.to_path_buf();
    match error {
        Error::UnrecognizedArchive { magic } => Diagnostic::UnrecognizedArchive { path, magic },
        Error::Decrypt => Diagnostic::DecryptFailed { path },
        other => Diagnostic::ArchiveFailed {
            path,
            reason: other.to_string(),
        },
    }
}

/// All `.arc` files below `root`, sorted.
pub fn find_archives(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| has_extension(e.path(), ARCHIVE_EXTENSION))
        .map(|e| e.into_path())
        .collect();
    found.sort();
    found
}

fn has_extension(path: &Path, dotted: &str) -> bool {
    path.extension()
        .and_then(|x| x.to_str())
        .is_some_and(|x| dotted.strip_prefix('.') == Some(x))
}

/// Extract one archive into `dest`.
///
/// Entries are recorded in the manifest whether they are written or were
/// already present. A corrupt entry, or one whose path climbs out of
/// `dest`, is reported and skipped.
pub fn extract_archive(
    path: &Path,
    dest: &Path,
    cipher: &mut dyn ArchiveCipher,
    summary: &mut ExtractSummary,
    sink: &mut dyn DiagnosticSink,
) -> Result<()> {
    let data = fs::read(path)?;
    let archive = Archive::parse(&data, cipher)?;
    summary.entries_unresolved += archive.unresolved;
    tracing::debug!(
        path = %path.display(),
        entries = archive.entries.len(),
        unresolved = archive.unresolved,
        "opened archive"
    );

    for entry in &archive.entries {
        let relative = entry.relative_path();
        if !stays_inside(Path::new(&relative)) {
            sink.report(Diagnostic::EntryFailed {
                path: relative,
                reason: "entry path leaves the extraction root".to_owned(),
            });
            continue;
        }
        let target = dest.join(&relative);
        if target.exists() {
            summary.files_skipped += 1;
            summary.manifest.insert(relative);
            continue;
        }
        let written = archive
            .read_entry(entry)
            .and_then(|bytes| write_new_file(&target, &bytes));
        match written {
            Ok(true) => summary.files_written += 1,
            Ok(false) => summary.files_skipped += 1,
            Err(e) => {
                sink.report(Diagnostic::EntryFailed {
                    path: relative,
                    reason: e.to_string(),
                });
                continue;
            }
        }
        summary.manifest.insert(relative);
    }
    Ok(())
}

/// Whether `relative` only names directories below the root it is joined to.
fn stays_inside(relative: &Path) -> bool {
    let mut named = false;
    for component in relative.components() {
        match component {
            Component::Normal(_) => named = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    named
}

/// Write `bytes` to `target` unless it exists. Returns whether it wrote.
fn write_new_file(target: &Path, bytes: &[u8]) -> Result<bool> {
    if let Some(parent) = target.parent() {
        create_parent(parent)?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(target) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    file.write_all(bytes)?;
    Ok(true)
}

fn create_parent(dir: &Path) -> Result<()> {
    match fs::create_dir_all(dir) {
        Err(e) if e.kind() != io::ErrorKind::AlreadyExists => Err(e.into()),
        _ => Ok(()),
    }
}

/// Copy registered loose files from `<install>/<native_dir>`. An install
/// without that directory simply has no loose files.
fn copy_loose_files(
    options: &ExtractOptions,
    summary: &mut ExtractSummary,
    sink: &mut dyn DiagnosticSink,
) {
    let native_root = options.source_root().join(&options.native_dir);
    if !native_root.is_dir() {
        tracing::warn!(path = %native_root.display(), "no loose file directory");
        return;
    }

    let loose: Vec<PathBuf> = WalkDir::new(&native_root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_loose_resource(p))
        .collect();
    summary.loose_files_found = loose.len();
    tracing::info!("Found {} other files.", loose.len());

    for (i, source) in loose.iter().enumerate() {
        let Ok(relative) = source.strip_prefix(&native_root) else {
            continue;
        };
        let relative = manifest_path(relative);
        let target = options.game_path.join(&relative);
        if !target.exists() {
            let copied = target
                .parent()
                .map_or(Ok(()), create_parent)
                .and_then(|()| fs::copy(source, &target).map_err(Error::from));
            match copied {
                Ok(_) => summary.loose_files_copied += 1,
                Err(e) => {
                    sink.report(Diagnostic::EntryFailed {
                        path: relative,
                        reason: e.to_string(),
                    });
                    continue;
                }
            }
        }
        summary.manifest.insert(relative);
        if options.progress_interval != 0 && i % options.progress_interval == 0 {
            tracing::info!("{i}/{} other files extracted", loose.len());
        }
    }
}

/// Whether a loose file's last extension is registered and not an archive.
fn is_loose_resource(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|x| x.to_str()) else {
        return false;
    };
    let dotted = format!(".{ext}");
    dotted != ARCHIVE_EXTENSION && registry::is_known_extension(&dotted)
}

fn manifest_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Write the manifest as a tab-indented JSON array.
pub fn write_manifest(path: &Path, manifest: &BTreeSet<String>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"\t"));
    manifest.serialize(&mut ser)?;
    writer.flush()?;
    Ok(())
}

/// Read a manifest written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<BTreeSet<String>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(io::BufReader::new(file))?)
}
