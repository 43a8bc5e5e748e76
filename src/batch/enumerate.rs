use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::parsing::manifest::read_manifest;
use crate::parsing::ParseError;

/// Directory listing patterns, in the order their groups are emitted
pub const LISTING_EXTENSIONS: [&str; 3] = ["fa", "fas", "fasta"];

/// Resolve the files a batch run will visit.
///
/// With a manifest, its entries are joined to `input_dir` in manifest order,
/// duplicates and nonexistent names included. Without one, see
/// [`list_alignment_files`]; a directory that cannot be listed yields no files.
///
/// # Errors
///
/// Returns `ParseError::Io` if the manifest cannot be read.
pub fn resolve_input_files(
    input_dir: &Path,
    manifest: Option<&Path>,
) -> Result<Vec<PathBuf>, ParseError> {
    match manifest {
        Some(manifest) => read_manifest(manifest, input_dir),
        None => Ok(list_alignment_files(input_dir).unwrap_or_else(|e| {
            warn!("Cannot list {}: {e}", input_dir.display());
            Vec::new()
        })),
    }
}

/// List `*.fa`, then `*.fas`, then `*.fasta` entries of `input_dir`.
///
/// Extensions match case-sensitively. Each group is sorted by path; groups are
/// concatenated without cross-group deduplication.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be listed.
pub fn list_alignment_files(input_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        entries.push(entry?.path());
    }

    let mut files = Vec::with_capacity(entries.len());
    for ext in LISTING_EXTENSIONS {
        let mut group: Vec<PathBuf> = entries
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == ext))
            .cloned()
            .collect();
        group.sort();
        files.append(&mut group);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn touch(dir: &Path, name: &str) {
        fs::File::create(dir.join(name)).unwrap();
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_listing_groups_by_extension_then_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.fasta", "z.fa", "a.fas", "a.fa", "notes.txt", "c.FA", "x.fna"] {
            touch(dir.path(), name);
        }

        let files = list_alignment_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["a.fa", "z.fa", "a.fas", "b.fasta"]);
    }

    #[test]
    fn test_listing_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_alignment_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_listing_missing_directory() {
        assert!(list_alignment_files(Path::new("/nonexistent/alignments")).is_err());
    }

    #[test]
    fn test_manifest_overrides_listing() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.fa");
        touch(dir.path(), "b.fa");

        let manifest_path = dir.path().join("list.txt");
        let mut manifest = fs::File::create(&manifest_path).unwrap();
        manifest.write_all(b"b.fa\n\nmissing.fa\nb.fa\n").unwrap();

        let files = resolve_input_files(dir.path(), Some(&manifest_path)).unwrap();
        assert_eq!(names(&files), vec!["b.fa", "missing.fa", "b.fa"]);
        assert!(files.iter().all(|p| p.starts_with(dir.path())));
    }

    #[test]
    fn test_resolve_without_manifest_lists_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "OG1.fasta");
        let files = resolve_input_files(dir.path(), None).unwrap();
        assert_eq!(names(&files), vec!["OG1.fasta"]);
    }

    #[test]
    fn test_resolve_unlistable_input_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "OG1.fa");
        let not_a_dir = dir.path().join("OG1.fa");

        assert!(list_alignment_files(&not_a_dir).is_err());
        let files = resolve_input_files(&not_a_dir, None).unwrap();
        assert!(files.is_empty());
    }
}
