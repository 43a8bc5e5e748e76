use std::path::Path;

use crate::utils::validation::strip_alignment_extension;

/// Marker that starts the concatenation suffix in orthogroup file names
const CAT_MARKER: &str = "_cat";

/// Infer the orthogroup identifier (`OGS`) from an alignment file name.
///
/// Strips a trailing `.fasta`, `.fas` or `.fa` (any case), then drops everything
/// from the first `_cat` onward. Names matching neither rule come back unchanged.
#[must_use]
pub fn infer_ogs_id(file_name: &str) -> String {
    let name = strip_alignment_extension(file_name);
    match name.find(CAT_MARKER) {
        Some(pos) => name[..pos].to_string(),
        None => name.to_string(),
    }
}

/// [`infer_ogs_id`] applied to the final component of `path`
#[must_use]
pub fn infer_ogs_id_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    infer_ogs_id(&file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_ogs_id() {
        assert_eq!(infer_ogs_id("abc.fasta"), "abc");
        assert_eq!(infer_ogs_id("abc_cat1.fa"), "abc");
        assert_eq!(infer_ogs_id("abc.fas"), "abc");
        assert_eq!(infer_ogs_id("abc.txt"), "abc.txt");
        assert_eq!(infer_ogs_id("abc"), "abc");
    }

    #[test]
    fn test_infer_ogs_id_edge_cases() {
        assert_eq!(infer_ogs_id("OG0001.FASTA"), "OG0001");
        assert_eq!(infer_ogs_id("OG0001_cat_x_cat_y.fas"), "OG0001");
        // Extension is removed first, so a suffix-free name keeps its dots
        assert_eq!(infer_ogs_id("OG.v2.fa"), "OG.v2");
        // `_cat` matching is case-sensitive
        assert_eq!(infer_ogs_id("OG_CAT.fa"), "OG_CAT");
        assert_eq!(infer_ogs_id("_cat.fa"), "");
        assert_eq!(infer_ogs_id("abc.fa.gz"), "abc.fa.gz");
    }

    #[test]
    fn test_infer_ogs_id_from_path() {
        assert_eq!(
            infer_ogs_id_from_path(Path::new("/data/aln/OG42_cat.fasta")),
            "OG42"
        );
        assert_eq!(infer_ogs_id_from_path(Path::new("/")), "");
    }
}
