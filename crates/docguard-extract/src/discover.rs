use crate::sidecar::{self, SIDECAR_SUFFIX};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Discover documents under `root` for a batch check.
///
/// Behavior:
/// - Globs match the path relative to `root`, with `/` separators.
/// - A file is kept when it matches `include` (an empty list includes everything) and does not
///   match `exclude`.
/// - A `<doc>.facts.json` sidecar is dropped when `<doc>` itself was discovered; the document is
///   read through its sidecar anyway.
/// - Output is sorted.
pub fn discover_documents(
    root: &Utf8Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let include_set = build_globset(include).context("compile include globset")?;
    let exclude_set = build_globset(exclude).context("compile exclude globset")?;

    let mut found: BTreeSet<Utf8PathBuf> = BTreeSet::new();
    for abs in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
    {
        let rel = abs
            .strip_prefix(root)
            .unwrap_or(&abs)
            .as_str()
            .replace('\\', "/");

        let included = include.is_empty() || include_set.is_match(&rel);
        if included && !exclude_set.is_match(&rel) {
            found.insert(abs);
        }
    }

    let documents: Vec<Utf8PathBuf> = found
        .iter()
        .filter(|path| {
            !sidecar::is_sidecar(path)
                || path
                    .as_str()
                    .strip_suffix(SIDECAR_SUFFIX)
                    .is_none_or(|doc| !found.contains(Utf8Path::new(doc)))
        })
        .cloned()
        .collect();

    tracing::debug!(root = %root, count = documents.len(), "discovered documents");
    Ok(documents)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).with_context(|| format!("invalid glob: {p}"))?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
