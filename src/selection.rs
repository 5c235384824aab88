//! Input selection: path expansion and exclusion matching.
//!
//! The entry point accepts files, directories, and glob patterns.
//! Directories expand recursively to `*.rb` files, globs match against
//! the working directory, and everything is absolutized before the
//! global exclude list filters the selection once, up front. Exclude
//! patterns are matched against both the absolute path and the
//! cwd-relative path, so `"spec/**/*"` and `"**/spec/**/*"` behave the
//! way people expect.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::config::EffectiveConfig;

/// Expand user-supplied paths into the filtered, absolute file selection.
pub fn expand(paths: &[String], config: &EffectiveConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.contains(['*', '?', '[']) {
            files.extend(expand_glob(path));
        } else {
            let path = Path::new(path);
            if path.is_dir() {
                files.extend(ruby_files_under(path));
            } else if is_ruby_file(path) {
                files.push(path.to_path_buf());
            }
        }
    }

    let excludes = build_globset(&config.global_exclude());
    files
        .into_iter()
        .map(absolutize)
        .filter(|f| !is_excluded(f, &excludes))
        .collect()
}

/// Compile exclusion patterns; invalid patterns are dropped with a
/// warning rather than aborting the run.
pub fn build_globset(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "ignoring invalid exclude pattern")
            }
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Whether an absolute path matches any exclusion pattern.
pub fn is_excluded(path: &Path, excludes: &GlobSet) -> bool {
    if excludes.is_match(path) {
        return true;
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            return excludes.is_match(relative);
        }
    }
    false
}

fn expand_glob(pattern: &str) -> Vec<PathBuf> {
    let Ok(glob) = Glob::new(pattern) else {
        tracing::warn!(pattern = %pattern, "invalid glob pattern, skipping");
        return Vec::new();
    };
    let matcher = glob.compile_matcher();
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut files: Vec<PathBuf> = walk(&root)
        .filter(|path| {
            let relative = path.strip_prefix(&root).unwrap_or(path);
            matcher.is_match(relative) || matcher.is_match(path)
        })
        .collect();
    files.sort();
    files
}

fn ruby_files_under(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walk(dir).collect();
    files.sort();
    files
}

fn walk(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkBuilder::new(root)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .build()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| is_ruby_file(path))
}

fn is_ruby_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "rb")
}

fn absolutize(path: PathBuf) -> PathBuf {
    std::fs::canonicalize(&path).unwrap_or_else(|_| {
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&path))
                .unwrap_or(path)
        }
    })
}
