//! Configuration inheritance resolution.
//!
//! A document may pull in other documents through `inherit_from` (sibling
//! paths, relative to the document's own directory) and `inherit_gem`
//! (a document shipped inside an installed gem). Inherited documents are
//! resolved depth-first, merged left-to-right, and the inheriting
//! document's own keys win. Revisiting a document that is still being
//! resolved is a fatal cycle.
//!
//! A missing local inherited file contributes nothing, silently; a
//! missing gem (or a missing document inside one) contributes nothing
//! with a warning.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_yaml::{Mapping, Value};

use crate::config::merger::deep_merge;
use crate::error::{DoclintError, Result};

/// Keys that point at other documents; stripped from merged output.
const INHERIT_KEYS: &[&str] = &["inherit_from", "inherit_gem"];

/// Resolves an installed gem name to its root directory.
///
/// Injected so the resolver never hard-codes a package-manager layout;
/// tests substitute a fixed map.
pub trait GemLocator {
    fn locate(&self, gem: &str) -> Option<PathBuf>;
}

/// Locates gems through the `gem` CLI (`gem env gemdir`), picking the
/// newest installed version of the named gem.
pub struct SystemGemLocator;

impl GemLocator for SystemGemLocator {
    fn locate(&self, gem: &str) -> Option<PathBuf> {
        let output = Command::new("gem").args(["env", "gemdir"]).output().ok()?;
        if !output.status.success() {
            return None;
        }
        let gemdir = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());

        let prefix = format!("{gem}-");
        let mut versions: Vec<PathBuf> = std::fs::read_dir(gemdir.join("gems"))
            .ok()?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();
        versions.sort();
        versions.pop()
    }
}

/// Resolves one document and its whole inheritance chain into a single
/// merged value.
pub struct InheritanceResolver<'a> {
    locator: &'a dyn GemLocator,
    /// Documents currently being resolved; a repeat is a cycle.
    stack: Vec<PathBuf>,
}

impl<'a> InheritanceResolver<'a> {
    pub fn new(locator: &'a dyn GemLocator) -> Self {
        Self {
            locator,
            stack: Vec::new(),
        }
    }

    /// Load `path`, resolve its inheritance chain, and merge everything
    /// with the document's own keys on top.
    pub fn resolve_file(&mut self, path: &Path) -> Result<Value> {
        let identity = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if self.stack.contains(&identity) {
            return Err(DoclintError::CircularInheritance { path: identity });
        }
        self.stack.push(identity);

        let result = self.resolve_loaded(path);

        self.stack.pop();
        result
    }

    fn resolve_loaded(&mut self, path: &Path) -> Result<Value> {
        let text = std::fs::read_to_string(path)?;
        let document: Value =
            serde_yaml::from_str(&text).map_err(|e| DoclintError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let document = match document {
            Value::Mapping(m) => m,
            Value::Null => Mapping::new(),
            other => {
                return Err(DoclintError::ConfigParse {
                    path: path.to_path_buf(),
                    message: format!("expected a mapping, got {:?}", other),
                })
            }
        };

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let inherited = self.inherited(&document, base_dir)?;

        let mut merged = match deep_merge(&inherited, &Value::Mapping(document)) {
            Value::Mapping(m) => m,
            other => return Ok(other),
        };
        for key in INHERIT_KEYS {
            merged.remove(&Value::String(key.to_string()));
        }

        Ok(Value::Mapping(merged))
    }

    /// Resolve and merge all inherited documents, left-to-right.
    fn inherited(&mut self, document: &Mapping, base_dir: &Path) -> Result<Value> {
        let mut merged = Value::Mapping(Mapping::new());

        if let Some(value) = document.get(&Value::String("inherit_from".to_string())) {
            for relative in string_or_list(value) {
                let target = base_dir.join(&relative);
                if !target.exists() {
                    tracing::debug!(?target, "inherited config not present, skipping");
                    continue;
                }
                let resolved = self.resolve_file(&target)?;
                merged = deep_merge(&merged, &resolved);
            }
        }

        if let Some(Value::Mapping(gems)) = document.get(&Value::String("inherit_gem".to_string()))
        {
            for (gem, relative) in gems {
                let (Some(gem), Some(relative)) = (gem.as_str(), relative.as_str()) else {
                    continue;
                };
                let Some(gem_dir) = self.locator.locate(gem) else {
                    tracing::warn!(gem, "gem not found for configuration inheritance");
                    continue;
                };
                let target = gem_dir.join(relative);
                if !target.exists() {
                    tracing::warn!(gem, ?target, "gem config document not found, skipping");
                    continue;
                }
                let resolved = self.resolve_file(&target)?;
                merged = deep_merge(&merged, &resolved);
            }
        }

        Ok(merged)
    }
}

fn string_or_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Sequence(seq) => seq
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    /// Locator backed by a fixed map, for tests.
    struct MapLocator(HashMap<String, PathBuf>);

    impl GemLocator for MapLocator {
        fn locate(&self, gem: &str) -> Option<PathBuf> {
            self.0.get(gem).cloned()
        }
    }

    struct NoGems;

    impl GemLocator for NoGems {
        fn locate(&self, _gem: &str) -> Option<PathBuf> {
            None
        }
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn resolve(path: &Path) -> Result<Value> {
        InheritanceResolver::new(&NoGems).resolve_file(path)
    }

    #[test]
    fn own_keys_win_over_inherited() {
        let dir = TempDir::new().unwrap();
        write(&dir, "base.yml", "Tags/Order:\n  Severity: warning\n  Enabled: true\n");
        let child = write(
            &dir,
            "child.yml",
            "inherit_from: base.yml\nTags/Order:\n  Severity: error\n",
        );

        let merged = resolve(&child).unwrap();

        assert_eq!(merged["Tags/Order"]["Severity"], "error");
        assert_eq!(merged["Tags/Order"]["Enabled"], true);
    }

    #[test]
    fn inherit_from_list_merges_left_to_right() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.yml", "Key: a\nOnlyA: 1\n");
        write(&dir, "b.yml", "Key: b\nOnlyB: 2\n");
        let child = write(&dir, "child.yml", "inherit_from:\n  - a.yml\n  - b.yml\n");

        let merged = resolve(&child).unwrap();

        assert_eq!(merged["Key"], "b");
        assert_eq!(merged["OnlyA"], 1);
        assert_eq!(merged["OnlyB"], 2);
    }

    #[test]
    fn inheritance_keys_are_stripped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "base.yml", "A: 1\n");
        let child = write(&dir, "child.yml", "inherit_from: base.yml\nB: 2\n");

        let merged = resolve(&child).unwrap();
        let map = merged.as_mapping().unwrap();

        assert!(!map.contains_key(&Value::String("inherit_from".into())));
        assert!(!map.contains_key(&Value::String("inherit_gem".into())));
    }

    #[test]
    fn missing_local_inheritance_is_skipped_silently() {
        let dir = TempDir::new().unwrap();
        let child = write(&dir, "child.yml", "inherit_from: nowhere.yml\nA: 1\n");

        let merged = resolve(&child).unwrap();
        assert_eq!(merged["A"], 1);
    }

    #[test]
    fn direct_cycle_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.yml", "inherit_from: a.yml\n");

        let err = resolve(&path).unwrap_err();
        assert!(matches!(err, DoclintError::CircularInheritance { .. }));
    }

    #[test]
    fn transitive_cycle_is_fatal() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.yml", "inherit_from: b.yml\n");
        write(&dir, "b.yml", "inherit_from: a.yml\n");
        let path = dir.path().join("a.yml");

        let err = resolve(&path).unwrap_err();
        assert!(matches!(err, DoclintError::CircularInheritance { .. }));
    }

    #[test]
    fn diamond_inheritance_is_not_a_cycle() {
        let dir = TempDir::new().unwrap();
        write(&dir, "base.yml", "Root: true\n");
        write(&dir, "left.yml", "inherit_from: base.yml\nLeft: 1\n");
        write(&dir, "right.yml", "inherit_from: base.yml\nRight: 2\n");
        let child = write(
            &dir,
            "child.yml",
            "inherit_from:\n  - left.yml\n  - right.yml\n",
        );

        let merged = resolve(&child).unwrap();
        assert_eq!(merged["Root"], true);
        assert_eq!(merged["Left"], 1);
        assert_eq!(merged["Right"], 2);
    }

    #[test]
    fn inherit_gem_resolves_through_the_locator() {
        let gem_dir = TempDir::new().unwrap();
        fs::create_dir_all(gem_dir.path().join("config")).unwrap();
        fs::write(
            gem_dir.path().join("config/doclint.yml"),
            "Shared: gem\nTags/Order:\n  Severity: convention\n",
        )
        .unwrap();

        let dir = TempDir::new().unwrap();
        let child = write(
            &dir,
            "child.yml",
            "inherit_gem:\n  company-styles: config/doclint.yml\nOwn: 1\n",
        );

        let locator = MapLocator(HashMap::from([(
            "company-styles".to_string(),
            gem_dir.path().to_path_buf(),
        )]));
        let merged = InheritanceResolver::new(&locator)
            .resolve_file(&child)
            .unwrap();

        assert_eq!(merged["Shared"], "gem");
        assert_eq!(merged["Own"], 1);
    }

    #[test]
    fn missing_gem_is_non_fatal() {
        let dir = TempDir::new().unwrap();
        let child = write(
            &dir,
            "child.yml",
            "inherit_gem:\n  nope: config/doclint.yml\nOwn: 1\n",
        );

        let merged = resolve(&child).unwrap();
        assert_eq!(merged["Own"], 1);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.yml", "A: [unclosed\n");

        let err = resolve(&path).unwrap_err();
        assert!(matches!(err, DoclintError::ConfigParse { .. }));
    }

    #[test]
    fn scalar_document_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "scalar.yml", "just a string\n");

        let err = resolve(&path).unwrap_err();
        assert!(matches!(err, DoclintError::ConfigParse { .. }));
    }

    #[test]
    fn empty_document_resolves_to_empty_mapping() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.yml", "");

        let merged = resolve(&path).unwrap();
        assert!(merged.as_mapping().unwrap().is_empty());
    }
}
