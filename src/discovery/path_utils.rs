use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::reporting::logging;

/// Final path component of `path`, treating both `/` and `\` as separators.
///
/// A trailing separator yields an empty string, so `"foo/"` has no basename.
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Replace every backslash with a forward slash.
pub fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// The directory one level above `cwd`; the root directory is its own parent.
pub fn scan_root_from(cwd: &Path) -> PathBuf {
    cwd.parent().unwrap_or(cwd).to_path_buf()
}

/// Scan root for this process, derived from the current working directory.
pub fn current_scan_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(scan_root_from(&cwd))
}

/// True when the file name ends with one of the literal suffixes.
pub fn has_recognized_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };

    extensions
        .iter()
        .any(|suffix| name.ends_with(suffix.as_ref()))
}

/// Walk every file under `root` whose name carries a recognized suffix.
///
/// Ignore files, hidden-file rules and symlinked directories are not honored
/// or followed. Entries that cannot be read are logged and passed over.
pub fn walk_candidates<S: AsRef<str>>(
    root: &Path,
    extensions: &[S],
) -> impl Iterator<Item = PathBuf> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    builder.build().filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                logging::log_walk_error(&err);
                return None;
            }
        };

        let entry_path = entry.path();
        if entry_path.is_file() && has_recognized_extension(entry_path, extensions) {
            Some(entry_path.to_path_buf())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::constants::files;
    use std::fs;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn create_test_structure() -> std::result::Result<TempDir, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::create_dir_all(base.join("kernel/fs"))?;
        fs::create_dir_all(base.join("include/sys"))?;
        fs::create_dir_all(base.join(".hidden"))?;

        fs::write(base.join("kernel/main.c"), "#include \"log.h\"\n")?;
        fs::write(base.join("kernel/fs/vfs.cpp"), "#include <fs/vfs.hpp>\n")?;
        fs::write(base.join("include/sys/log.h"), "void log(void);\n")?;
        fs::write(base.join("include/sys/inline.inl"), "// inline\n")?;
        fs::write(base.join("CMakeLists.txt"), "add_executable(kernel)\n")?;
        fs::write(base.join("README.md"), "#include \"log.h\"\n")?;
        fs::write(base.join("build.rs"), "fn main() {}\n")?;
        fs::write(base.join(".hidden/secret.h"), "#pragma once\n")?;
        fs::write(base.join(".gitignore"), "*.h\n")?;

        Ok(temp_dir)
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("foo/bar.h"), "bar.h");
        assert_eq!(basename("bar.h"), "bar.h");
        assert_eq!(basename(r"foo\bar.h"), "bar.h");
        assert_eq!(basename("a/b\\c/d.hpp"), "d.hpp");
        assert_eq!(basename("foo/"), "");
        assert_eq!(basename(""), "");
    }

    #[test]
    fn test_to_forward_slashes() {
        assert_eq!(to_forward_slashes(r"foo\qux\bar.h"), "foo/qux/bar.h");
        assert_eq!(to_forward_slashes("foo/bar.h"), "foo/bar.h");
    }

    #[test]
    fn test_scan_root_from() {
        assert_eq!(
            scan_root_from(Path::new("/work/project/tools")),
            PathBuf::from("/work/project")
        );
        assert_eq!(scan_root_from(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_current_scan_root__is_parent_of_cwd() -> TestResult {
        let cwd = std::env::current_dir()?;
        let root = current_scan_root()?;

        assert!(cwd.starts_with(&root));
        Ok(())
    }

    #[test]
    fn test_has_recognized_extension() {
        let exts = files::DEFAULT_EXTENSIONS;

        assert!(has_recognized_extension(Path::new("a/main.c"), &exts));
        assert!(has_recognized_extension(Path::new("a/b.hpp"), &exts));
        assert!(has_recognized_extension(Path::new("x.inl"), &exts));
        assert!(has_recognized_extension(Path::new("CMakeLists.txt"), &exts));
        assert!(!has_recognized_extension(Path::new("README.md"), &exts));
        assert!(!has_recognized_extension(Path::new("lib.rs"), &exts));
        assert!(!has_recognized_extension(Path::new("archive.cc"), &exts));
    }

    #[test]
    fn test_walk_candidates__default_extensions() -> TestResult {
        let temp_dir = create_test_structure()?;
        let exts = files::DEFAULT_EXTENSIONS;

        let found: Vec<PathBuf> = walk_candidates(temp_dir.path(), &exts).collect();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert!(names.contains(&"main.c".to_string()));
        assert!(names.contains(&"vfs.cpp".to_string()));
        assert!(names.contains(&"log.h".to_string()));
        assert!(names.contains(&"inline.inl".to_string()));
        assert!(names.contains(&"CMakeLists.txt".to_string()));
        assert!(!names.contains(&"README.md".to_string()));
        assert!(!names.contains(&"build.rs".to_string()));
        Ok(())
    }

    #[test]
    fn test_walk_candidates__ignores_gitignore_and_hidden_rules() -> TestResult {
        let temp_dir = create_test_structure()?;
        let exts = files::DEFAULT_EXTENSIONS;

        let found: Vec<PathBuf> = walk_candidates(temp_dir.path(), &exts).collect();

        assert!(found.contains(&temp_dir.path().join(".hidden/secret.h")));
        assert!(found.contains(&temp_dir.path().join("include/sys/log.h")));
        Ok(())
    }

    #[test]
    fn test_walk_candidates__custom_extensions() -> TestResult {
        let temp_dir = create_test_structure()?;
        let exts = vec![".md".to_string()];

        let found: Vec<PathBuf> = walk_candidates(temp_dir.path(), &exts).collect();

        assert_eq!(found, vec![temp_dir.path().join("README.md")]);
        Ok(())
    }

    #[test]
    fn test_walk_candidates__missing_root_yields_nothing() {
        let exts = files::DEFAULT_EXTENSIONS;
        let found: Vec<PathBuf> =
            walk_candidates(Path::new("/definitely/nonexistent/path/12345"), &exts).collect();

        assert!(found.is_empty());
    }
}
