#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Crate roots and module declaration files carry no logic of their own
    fn declares_modules_only(file_name: &str) -> bool {
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    // Rust files below `root` as slash-separated paths relative to it
    fn rust_files(root: &Path) -> BTreeSet<String> {
        let mut files = BTreeSet::new();
        if let Err(error) = walk(root, root, &mut files) {
            assert!(!root.exists(), "Failed to scan {}: {error}", root.display());
        }
        files
    }

    fn walk(root: &Path, dir: &Path, files: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                walk(root, &path, files)?;
                continue;
            }

            let is_rust = path.extension().is_some_and(|ext| ext == "rs");
            let is_declaration = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(declares_modules_only);
            if !is_rust || is_declaration {
                continue;
            }

            let relative = path
                .strip_prefix(root)
                .map_err(|_| io::Error::other("path escaped its scan root"))?;
            files.insert(relative.to_string_lossy().replace('\\', "/"));
        }
        Ok(())
    }

    fn report(header: &str, paths: &[&String]) -> String {
        let listed: Vec<String> = paths.iter().map(|path| format!("  - {path}")).collect();
        format!("{header}:\n{}", listed.join("\n"))
    }

    // Tests every source module has a unit test file at the same relative path
    #[test]
    fn test_every_module_has_unit_tests() {
        let sources = rust_files(Path::new("src"));
        let unit_tests = rust_files(Path::new("tests/unit"));

        let untested: Vec<&String> = sources.difference(&unit_tests).collect();
        assert!(
            untested.is_empty(),
            "{}",
            report("Modules without a file under tests/unit", &untested)
        );
    }

    // Tests no unit test file outlives the module it covered
    #[test]
    fn test_every_unit_test_has_a_module() {
        let sources = rust_files(Path::new("src"));
        let unit_tests = rust_files(Path::new("tests/unit"));

        let orphaned: Vec<&String> = unit_tests.difference(&sources).collect();
        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without a module under src", &orphaned)
        );
    }

    // Tests each test file defines at least one test
    #[test]
    fn test_test_files_define_tests() {
        let tests_dir = Path::new("tests");
        let empty: Vec<String> = rust_files(tests_dir)
            .into_iter()
            .filter(|file| {
                fs::read_to_string(tests_dir.join(file))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .collect();
        let empty: Vec<&String> = empty.iter().collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without a #[test] function", &empty)
        );
    }
}
