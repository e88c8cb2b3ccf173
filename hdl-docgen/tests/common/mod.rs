use std::fs;
use std::path::{Path, PathBuf};

use hdl_docgen::{parse_modules, Module, ParseError};

pub mod macros;
pub mod model;

pub struct TestHarness {
    fixtures_root: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            fixtures_root: default_fixtures_root(),
        }
    }

    #[allow(dead_code)]
    pub fn fixtures_root(&self) -> &Path {
        &self.fixtures_root
    }

    pub fn fixture_path(&self, relative: &str) -> PathBuf {
        self.fixtures_root.join(relative)
    }

    pub fn read_fixture(&self, relative: &str) -> String {
        let path = self.fixture_path(relative);
        fs::read_to_string(&path).unwrap_or_else(|err| {
            panic!("Failed to read fixture {}: {}", path.display(), err);
        })
    }

    pub fn parse_fixture(&self, relative: &str) -> Result<Vec<Module>, ParseError> {
        parse_modules(&self.read_fixture(relative))
    }

    #[allow(dead_code)]
    pub fn parse_fixture_ok(&self, relative: &str) -> Vec<Module> {
        self.parse_fixture(relative)
            .unwrap_or_else(|err| panic!("Failed to parse {}: {}", relative, err))
    }

    #[allow(dead_code)]
    pub fn parse_fixture_err(&self, relative: &str) -> ParseError {
        match self.parse_fixture(relative) {
            Ok(modules) => panic!(
                "Expected {} to fail, got {} module(s)",
                relative,
                modules.len()
            ),
            Err(err) => err,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test_files")
}

/// Verilog and SystemVerilog fixtures under `relative_dir`, sorted by name.
#[allow(dead_code)]
pub fn iter_hdl_files(relative_dir: &str) -> Vec<PathBuf> {
    let root = default_fixtures_root().join(relative_dir);
    if !root.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap_or_else(|err| panic!("Failed to read directory {}: {}", root.display(), err))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("v") | Some("sv") => Some(path),
                _ => None,
            }
        })
        .collect();
    files.sort();
    files
}

#[allow(dead_code)]
pub fn assert_parse_ok(relative: &str) -> Vec<Module> {
    TestHarness::default().parse_fixture_ok(relative)
}

#[allow(dead_code)]
pub fn assert_parse_err(relative: &str) -> ParseError {
    TestHarness::default().parse_fixture_err(relative)
}
