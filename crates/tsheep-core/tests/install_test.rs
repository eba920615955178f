//! Installer integration tests
//!
//! These drive `Installer` against temporary package, home and project
//! directories.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tsheep_core::{
    parse_args, FixedHome, InstallError, InstallOptions, InstallScope, Installer, Logger,
    PathResolver, Settings, SkillsRoot,
};
use walkdir::WalkDir;

struct Fixture {
    package: TempDir,
    home: TempDir,
    project: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            package: TempDir::new().expect("Failed to create package dir"),
            home: TempDir::new().expect("Failed to create home dir"),
            project: TempDir::new().expect("Failed to create project dir"),
        };

        let skill = fixture.package.path().join("ab-experiment-cleanup");
        fs::create_dir_all(skill.join("scripts")).unwrap();
        fs::write(skill.join("SKILL.md"), "---\ndescription: Clean up\n---\nBody").unwrap();
        fs::write(skill.join("scripts/run.sh"), "#!/bin/sh\necho cleanup\n").unwrap();
        fixture
    }

    fn installer(&self) -> Installer<FixedHome> {
        Installer::new(
            Settings::new(self.package.path()),
            PathResolver::new(
                FixedHome(Some(self.home.path().to_path_buf())),
                self.project.path(),
            ),
        )
    }

    fn skill_source(&self) -> PathBuf {
        self.package.path().join("ab-experiment-cleanup")
    }
}

/// Relative path and contents of every file under `root`, sorted
fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut files: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect();
    files.sort();
    files
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn test_install_global_copies_tree() {
    let fx = Fixture::new();
    let mut logger = Logger::new(Vec::new(), false);

    let report = fx
        .installer()
        .install("ab-experiment-cleanup", &InstallOptions::default(), &mut logger)
        .unwrap();

    let expected = fx.home.path().join(".claude/skills/ab-experiment-cleanup");
    assert_eq!(report.destination, expected);
    assert_eq!(report.files_copied, 2);
    assert!(!report.replaced);
    assert_eq!(snapshot(&expected), snapshot(&fx.skill_source()));

    let out = String::from_utf8(logger.into_inner()).unwrap();
    assert!(out.contains("Created skills directory"));
    assert!(out.contains("Successfully installed \"ab-experiment-cleanup\""));
    assert!(out.contains("You can now use it with: /ab-experiment-cleanup"));
}

#[test]
fn test_install_local_codex() {
    let fx = Fixture::new();
    let options = InstallOptions {
        scope: InstallScope::Local,
        root: SkillsRoot::Codex,
        global_explicit: false,
    };
    let mut logger = Logger::new(Vec::new(), false);

    let report = fx
        .installer()
        .install("ab-experiment-cleanup", &options, &mut logger)
        .unwrap();

    assert_eq!(
        report.destination,
        fx.project.path().join(".codex/skills/ab-experiment-cleanup")
    );
    assert!(is_empty_dir(fx.home.path()));
}

#[test]
fn test_reinstall_replaces_instead_of_merging() {
    let fx = Fixture::new();
    let installer = fx.installer();
    let options = InstallOptions::default();
    let mut logger = Logger::new(Vec::new(), false);

    installer
        .install("ab-experiment-cleanup", &options, &mut logger)
        .unwrap();

    // New version of the skill drops a file and changes another.
    fs::remove_file(fx.skill_source().join("scripts/run.sh")).unwrap();
    fs::write(fx.skill_source().join("SKILL.md"), "v2").unwrap();

    let report = installer
        .install("ab-experiment-cleanup", &options, &mut logger)
        .unwrap();

    assert!(report.replaced);
    assert_eq!(snapshot(&report.destination), snapshot(&fx.skill_source()));
    assert!(!report.destination.join("scripts/run.sh").exists());

    let out = String::from_utf8(logger.into_inner()).unwrap();
    assert_eq!(out.matches("already exists. Updating...").count(), 1);
    assert_eq!(out.matches("Created skills directory").count(), 1);
}

#[test]
fn test_missing_skill_leaves_filesystem_untouched() {
    let fx = Fixture::new();
    let mut logger = Logger::new(Vec::new(), false);

    let err = fx
        .installer()
        .install("no-such-skill", &InstallOptions::default(), &mut logger)
        .unwrap_err();

    match err {
        InstallError::SkillNotFound { name, available } => {
            assert_eq!(name, "no-such-skill");
            assert_eq!(available, vec!["ab-experiment-cleanup".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(is_empty_dir(fx.home.path()));
    assert!(is_empty_dir(fx.project.path()));
}

#[test]
fn test_traversal_name_rejected() {
    let fx = Fixture::new();
    let mut logger = Logger::new(Vec::new(), false);

    let err = fx
        .installer()
        .install("../ab-experiment-cleanup", &InstallOptions::default(), &mut logger)
        .unwrap_err();

    assert!(matches!(err, InstallError::InvalidSkillName(_)));
    assert!(is_empty_dir(fx.home.path()));
}

#[test]
fn test_missing_home_is_an_error() {
    let fx = Fixture::new();
    let installer = Installer::new(
        Settings::new(fx.package.path()),
        PathResolver::new(FixedHome(None), fx.project.path()),
    );
    let mut logger = Logger::new(Vec::new(), false);

    let err = installer
        .install("ab-experiment-cleanup", &InstallOptions::default(), &mut logger)
        .unwrap_err();

    assert!(matches!(err, InstallError::HomeNotFound));
}

#[test]
fn test_conflicting_flags_install_globally() {
    let fx = Fixture::new();
    let parsed = parse_args(["add", "ab-experiment-cleanup", "-l", "-g"]);
    let mut logger = Logger::new(Vec::new(), false);

    let report = fx
        .installer()
        .install(&parsed.positionals[1], &parsed.options, &mut logger)
        .unwrap();

    assert_eq!(parsed.warnings.len(), 1);
    assert!(report.destination.starts_with(fx.home.path()));
    assert!(is_empty_dir(fx.project.path()));
}

#[test]
fn test_dotted_skill_names_install() {
    let fx = Fixture::new();
    let dotted = fx.package.path().join(".foo");
    fs::create_dir_all(&dotted).unwrap();
    fs::write(dotted.join("SKILL.md"), "dotted").unwrap();
    let mut logger = Logger::new(Vec::new(), false);

    let report = fx
        .installer()
        .install(".foo", &InstallOptions::default(), &mut logger)
        .unwrap();

    assert_eq!(report.destination, fx.home.path().join(".claude/skills/.foo"));
    assert_eq!(fs::read_to_string(report.destination.join("SKILL.md")).unwrap(), "dotted");
}
