//! Build-then-extract tests for `.orby` archives.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use orby_package::{build, list_members};
use tempfile::TempDir;

fn make_project(root: &Path) {
    fs::create_dir_all(root.join("src/scenes")).unwrap();
    fs::create_dir_all(root.join("assets")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(
        root.join("manifest.json"),
        r#"{"name": "demo", "description": "Demo app"}"#,
    )
    .unwrap();
    fs::write(root.join("src/main.orb"), "entry()\n").unwrap();
    fs::write(root.join("src/scenes/level1.orb"), "scene(1)\n").unwrap();
    fs::write(root.join("assets/blob.bin"), (0u8..=255).collect::<Vec<_>>()).unwrap();
}

/// Relative path (with `/`) → bytes, for every regular file under `root`.
fn snapshot_dir(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut out = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                let key = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                out.insert(key, fs::read(&path).unwrap());
            }
        }
    }
    out
}

fn snapshot_archive(archive: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut zip = zip::ZipArchive::new(fs::File::open(archive).unwrap()).unwrap();
    let mut out = BTreeMap::new();
    for i in 0..zip.len() {
        let mut file = zip.by_index(i).unwrap();
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).unwrap();
        out.insert(file.name().to_owned(), buf);
    }
    out
}

#[test]
fn archive_reproduces_every_file_byte_for_byte() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    make_project(project.path());

    let archive = build(project.path(), Some(out.path())).expect("build");

    assert_eq!(snapshot_archive(&archive), snapshot_dir(project.path()));
}

#[test]
fn archive_is_named_after_manifest_and_absolute() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    make_project(project.path());

    let archive = build(project.path(), Some(out.path())).expect("build");

    assert!(archive.is_absolute());
    assert_eq!(archive.file_name().unwrap(), "demo.orby");
    assert_eq!(archive.parent().unwrap(), out.path().canonicalize().unwrap());
}

#[test]
fn members_are_relative_and_exclude_directories() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    make_project(project.path());

    let archive = build(project.path(), Some(out.path())).expect("build");
    let mut members = list_members(&archive).expect("members");
    members.sort();

    assert_eq!(
        members,
        [
            "assets/blob.bin",
            "manifest.json",
            "src/main.orb",
            "src/scenes/level1.orb",
        ]
    );
    let root_name = project.path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(members.iter().all(|m| !m.starts_with(&root_name) && !m.ends_with('/')));
}

#[test]
fn building_into_project_dir_skips_own_output() {
    let project = TempDir::new().unwrap();
    make_project(project.path());

    let archive = build(project.path(), Some(project.path())).expect("build");
    let members = list_members(&archive).expect("members");

    assert!(!members.iter().any(|m| m.ends_with(".orby")));
    assert_eq!(members.len(), 4);
}

#[test]
fn rebuild_overwrites_previous_archive() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    make_project(project.path());

    let first: PathBuf = build(project.path(), Some(out.path())).expect("first");
    fs::write(project.path().join("src/extra.orb"), "more()\n").unwrap();
    let second = build(project.path(), Some(out.path())).expect("second");

    assert_eq!(first, second);
    assert_eq!(list_members(&second).unwrap().len(), 5);
}

#[cfg(unix)]
#[test]
fn symlinked_file_is_stored_by_content() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    make_project(project.path());
    fs::create_dir_all(project.path().join("shared")).unwrap();
    fs::write(project.path().join("shared/config.orb"), "cfg").unwrap();
    std::os::unix::fs::symlink(
        project.path().join("shared/config.orb"),
        project.path().join("config.orb"),
    )
    .unwrap();

    let archive = build(project.path(), Some(out.path())).expect("build");
    let stored = snapshot_archive(&archive);

    assert_eq!(stored.get("config.orb").map(Vec::as_slice), Some(&b"cfg"[..]));
    assert_eq!(stored.get("shared/config.orb").map(Vec::as_slice), Some(&b"cfg"[..]));
    assert_eq!(stored, snapshot_dir(project.path()));
}
