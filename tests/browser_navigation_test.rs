//! Tests for the directory browser: listing, ordering and navigation
//!
//! The browser is driven against an in-memory host so every scenario is
//! deterministic (mtimes are fixed, no real filesystem involved).

mod common;

use std::path::{Path, PathBuf};

use common::{file, folder, undated_file, FixedPermission, MemoryFs};
use picstash::{CurrentDirectory, DirectoryBrowser, DirectoryEntry, NavOutcome, Platform};

fn gallery() -> MemoryFs {
    let mut fs = MemoryFs::new("/pics");
    fs.add("/pics", file("/pics", "a.png", 100));
    fs.add("/pics", file("/pics", "b.jpg", 200));
    fs.add("/pics", file("/pics", "notes.txt", 300));
    fs.add("/pics", folder("/pics", "Vacation", 150));
    fs.add("/pics/Vacation", file("/pics/Vacation", "beach.JPEG", 10));
    fs.add("/pics/Vacation", folder("/pics/Vacation", "Day1", 20));
    fs.add("/pics/Vacation/Day1", file("/pics/Vacation/Day1", "sunrise.png", 5));
    fs
}

fn browser(fs: MemoryFs) -> DirectoryBrowser<MemoryFs, FixedPermission> {
    DirectoryBrowser::new(fs, FixedPermission::granted(), Platform::Desktop)
}

fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name()).collect()
}

/// Test: listing keeps every folder and every jpg/jpeg/png, nothing else
#[tokio::test]
async fn test_listing_keeps_folders_and_images_only() {
    let mut fs = MemoryFs::new("/mixed");
    fs.add("/mixed", folder("/mixed", "one", 1));
    fs.add("/mixed", folder("/mixed", "two", 2));
    fs.add("/mixed", file("/mixed", "x.jpg", 3));
    fs.add("/mixed", file("/mixed", "y.JPEG", 4));
    fs.add("/mixed", file("/mixed", "z.Png", 5));
    fs.add("/mixed", file("/mixed", "clip.gif", 6));
    fs.add("/mixed", file("/mixed", "README", 7));
    fs.add("/mixed", file("/mixed", "archive.jpg.zip", 8));
    let browser = browser(fs);

    let entries = browser
        .list_directory(Path::new("/mixed"))
        .await
        .expect("listing should succeed");

    assert_eq!(entries.len(), 5, "2 folders + 3 images expected");
    assert_eq!(entries.iter().filter(|e| e.is_folder()).count(), 2);
    assert_eq!(entries.iter().filter(|e| e.is_image()).count(), 3);
}

/// Test: entries come back newest first
#[tokio::test]
async fn test_listing_is_newest_first() {
    let browser = browser(gallery());

    let entries = browser.list_directory(Path::new("/pics")).await.unwrap();

    let times: Vec<_> = entries.iter().map(|e| e.modified().unwrap()).collect();
    assert!(
        times.windows(2).all(|pair| pair[0] >= pair[1]),
        "modification times must be non-increasing: {:?}",
        names(&entries)
    );
    assert_eq!(names(&entries), vec!["b.jpg", "Vacation", "a.png"]);
}

/// Test: entries without a modification time don't break the listing
#[tokio::test]
async fn test_listing_tolerates_missing_mtime() {
    let mut fs = MemoryFs::new("/pics");
    fs.add("/pics", file("/pics", "old.jpg", 1));
    fs.add("/pics", undated_file("/pics", "mystery.png"));
    fs.add("/pics", file("/pics", "new.jpg", 9));
    let browser = browser(fs);

    let entries = browser.list_directory(Path::new("/pics")).await.unwrap();

    assert_eq!(entries.len(), 3);
    let dated: Vec<_> = entries.iter().filter(|e| e.modified().is_some()).collect();
    assert_eq!(dated[0].name(), "new.jpg");
    assert_eq!(dated[1].name(), "old.jpg");
}

/// Test: mount lists the start directory and selects the first entry
#[tokio::test]
async fn test_mount_lists_root() {
    let mut browser = browser(gallery());

    let outcome = browser.mount().await.unwrap();

    assert_eq!(outcome, NavOutcome::Listed);
    assert!(browser.current().is_root());
    assert_eq!(browser.current_dir(), Path::new("/pics"));
    assert_eq!(browser.entries().len(), 3);
    assert_eq!(browser.state().selected_index, Some(0));
    assert!(browser.state().loaded);
}

/// Test: entering a folder and going back returns to the previous directory
#[tokio::test]
async fn test_enter_then_back_restores_directory() {
    let mut browser = browser(gallery());
    browser.mount().await.unwrap();
    let before: Vec<String> = browser.entries().iter().map(|e| e.name().to_string()).collect();

    let outcome = browser
        .enter_folder(Path::new("/pics/Vacation"))
        .await
        .unwrap();
    assert_eq!(outcome, NavOutcome::Listed);
    assert_eq!(
        browser.current(),
        &CurrentDirectory::Path(PathBuf::from("/pics/Vacation"))
    );
    assert_eq!(names(browser.entries()), vec!["Day1", "beach.JPEG"]);

    let outcome = browser.go_back().await.unwrap();
    assert_eq!(outcome, NavOutcome::Listed);
    assert!(browser.current().is_root());
    let after: Vec<String> = browser.entries().iter().map(|e| e.name().to_string()).collect();
    assert_eq!(before, after);
}

/// Test: going back from two levels deep lands on the intermediate folder
#[tokio::test]
async fn test_back_ascends_one_level() {
    let mut browser = browser(gallery());
    browser.mount().await.unwrap();
    browser
        .enter_folder(Path::new("/pics/Vacation"))
        .await
        .unwrap();
    browser
        .enter_folder(Path::new("/pics/Vacation/Day1"))
        .await
        .unwrap();
    assert_eq!(names(browser.entries()), vec!["sunrise.png"]);

    browser.go_back().await.unwrap();

    assert_eq!(browser.current_dir(), Path::new("/pics/Vacation"));
    browser.go_back().await.unwrap();
    assert!(browser.current().is_root());
}

/// Test: go_back at the root changes nothing and reads nothing
#[tokio::test]
async fn test_back_at_root_is_noop() {
    let mut browser = browser(gallery());
    browser.mount().await.unwrap();
    browser.state_mut().selected_index = Some(2);
    let reads = browser.host_fs().reads.get();

    let outcome = browser.go_back().await.unwrap();

    assert_eq!(outcome, NavOutcome::AtRoot);
    assert!(browser.current().is_root());
    assert_eq!(browser.entries().len(), 3);
    assert_eq!(browser.state().selected_index, Some(2));
    assert_eq!(browser.host_fs().reads.get(), reads);
}

/// Test: only folders of the current listing can be entered
#[tokio::test]
async fn test_enter_unlisted_path_is_ignored() {
    let mut browser = browser(gallery());
    browser.mount().await.unwrap();

    let outcome = browser
        .enter_folder(Path::new("/pics/Vacation/Day1"))
        .await
        .unwrap();
    assert_eq!(outcome, NavOutcome::Ignored);

    let outcome = browser.enter_folder(Path::new("/pics/b.jpg")).await.unwrap();
    assert_eq!(outcome, NavOutcome::Ignored);
    assert!(browser.current().is_root());
}

/// Test: refresh picks up the current directory again
#[tokio::test]
async fn test_refresh_relists_current_directory() {
    let mut browser = browser(gallery());
    browser.mount().await.unwrap();
    browser
        .enter_folder(Path::new("/pics/Vacation"))
        .await
        .unwrap();
    browser.state_mut().selected_index = Some(1);

    let outcome = browser.refresh().await.unwrap();

    assert_eq!(outcome, NavOutcome::Listed);
    assert_eq!(browser.current_dir(), Path::new("/pics/Vacation"));
    assert_eq!(browser.state().selected_index, Some(0));
}
