//! Tests for the Browsing <-> Viewing transitions
//!
//! Pressing an image hands its path to the model, which switches to the
//! viewer; closing the viewer drops back to the grid untouched.

mod common;

use std::path::Path;

use common::{file, folder, FixedPermission, MemoryFs};
use picstash::model::{Mode, Model};
use picstash::{DirectoryBrowser, NavOutcome, Platform};

async fn mounted() -> DirectoryBrowser<MemoryFs, FixedPermission> {
    let mut fs = MemoryFs::new("/pics");
    fs.add("/pics", file("/pics", "cat.png", 30));
    fs.add("/pics", folder("/pics", "Trips", 20));
    fs.add("/pics/Trips", file("/pics/Trips", "hill.jpg", 1));
    let mut browser = DirectoryBrowser::new(fs, FixedPermission::granted(), Platform::Desktop);
    browser.mount().await.unwrap();
    browser
}

/// Test: pressing an image switches to the viewer with that path
#[tokio::test]
async fn test_image_press_opens_viewer() {
    let mut browser = mounted().await;
    let mut model = Model::new(false);
    assert_eq!(model.mode(), Mode::Browsing);

    let outcome = browser
        .press(0, |path| model.on_image_press(path))
        .await
        .unwrap();

    assert_eq!(outcome, NavOutcome::ImagePressed);
    assert_eq!(
        model.mode(),
        Mode::Viewing {
            path: Path::new("/pics/cat.png")
        }
    );
    // The browser stays where it was
    assert!(browser.current().is_root());
}

/// Test: closing the viewer returns to browsing with the grid intact
#[tokio::test]
async fn test_viewer_close_returns_to_grid() {
    let mut browser = mounted().await;
    let mut model = Model::new(false);
    browser
        .press(0, |path| model.on_image_press(path))
        .await
        .unwrap();

    model.on_viewer_close();

    assert_eq!(model.mode(), Mode::Browsing);
    assert!(model.selected_image.is_none());
    assert_eq!(browser.entries().len(), 2);
    assert_eq!(browser.state().selected_index, Some(0));
}

/// Test: pressing a folder navigates and never opens the viewer
#[tokio::test]
async fn test_folder_press_navigates() {
    let mut browser = mounted().await;
    let mut model = Model::new(false);

    let outcome = browser
        .press(1, |path| model.on_image_press(path))
        .await
        .unwrap();

    assert_eq!(outcome, NavOutcome::Listed);
    assert_eq!(model.mode(), Mode::Browsing);
    assert_eq!(browser.current_dir(), Path::new("/pics/Trips"));
}

/// Test: pressing past the end is ignored
#[tokio::test]
async fn test_press_out_of_range() {
    let mut browser = mounted().await;
    let mut model = Model::new(false);

    let outcome = browser
        .press(9, |path| model.on_image_press(path))
        .await
        .unwrap();

    assert_eq!(outcome, NavOutcome::Ignored);
    assert_eq!(model.mode(), Mode::Browsing);
}
