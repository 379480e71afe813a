//! Tests for filesystem media storage.

use gameforge_storage::{FileSystemStorage, MediaStorage};

#[tokio::test]
async fn test_store_writes_file_and_builds_url() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let storage = FileSystemStorage::new(dir.path(), "/media/")?;

    let data = vec![0x89, b'P', b'N', b'G', 1, 2, 3];
    let stored = storage.store(&data, "char").await?;

    assert!(stored.filename.starts_with("char_"));
    assert!(stored.filename.ends_with(".png"));
    assert_eq!(stored.url, format!("/media/{}", stored.filename));
    assert_eq!(stored.path, dir.path().join(&stored.filename));
    assert_eq!(std::fs::read(&stored.path)?, data);

    let retrieved = storage.retrieve(&stored.filename).await?;
    assert_eq!(retrieved, data);
    Ok(())
}

#[tokio::test]
async fn test_store_leaves_no_temp_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let storage = FileSystemStorage::new(dir.path(), "/media/")?;

    storage.store(&[1, 2, 3], "env").await?;

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())?
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_store_rejects_empty_payload() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let storage = FileSystemStorage::new(dir.path(), "/media/")?;

    assert!(storage.store(&[], "char").await.is_err());
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_new_creates_missing_media_root() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let nested = dir.path().join("a").join("media");
    let storage = FileSystemStorage::new(&nested, "https://cdn.example/media/")?;

    assert!(nested.is_dir());
    assert_eq!(storage.url_for("x.png"), "https://cdn.example/media/x.png");
    Ok(())
}

#[tokio::test]
async fn test_retrieve_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let storage = FileSystemStorage::new(dir.path(), "/media/")?;

    assert!(storage.retrieve("char_0.png").await.is_err());
    Ok(())
}
