#[cfg(test)]
mod tests {
    use gallery_manifest::{ManifestError, load_manifest};
    use std::io::Write;

    #[tokio::test]
    async fn test_load_manifest_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "row1col1": "a.jpg", "row1col2": {{ "src": "b.jpg" }} }}"#
        )
        .unwrap();

        let manifest = load_manifest(file.path()).await.unwrap();

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.image_source(1, 1), "/images/a.jpg");
        assert_eq!(manifest.image_source(1, 2), "/images/b.jpg");
        assert!(manifest.is_object_entry(1, 2));
    }

    #[tokio::test]
    async fn test_load_malformed_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "row1col1 = a.jpg").unwrap();

        let result = load_manifest(file.path()).await;
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[tokio::test]
    async fn test_error_messages() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manifest(dir.path().join("data.json"))
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to read manifest"));
    }
}
