#[cfg(test)]
mod tests {
    use crate::session::SessionStore;
    use crate::types::FieldSet;
    use tempfile::TempDir;

    fn sample_fields() -> FieldSet {
        FieldSet {
            project_name: "Portfolio".to_string(),
            description: "A personal portfolio site.".to_string(),
            tech_stack: "Next.js, TypeScript".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path(), true);

        store.save(&sample_fields()).unwrap();
        assert!(store.exists());

        let restored = store.load().unwrap();
        assert_eq!(restored, sample_fields());
    }

    #[test]
    fn test_load_without_session_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path(), true);

        assert!(store.load().is_none());
    }

    #[test]
    fn test_disabled_store_is_inert() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path(), false);

        store.save(&sample_fields()).unwrap();
        assert!(!store.exists());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_corrupt_session_file_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path(), true);

        std::fs::write(temp_dir.path().join("session.json"), "{not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_preserves_created_at() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path(), true);

        store.save(&sample_fields()).unwrap();
        let first = std::fs::read_to_string(temp_dir.path().join("session.json")).unwrap();
        let first_state: serde_json::Value = serde_json::from_str(&first).unwrap();

        let mut updated = sample_fields();
        updated.description = "Updated description".to_string();
        store.save(&updated).unwrap();

        let second = std::fs::read_to_string(temp_dir.path().join("session.json")).unwrap();
        let second_state: serde_json::Value = serde_json::from_str(&second).unwrap();

        assert_eq!(first_state["created_at"], second_state["created_at"]);
        assert_eq!(second_state["fields"]["description"], "Updated description");
    }

    #[test]
    fn test_clear_removes_session() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path(), true);

        store.save(&sample_fields()).unwrap();
        store.clear().unwrap();

        assert!(!store.exists());
        // 清除不存在的会话不报错
        store.clear().unwrap();
    }
}
