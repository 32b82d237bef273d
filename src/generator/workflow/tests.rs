#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::generator::workflow::launch;
    use crate::render::licenses::License;
    use tempfile::TempDir;

    /// LLM不可用环境下的基础配置
    fn offline_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.project_path = temp_dir.path().to_path_buf();
        config.internal_path = temp_dir.path().join(".readmegen");
        config.output_path = temp_dir.path().join("README.md");
        config.cache.cache_dir = temp_dir.path().join(".readmegen/cache");
        config.skip_enhance = true;
        config
    }

    #[tokio::test]
    async fn test_launch_writes_readme() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = offline_config(&temp_dir);
        config.project_name = Some("Test Project".to_string());
        config.fields.description = "An end-to-end test project.".to_string();

        launch(&config).await.unwrap();

        let document = std::fs::read_to_string(&config.output_path).unwrap();
        assert!(document.starts_with("# Test Project\n"));
        assert!(document.contains("## About\n\nAn end-to-end test project."));
    }

    #[tokio::test]
    async fn test_launch_persists_session() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = offline_config(&temp_dir);
        config.fields.description = "Session round one.".to_string();

        launch(&config).await.unwrap();
        assert!(temp_dir.path().join(".readmegen/session.json").exists());

        // 第二次运行不再给字段，会话内容应被恢复
        let mut second = offline_config(&temp_dir);
        second.output_path = temp_dir.path().join("README2.md");
        launch(&second).await.unwrap();

        let document = std::fs::read_to_string(&second.output_path).unwrap();
        assert!(document.contains("Session round one."));
    }

    #[tokio::test]
    async fn test_launch_fresh_ignores_session() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = offline_config(&temp_dir);
        config.fields.description = "Stale session text.".to_string();
        launch(&config).await.unwrap();

        let mut second = offline_config(&temp_dir);
        second.fresh = true;
        second.output_path = temp_dir.path().join("README2.md");
        launch(&second).await.unwrap();

        let document = std::fs::read_to_string(&second.output_path).unwrap();
        assert!(!document.contains("Stale session text."));
    }

    #[tokio::test]
    async fn test_launch_imports_markdown() {
        let temp_dir = TempDir::new().unwrap();
        let import_path = temp_dir.path().join("OLD_README.md");
        std::fs::write(
            &import_path,
            "# Imported App\n\n## About\n\nImported description.\n\n## Features\n\n- imported feature\n",
        )
        .unwrap();

        let mut config = offline_config(&temp_dir);
        config.import_markdown = Some(import_path);
        launch(&config).await.unwrap();

        let document = std::fs::read_to_string(&config.output_path).unwrap();
        assert!(document.starts_with("# Imported App\n"));
        assert!(document.contains("Imported description."));
        assert!(document.contains("- imported feature"));
    }

    #[tokio::test]
    async fn test_launch_missing_import_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = offline_config(&temp_dir);
        config.import_markdown = Some(temp_dir.path().join("does-not-exist.md"));

        assert!(launch(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_launch_applies_template_defaults_and_license() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = offline_config(&temp_dir);
        config.license = Some(License::Apache2);

        launch(&config).await.unwrap();

        let document = std::fs::read_to_string(&config.output_path).unwrap();
        // Professional模板的默认安装说明
        assert!(document.contains("## Installation"));
        assert!(document.contains("git clone https://github.com/username/project.git"));
        assert!(document.contains("## License\n\nThis project is licensed under the Apache 2.0 License"));
    }

    #[tokio::test]
    async fn test_launch_infers_project_name_from_cargo_toml() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("Cargo.toml"),
            "[package]\nname = \"inferred-crate\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        let config = offline_config(&temp_dir);
        launch(&config).await.unwrap();

        let document = std::fs::read_to_string(&config.output_path).unwrap();
        assert!(document.starts_with("# inferred-crate\n"));
    }
}
