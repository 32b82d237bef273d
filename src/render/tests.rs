#[cfg(test)]
mod tests {
    use crate::render::{
        License, RenderOptions, normalize_deployment_url, resolve_badges, synthesize,
    };
    use crate::render::badges::is_known_technology;
    use crate::render::templates::Template;
    use crate::types::FieldSet;

    fn fields_with(f: impl FnOnce(&mut FieldSet)) -> FieldSet {
        let mut fields = FieldSet::default();
        f(&mut fields);
        fields
    }

    #[test]
    fn test_resolve_badges_dedup_case_insensitive() {
        let output = resolve_badges("React, react, REACT");

        assert_eq!(output.matches("img.shields.io").count(), 1);
        assert!(output.contains("![React]"));
    }

    #[test]
    fn test_resolve_badges_empty_input() {
        assert_eq!(resolve_badges(""), "");
        assert_eq!(resolve_badges("   \t \n "), "");
        assert_eq!(resolve_badges(", , ,"), "");
    }

    #[test]
    fn test_resolve_badges_synonyms() {
        assert_eq!(resolve_badges("ts"), resolve_badges("TypeScript"));
        assert_eq!(resolve_badges("k8s"), resolve_badges("kubernetes"));
        assert_eq!(resolve_badges("next"), resolve_badges("nextjs"));
        assert_eq!(resolve_badges("Next.js"), resolve_badges("next"));
    }

    #[test]
    fn test_resolve_badges_preserves_first_occurrence_order() {
        let output = resolve_badges("Vercel, TypeScript, vercel");
        let vercel_pos = output.find("![Vercel]").unwrap();
        let ts_pos = output.find("![TypeScript]").unwrap();

        assert!(vercel_pos < ts_pos);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_resolve_badges_unknown_tokens_dropped() {
        let output = resolve_badges("React, SomeObscureFramework, Rust");

        assert!(output.contains("![React]"));
        assert!(output.contains("![Rust]"));
        assert!(!output.to_lowercase().contains("obscure"));
    }

    #[test]
    fn test_is_known_technology() {
        assert!(is_known_technology("rust"));
        assert!(is_known_technology("TS"));
        assert!(!is_known_technology("cobol"));
    }

    #[test]
    fn test_normalize_deployment_url() {
        assert_eq!(normalize_deployment_url("https://example.com/"), "example.com");
        assert_eq!(normalize_deployment_url("http://example.com"), "example.com");
        assert_eq!(
            normalize_deployment_url("resumaker-six.vercel.app/"),
            "resumaker-six.vercel.app"
        );
        assert_eq!(normalize_deployment_url("not a url"), "");
        assert_eq!(normalize_deployment_url(""), "");
        assert_eq!(normalize_deployment_url("localhost"), "");
    }

    #[test]
    fn test_synthesize_minimal_fields() {
        let fields = fields_with(|f| f.project_name = "Foo".to_string());
        let document = synthesize(&fields, &RenderOptions::default());

        assert!(document.starts_with("# Foo\n"));
        assert!(document.contains("## About"));
        // About正文必须包含项目名的占位句
        let about = document.split("## About").nth(1).unwrap();
        assert!(about.contains("Foo"));
        assert!(!document.contains("## Features"));
        assert!(!document.contains("## Technology Stack"));
        assert!(!document.contains("## Live Deployment"));
        assert!(!document.contains("## License"));
    }

    #[test]
    fn test_synthesize_empty_fieldset_uses_placeholders() {
        let document = synthesize(&FieldSet::default(), &RenderOptions::default());

        assert!(document.starts_with("# Project Name\n"));
        assert!(document.contains("## About"));
    }

    #[test]
    fn test_synthesize_features_bullets() {
        let fields = fields_with(|f| {
            f.project_name = "Portfolio".to_string();
            f.features = "Responsive design\n\nSmooth page transitions\n- Dark mode".to_string();
        });
        let document = synthesize(&fields, &RenderOptions::default());

        assert!(document.contains("## Features\n\n- Responsive design\n- Smooth page transitions\n- Dark mode"));
    }

    #[test]
    fn test_synthesize_tech_stack_details_bolds_category() {
        let fields = fields_with(|f| {
            f.tech_stack_details = "Framework: Next.js 14\nLanguage: TypeScript 5.3".to_string();
        });
        let document = synthesize(&fields, &RenderOptions::default());

        assert!(document.contains("## Technology Stack"));
        assert!(document.contains("- **Framework**: Next.js 14"));
        assert!(document.contains("- **Language**: TypeScript 5.3"));
    }

    #[test]
    fn test_synthesize_deployment_section() {
        let fields = fields_with(|f| {
            f.deployment_url = "https://portfolio.vercel.app/".to_string();
        });
        let document = synthesize(&fields, &RenderOptions::default());

        assert!(document.contains(
            "## Live Deployment\n\n- **View Here**: [portfolio.vercel.app](https://portfolio.vercel.app)"
        ));
    }

    #[test]
    fn test_synthesize_invalid_deployment_url_omits_section() {
        let fields = fields_with(|f| {
            f.deployment_url = "not a url".to_string();
        });
        let document = synthesize(&fields, &RenderOptions::default());

        assert!(!document.contains("## Live Deployment"));
    }

    #[test]
    fn test_synthesize_badges_and_license_block() {
        let fields = fields_with(|f| {
            f.project_name = "ResuMaker".to_string();
            f.tech_stack = "Next.js, TypeScript, Tailwind CSS, Vercel".to_string();
        });
        let options = RenderOptions {
            license: Some(License::Mit),
        };
        let document = synthesize(&fields, &options);

        assert!(document.contains("![Next.js]"));
        assert!(document.contains("![TypeScript]"));
        assert!(document.contains("![Tailwind CSS]"));
        assert!(document.contains("![Vercel]"));
        assert!(document.contains("License-MIT"));
        assert!(document.contains("## License\n\nThis project is licensed under the MIT License"));
        // 徽章块位于标题与About之间
        let title_pos = document.find("# ResuMaker").unwrap();
        let badge_pos = document.find("![Next.js]").unwrap();
        let about_pos = document.find("## About").unwrap();
        assert!(title_pos < badge_pos && badge_pos < about_pos);
    }

    #[test]
    fn test_synthesize_license_badge_without_tech_stack() {
        let options = RenderOptions {
            license: Some(License::Gplv3),
        };
        let document = synthesize(&FieldSet::default(), &options);

        assert!(document.contains("License-GPLv3"));
        assert!(document.contains("## License"));
    }

    #[test]
    fn test_synthesize_installation_usage_sections() {
        let mut fields = FieldSet {
            project_name: "my-lib".to_string(),
            ..Default::default()
        };
        Template::Library.prefill(&mut fields);
        let document = synthesize(&fields, &RenderOptions::default());

        assert!(document.contains("## Installation\n\n```bash\nnpm install @scope/package-name"));
        assert!(document.contains("## Usage\n\n```typescript"));
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let fields = fields_with(|f| {
            f.project_name = "Foo".to_string();
            f.tech_stack = "rust, docker".to_string();
            f.features = "fast\nsafe".to_string();
        });
        let options = RenderOptions::default();

        assert_eq!(synthesize(&fields, &options), synthesize(&fields, &options));
    }

    #[test]
    fn test_template_parsing_and_defaults() {
        assert_eq!("basic".parse::<Template>().unwrap(), Template::Basic);
        assert_eq!("LIBRARY".parse::<Template>().unwrap(), Template::Library);
        assert!("fancy".parse::<Template>().is_err());

        assert!(Template::Startup.default_license().is_none());
        assert_eq!(Template::Basic.default_license(), Some(License::Mit));
        assert!(Template::Professional.sections().contains(&"Contributing"));
    }

    #[test]
    fn test_license_parsing_and_display() {
        assert_eq!("mit".parse::<License>().unwrap(), License::Mit);
        assert_eq!("Apache-2.0".parse::<License>().unwrap(), License::Apache2);
        assert_eq!("gpl".parse::<License>().unwrap(), License::Gplv3);
        assert!("wtfpl".parse::<License>().is_err());

        assert_eq!(License::Mit.to_string(), "mit");
        assert_eq!(License::Apache2.display_name(), "Apache 2.0");
    }
}
