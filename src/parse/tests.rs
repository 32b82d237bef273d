#[cfg(test)]
mod tests {
    use crate::parse::parse_markdown;
    use crate::render::{RenderOptions, synthesize};
    use crate::types::{FieldSet, MergePolicy};

    #[test]
    fn test_parse_basic_document() {
        let patch = parse_markdown("# Bar\n\n## About\n\nHello world\n\n## Features\n\n- x\n");

        assert_eq!(patch.project_name.as_deref(), Some("Bar"));
        assert_eq!(patch.description.as_deref(), Some("Hello world"));
        assert_eq!(patch.features.as_deref(), Some("- x"));
        assert!(patch.deployment_url.is_none());
        assert!(patch.tech_stack.is_none());
        assert!(patch.tech_stack_details.is_none());
    }

    #[test]
    fn test_parse_empty_document() {
        let patch = parse_markdown("");
        assert!(patch.is_empty());
    }

    #[test]
    fn test_parse_plain_text_without_headings() {
        let patch = parse_markdown("just a paragraph of text\nwith no markdown structure");
        assert!(patch.is_empty());
    }

    #[test]
    fn test_parse_title_ignores_subheadings() {
        let patch = parse_markdown("## Not the title\n\n# Actual Title\n");
        assert_eq!(patch.project_name.as_deref(), Some("Actual Title"));
    }

    #[test]
    fn test_parse_section_headers_case_insensitive() {
        let patch = parse_markdown("# App\n\n## ABOUT\n\nBody text\n\n## features\n\n- a\n- b\n");

        assert_eq!(patch.description.as_deref(), Some("Body text"));
        assert_eq!(patch.features.as_deref(), Some("- a\n- b"));
    }

    #[test]
    fn test_parse_section_bounded_by_next_heading() {
        let markdown = "# App\n\n## About\n\nFirst paragraph.\n\nSecond paragraph.\n\n## Installation\n\nnpm install\n";
        let patch = parse_markdown(markdown);

        assert_eq!(
            patch.description.as_deref(),
            Some("First paragraph.\n\nSecond paragraph.")
        );
        assert_eq!(patch.installation.as_deref(), Some("npm install"));
    }

    #[test]
    fn test_parse_section_runs_to_end_of_document() {
        let patch = parse_markdown("# App\n\n## Usage\n\nrun it\nwith flags");
        assert_eq!(patch.usage.as_deref(), Some("run it\nwith flags"));
    }

    #[test]
    fn test_parse_empty_section_body_is_absent() {
        let patch = parse_markdown("# App\n\n## About\n\n## Features\n\n- x\n");

        assert!(patch.description.is_none());
        assert_eq!(patch.features.as_deref(), Some("- x"));
    }

    #[test]
    fn test_parse_first_link_host() {
        let markdown = "# App\n\nSee [the demo](https://demo.example.com/path) and [docs](https://docs.example.com).\n";
        let patch = parse_markdown(markdown);

        assert_eq!(patch.deployment_url.as_deref(), Some("demo.example.com"));
    }

    #[test]
    fn test_parse_skips_badge_images_when_extracting_link() {
        let markdown = "# App\n\n![Rust](https://img.shields.io/badge/Rust-000000?logo=rust&style=for-the-badge)\n[![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg?style=for-the-badge)](https://opensource.org/licenses/MIT)\n\n## Live Deployment\n\n- **View Here**: [app.example.com](https://app.example.com)\n";
        let patch = parse_markdown(markdown);

        assert_eq!(patch.deployment_url.as_deref(), Some("app.example.com"));
    }

    #[test]
    fn test_parse_relative_links_ignored() {
        let patch = parse_markdown("# App\n\nsee the [LICENSE](LICENSE) file\n");
        assert!(patch.deployment_url.is_none());
    }

    #[test]
    fn test_roundtrip_preserves_about_and_features() {
        let fields = FieldSet {
            project_name: "Portfolio".to_string(),
            description: "A personal portfolio site with smooth animations.".to_string(),
            features: "Responsive design\nDark mode\nContact form".to_string(),
            deployment_url: "portfolio.vercel.app".to_string(),
            ..Default::default()
        };
        let options = RenderOptions::default();
        let first = synthesize(&fields, &options);

        let mut reparsed = FieldSet::default();
        reparsed.apply_patch(parse_markdown(&first), &MergePolicy::overwrite());
        let second = synthesize(&reparsed, &options);

        let section = |doc: &str, header: &str| {
            doc.split(header)
                .nth(1)
                .map(|rest| rest.split("\n## ").next().unwrap_or(rest).trim().to_string())
        };

        assert_eq!(section(&first, "## About"), section(&second, "## About"));
        assert_eq!(section(&first, "## Features"), section(&second, "## Features"));
        assert_eq!(
            section(&first, "## Live Deployment"),
            section(&second, "## Live Deployment")
        );
    }
}
