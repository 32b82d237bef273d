//! Markdown合成器 - 将字段集组装为完整的README文档

pub mod badges;
pub mod licenses;
pub mod templates;
pub mod url;

pub use badges::resolve_badges;
pub use licenses::License;
pub use templates::Template;
pub use url::normalize_deployment_url;

use crate::types::FieldSet;

/// 渲染选项
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// 选定的许可证；为None时省略License章节与许可证徽章
    pub license: Option<License>,
}

/// 将字段集合成为单个Markdown文档
///
/// 纯函数：确定性、无I/O、对任意输入都不会失败。空字段降级为
/// 省略对应章节或占位文本，Title与About章节始终渲染。
pub fn synthesize(fields: &FieldSet, options: &RenderOptions) -> String {
    let name = display_name(fields);
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("# {}", name));

    if let Some(block) = badge_section(fields, options) {
        sections.push(block);
    }

    sections.push(format!("## About\n\n{}", about_body(fields, &name)));

    if let Some(block) = list_section("Features", &fields.features, false) {
        sections.push(block);
    }

    if let Some(block) = list_section("Technology Stack", &fields.tech_stack_details, true) {
        sections.push(block);
    }

    if let Some(block) = deployment_section(&fields.deployment_url) {
        sections.push(block);
    }

    if !fields.installation.trim().is_empty() {
        sections.push(format!("## Installation\n\n{}", fields.installation.trim()));
    }

    if !fields.usage.trim().is_empty() {
        sections.push(format!("## Usage\n\n{}", fields.usage.trim()));
    }

    if let Some(license) = options.license {
        sections.push(format!("## License\n\n{}", license.text()));
    }

    let mut document = sections.join("\n\n");
    document.push('\n');
    document
}

/// 标题与占位文本使用的项目名
fn display_name(fields: &FieldSet) -> String {
    let name = fields.project_name.trim();
    if name.is_empty() {
        "Project Name".to_string()
    } else {
        name.to_string()
    }
}

/// About章节正文；描述为空时根据项目名构造占位句
fn about_body(fields: &FieldSet, name: &str) -> String {
    let description = fields.description.trim();
    if description.is_empty() {
        format!(
            "**{}** is a project that has not been described yet. Fill in the description field to replace this placeholder.",
            name
        )
    } else {
        description.to_string()
    }
}

/// 技术徽章块（含许可证徽章）；没有任何徽章时整块省略
fn badge_section(fields: &FieldSet, options: &RenderOptions) -> Option<String> {
    let tech_badges = resolve_badges(&fields.tech_stack);
    let license_badge = options.license.map(|license| license.badge());

    match (tech_badges.is_empty(), license_badge) {
        (false, Some(badge)) => Some(format!("{}\n{}", tech_badges, badge)),
        (false, None) => Some(tech_badges),
        (true, Some(badge)) => Some(badge.to_string()),
        (true, None) => None,
    }
}

/// 列表型章节：每个非空行渲染为一个列表项
///
/// bold_category为true时按 "Category: Tech Version" 格式加粗类目；
/// 已带 "-"/"*" 前缀的行先去掉前缀，保证重复合成的结果稳定。
fn list_section(title: &str, body: &str, bold_category: bool) -> Option<String> {
    let items: Vec<String> = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let item = line.trim_start_matches("- ").trim_start_matches("* ").trim();
            if bold_category {
                match item.split_once(':') {
                    Some((category, rest)) => {
                        format!("- **{}**: {}", category.trim(), rest.trim())
                    }
                    None => format!("- **{}**", item),
                }
            } else {
                format!("- {}", item)
            }
        })
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(format!("## {}\n\n{}", title, items.join("\n")))
    }
}

/// Live Deployment章节；地址未通过规范化校验时整节省略
fn deployment_section(deployment_url: &str) -> Option<String> {
    let host = normalize_deployment_url(deployment_url);
    if host.is_empty() {
        return None;
    }
    Some(format!(
        "## Live Deployment\n\n- **View Here**: [{}](https://{})",
        host, host
    ))
}

// Include tests
#[cfg(test)]
mod tests;
