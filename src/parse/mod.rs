//! Markdown反向解析 - 从任意README文本中尽力提取结构化字段
//!
//! 解析是尽力而为的：章节缺失不是错误，对应字段保持None即可，
//! 由调用方按合并策略把结果叠加到已有字段集上。

use regex::Regex;
use std::sync::LazyLock;

use crate::types::FieldPatch;

/// 一级标题行
static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+?)[ \t]*$").unwrap());

/// 二级标题行（用作章节边界）
static SECTION_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##[ \t]").unwrap());

/// Markdown链接（捕获可选的图片前缀，用于跳过徽章图片；
/// 链接文本不允许以"!"开头，避免把 [![badge](...)](...) 的外层当作普通链接）
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[(?:[^\]!][^\]]*)?\]\((https?://[^)\s]+)\)").unwrap());

/// 解析Markdown文档，提取字段的部分更新
///
/// 逐条规则均为首个匹配生效、标题大小写不敏感；任何输入都不会报错。
pub fn parse_markdown(markdown: &str) -> FieldPatch {
    FieldPatch {
        project_name: extract_title(markdown),
        description: extract_section(markdown, "About"),
        features: extract_section(markdown, "Features"),
        installation: extract_section(markdown, "Installation"),
        usage: extract_section(markdown, "Usage"),
        deployment_url: extract_first_link_host(markdown),
        tech_stack: None,
        tech_stack_details: None,
    }
}

/// 项目名：文档中第一个一级标题
fn extract_title(markdown: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(markdown)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

/// 章节正文：指定二级标题之后、下一个二级标题（或文末）之前的文本
fn extract_section(markdown: &str, heading: &str) -> Option<String> {
    let heading_pattern =
        Regex::new(&format!(r"(?mi)^##[ \t]+{}[ \t]*$", regex::escape(heading))).ok()?;
    let heading_match = heading_pattern.find(markdown)?;

    let rest = &markdown[heading_match.end()..];
    let body = match SECTION_BOUNDARY.find(rest) {
        Some(next_heading) => &rest[..next_heading.start()],
        None => rest,
    };

    let body = body.trim();
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

/// 部署地址：文档中第一个非图片Markdown链接的主机名部分
fn extract_first_link_host(markdown: &str) -> Option<String> {
    for caps in LINK_PATTERN.captures_iter(markdown) {
        // 跳过 ![...](...) 形式的徽章图片
        if !caps[1].is_empty() {
            continue;
        }
        let url = &caps[2];
        let without_scheme = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        let host = without_scheme
            .split('/')
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        if !host.is_empty() {
            return Some(host.to_string());
        }
    }
    None
}

// Include tests
#[cfg(test)]
mod tests;
