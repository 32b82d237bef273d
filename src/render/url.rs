//! 部署地址规范化

use regex::Regex;
use std::sync::LazyLock;

/// 宽松的域名模式：要求至少一个点和2位以上字母的顶级域，可带路径
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9.\-]*\.[A-Za-z]{2,}(/[^\s]*)?$").unwrap()
});

/// 规范化部署地址
///
/// 去掉开头的http(s)://与结尾的/，再做宽松的域名校验；
/// 校验失败返回空字符串（调用方据此省略Deployment章节，而不是报错）。
pub fn normalize_deployment_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let host = without_scheme.trim_end_matches('/');

    if host.is_empty() || !DOMAIN_PATTERN.is_match(host) {
        return String::new();
    }

    host.to_string()
}
