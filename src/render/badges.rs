//! 技术徽章解析 - 将自由文本的技术栈映射为shields.io徽章

use std::collections::HashMap;
use std::sync::LazyLock;

/// 规范技术名 -> 徽章Markdown
///
/// 全库唯一的徽章表，徽章统一采用for-the-badge样式。
const BADGES: &[(&str, &str)] = &[
    (
        "next.js",
        "![Next.js](https://img.shields.io/badge/Next.js-000000?logo=next.js&logoColor=white&style=for-the-badge)",
    ),
    (
        "react",
        "![React](https://img.shields.io/badge/React-61DAFB?logo=react&logoColor=black&style=for-the-badge)",
    ),
    (
        "typescript",
        "![TypeScript](https://img.shields.io/badge/TypeScript-3178C6?logo=typescript&logoColor=white&style=for-the-badge)",
    ),
    (
        "javascript",
        "![JavaScript](https://img.shields.io/badge/JavaScript-F7DF1E?logo=javascript&logoColor=black&style=for-the-badge)",
    ),
    (
        "tailwind",
        "![Tailwind CSS](https://img.shields.io/badge/TailwindCSS-06B6D4?logo=tailwindcss&logoColor=white&style=for-the-badge)",
    ),
    (
        "node.js",
        "![Node.js](https://img.shields.io/badge/Node.js-339933?logo=nodedotjs&logoColor=white&style=for-the-badge)",
    ),
    (
        "rust",
        "![Rust](https://img.shields.io/badge/Rust-000000?logo=rust&logoColor=white&style=for-the-badge)",
    ),
    (
        "python",
        "![Python](https://img.shields.io/badge/Python-3776AB?logo=python&logoColor=white&style=for-the-badge)",
    ),
    (
        "go",
        "![Go](https://img.shields.io/badge/Go-00ADD8?logo=go&logoColor=white&style=for-the-badge)",
    ),
    (
        "java",
        "![Java](https://img.shields.io/badge/Java-ED8B00?logo=openjdk&logoColor=white&style=for-the-badge)",
    ),
    (
        "vue.js",
        "![Vue.js](https://img.shields.io/badge/Vue.js-4FC08D?logo=vuedotjs&logoColor=white&style=for-the-badge)",
    ),
    (
        "svelte",
        "![Svelte](https://img.shields.io/badge/Svelte-FF3E00?logo=svelte&logoColor=white&style=for-the-badge)",
    ),
    (
        "angular",
        "![Angular](https://img.shields.io/badge/Angular-DD0031?logo=angular&logoColor=white&style=for-the-badge)",
    ),
    (
        "express",
        "![Express](https://img.shields.io/badge/Express-000000?logo=express&logoColor=white&style=for-the-badge)",
    ),
    (
        "django",
        "![Django](https://img.shields.io/badge/Django-092E20?logo=django&logoColor=white&style=for-the-badge)",
    ),
    (
        "flask",
        "![Flask](https://img.shields.io/badge/Flask-000000?logo=flask&logoColor=white&style=for-the-badge)",
    ),
    (
        "docker",
        "![Docker](https://img.shields.io/badge/Docker-2496ED?logo=docker&logoColor=white&style=for-the-badge)",
    ),
    (
        "kubernetes",
        "![Kubernetes](https://img.shields.io/badge/Kubernetes-326CE5?logo=kubernetes&logoColor=white&style=for-the-badge)",
    ),
    (
        "postgresql",
        "![PostgreSQL](https://img.shields.io/badge/PostgreSQL-4169E1?logo=postgresql&logoColor=white&style=for-the-badge)",
    ),
    (
        "mysql",
        "![MySQL](https://img.shields.io/badge/MySQL-4479A1?logo=mysql&logoColor=white&style=for-the-badge)",
    ),
    (
        "mongodb",
        "![MongoDB](https://img.shields.io/badge/MongoDB-47A248?logo=mongodb&logoColor=white&style=for-the-badge)",
    ),
    (
        "redis",
        "![Redis](https://img.shields.io/badge/Redis-DC382D?logo=redis&logoColor=white&style=for-the-badge)",
    ),
    (
        "graphql",
        "![GraphQL](https://img.shields.io/badge/GraphQL-E10098?logo=graphql&logoColor=white&style=for-the-badge)",
    ),
    (
        "firebase",
        "![Firebase](https://img.shields.io/badge/Firebase-FFCA28?logo=firebase&logoColor=black&style=for-the-badge)",
    ),
    (
        "supabase",
        "![Supabase](https://img.shields.io/badge/Supabase-3FCF8E?logo=supabase&logoColor=white&style=for-the-badge)",
    ),
    (
        "vercel",
        "![Vercel](https://img.shields.io/badge/Vercel-000000?logo=vercel&logoColor=white&style=for-the-badge)",
    ),
    (
        "netlify",
        "![Netlify](https://img.shields.io/badge/Netlify-00C7B7?logo=netlify&logoColor=white&style=for-the-badge)",
    ),
    (
        "aws",
        "![AWS](https://img.shields.io/badge/AWS-232F3E?logo=amazonwebservices&logoColor=white&style=for-the-badge)",
    ),
    (
        "git",
        "![Git](https://img.shields.io/badge/Git-F05032?logo=git&logoColor=white&style=for-the-badge)",
    ),
    (
        "github",
        "![GitHub](https://img.shields.io/badge/GitHub-181717?logo=github&logoColor=white&style=for-the-badge)",
    ),
    (
        "html",
        "![HTML5](https://img.shields.io/badge/HTML5-E34F26?logo=html5&logoColor=white&style=for-the-badge)",
    ),
    (
        "css",
        "![CSS3](https://img.shields.io/badge/CSS3-1572B6?logo=css3&logoColor=white&style=for-the-badge)",
    ),
    (
        "sass",
        "![Sass](https://img.shields.io/badge/Sass-CC6699?logo=sass&logoColor=white&style=for-the-badge)",
    ),
    (
        "framer",
        "![Framer Motion](https://img.shields.io/badge/Framer%20Motion-0055FF?logo=framer&logoColor=white&style=for-the-badge)",
    ),
    (
        "prisma",
        "![Prisma](https://img.shields.io/badge/Prisma-2D3748?logo=prisma&logoColor=white&style=for-the-badge)",
    ),
    (
        "gemini",
        "![Google AI](https://img.shields.io/badge/Google%20AI-4285F4?logo=google&logoColor=white&style=for-the-badge)",
    ),
];

/// 别名 -> 规范技术名
const SYNONYMS: &[(&str, &str)] = &[
    ("next", "next.js"),
    ("nextjs", "next.js"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("ts", "typescript"),
    ("js", "javascript"),
    ("tailwindcss", "tailwind"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("rs", "rust"),
    ("py", "python"),
    ("golang", "go"),
    ("vue", "vue.js"),
    ("vuejs", "vue.js"),
    ("express.js", "express"),
    ("expressjs", "express"),
    ("k8s", "kubernetes"),
    ("postgres", "postgresql"),
    ("pg", "postgresql"),
    ("mongo", "mongodb"),
    ("html5", "html"),
    ("css3", "css"),
    ("scss", "sass"),
    ("framer-motion", "framer"),
    ("framermotion", "framer"),
    ("motion", "framer"),
    ("google-ai", "gemini"),
    ("googleai", "gemini"),
];

static BADGE_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| BADGES.iter().copied().collect());

static SYNONYM_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SYNONYMS.iter().copied().collect());

/// 将自由文本的技术列表解析为徽章Markdown（按行拼接）
///
/// 输入以逗号和/或空白分隔，大小写不敏感；未收录的技术静默跳过，
/// 同一规范技术只输出一次（按首次出现顺序）。无匹配时返回空字符串。
pub fn resolve_badges(tech_stack: &str) -> String {
    let lowered = tech_stack.to_lowercase();
    let mut seen: Vec<&str> = Vec::new();
    let mut markup: Vec<&str> = Vec::new();

    for token in lowered.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let canonical = SYNONYM_TABLE.get(token).copied().unwrap_or(token);
        if let Some(badge) = BADGE_TABLE.get(canonical)
            && !seen.contains(&canonical)
        {
            seen.push(canonical);
            markup.push(badge);
        }
    }

    markup.join("\n")
}

/// 规范技术名是否收录在徽章表中
pub fn is_known_technology(name: &str) -> bool {
    let lowered = name.to_lowercase();
    let canonical = SYNONYM_TABLE
        .get(lowered.as_str())
        .copied()
        .unwrap_or(lowered.as_str());
    BADGE_TABLE.contains_key(canonical)
}
