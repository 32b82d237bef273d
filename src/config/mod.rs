use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::render::licenses::License;
use crate::render::templates::Template;
use crate::style::{Depth, Tone};
use crate::types::{FieldPatch, FieldSet};

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "mistral")]
    Mistral,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Mistral => write!(f, "mistral"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "mistral" => Ok(LLMProvider::Mistral),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "gemini" => Ok(LLMProvider::Gemini),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 项目名称
    pub project_name: Option<String>,

    /// 项目路径（用于推断项目名）
    pub project_path: PathBuf,

    /// 输出文件路径
    pub output_path: PathBuf,

    /// 内部工作目录路径 (.readmegen)
    pub internal_path: PathBuf,

    /// README模板
    pub template: Template,

    /// 生成语气
    pub tone: Tone,

    /// 生成深度
    pub depth: Depth,

    /// 许可证；为None时不渲染License章节
    pub license: Option<License>,

    /// 初始字段（可在配置文件中直接填写）
    pub fields: FieldSet,

    /// 待导入的Markdown文件（反向解析后合并进字段集）
    pub import_markdown: Option<PathBuf>,

    /// 自由文本的改写指令，触发LLM增强
    pub refine_instruction: Option<String>,

    /// 是否用LLM填充空白字段
    pub ai_fill: bool,

    /// 合并策略配置
    pub merge: MergeConfig,

    /// 输出到标准输出而不是文件
    pub emit_stdout: bool,

    /// 跳过LLM增强阶段
    pub skip_enhance: bool,

    /// 忽略已保存的会话，从空字段开始
    pub fresh: bool,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 缓存配置
    pub cache: CacheConfig,

    /// 会话持久化配置
    pub session: SessionConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// 合并策略配置
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
#[serde(default)]
pub struct MergeConfig {
    /// LLM增强结果是否允许覆盖非空字段（默认只填充空白字段）
    pub overwrite_non_empty: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 高能效模型，优先用于常规生成任务
    pub model_efficient: String,

    /// 高质量模型，用于复杂任务，以及作为efficient失效情况下的兜底
    pub model_powerful: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 重试次数
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

/// 缓存配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// 是否启用缓存
    pub enabled: bool,

    /// 缓存目录
    pub cache_dir: PathBuf,

    /// 缓存过期时间（小时）
    pub expire_hours: u64,
}

/// 会话持久化配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// 是否在两次运行之间保留字段集
    pub enabled: bool,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 配置中的字段作为一个部分更新
    ///
    /// 只携带非空字段，CLI/配置文件给出的值在工作流中覆盖会话内容。
    pub fn field_patch(&self) -> FieldPatch {
        fn non_empty(value: &str) -> Option<String> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }

        FieldPatch {
            project_name: self
                .project_name
                .as_deref()
                .and_then(non_empty)
                .or_else(|| non_empty(&self.fields.project_name)),
            description: non_empty(&self.fields.description),
            tech_stack: non_empty(&self.fields.tech_stack),
            features: non_empty(&self.fields.features),
            tech_stack_details: non_empty(&self.fields.tech_stack_details),
            deployment_url: non_empty(&self.fields.deployment_url),
            installation: non_empty(&self.fields.installation),
            usage: non_empty(&self.fields.usage),
        }
    }

    /// 获取项目名称，优先使用配置的project_name，否则自动推断
    pub fn get_project_name(&self) -> String {
        if let Some(ref name) = self.project_name
            && !name.trim().is_empty()
        {
            return name.clone();
        }

        self.infer_project_name()
    }

    /// 自动推断项目名称
    fn infer_project_name(&self) -> String {
        // 尝试从项目配置文件中提取项目名称
        if let Some(name) = self.extract_from_cargo_toml() {
            return name;
        }
        if let Some(name) = self.extract_from_package_json() {
            return name;
        }

        // 从项目路径推断
        self.project_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    /// 从 Cargo.toml 提取项目名称（Rust项目）
    pub fn extract_from_cargo_toml(&self) -> Option<String> {
        let cargo_path = self.project_path.join("Cargo.toml");
        if !cargo_path.exists() {
            return None;
        }

        let content = std::fs::read_to_string(&cargo_path).ok()?;
        let mut in_package_section = false;
        for line in content.lines() {
            let line = line.trim();
            if line == "[package]" {
                in_package_section = true;
                continue;
            }
            if line.starts_with('[') && in_package_section {
                break;
            }
            if in_package_section
                && line.starts_with("name")
                && line.contains('=')
                && let Some(name_part) = line.split('=').nth(1)
            {
                let name = name_part.trim().trim_matches('"').trim_matches('\'');
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
        None
    }

    /// 从 package.json 提取项目名称（Node.js项目）
    pub fn extract_from_package_json(&self) -> Option<String> {
        let package_path = self.project_path.join("package.json");
        if !package_path.exists() {
            return None;
        }

        let content = std::fs::read_to_string(&package_path).ok()?;
        for line in content.lines() {
            let line = line.trim();
            if line.starts_with("\"name\"")
                && line.contains(':')
                && let Some(name_part) = line.split(':').nth(1)
            {
                let name = name_part
                    .trim()
                    .trim_matches(',')
                    .trim_matches('"')
                    .trim_matches('\'');
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
        None
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: None,
            project_path: PathBuf::from("."),
            output_path: PathBuf::from("./README.md"),
            internal_path: PathBuf::from("./.readmegen"),
            template: Template::default(),
            tone: Tone::default(),
            depth: Depth::default(),
            license: None,
            fields: FieldSet::default(),
            import_markdown: None,
            refine_instruction: None,
            ai_fill: false,
            merge: MergeConfig::default(),
            emit_stdout: false,
            skip_enhance: false,
            fresh: false,
            llm: LLMConfig::default(),
            cache: CacheConfig::default(),
            session: SessionConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("READMEGEN_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api-inference.modelscope.cn/v1"),
            model_efficient: String::from("Qwen/Qwen3-Next-80B-A3B-Instruct"),
            model_powerful: String::from("Qwen/Qwen3-235B-A22B-Instruct-2507"),
            max_tokens: 4096,
            temperature: 0.7,
            retry_attempts: 3,
            retry_delay_ms: 2000,
            timeout_seconds: 120,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: PathBuf::from(".readmegen/cache"),
            expire_hours: 720,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
