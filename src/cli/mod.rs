use crate::config::{Config, LLMProvider};
use crate::render::licenses::License;
use crate::render::templates::Template;
use crate::style::{Depth, Tone};
use clap::Parser;
use std::path::PathBuf;

/// ReadmeGen-RS - 由Rust与AI驱动的README生成引擎
#[derive(Parser, Debug)]
#[command(name = "readmegen-rs")]
#[command(
    about = "README generation engine. It turns structured project metadata into a polished Markdown README, resolves technology badges, parses existing documents back into form fields, and can leverage LLMs to fill in or refine content."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 项目路径（用于推断项目名）
    #[arg(short, long, default_value = ".")]
    pub project_path: PathBuf,

    /// 输出文件路径
    #[arg(short, long, default_value = "./README.md")]
    pub output_path: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 项目名称
    #[arg(short, long)]
    pub name: Option<String>,

    /// 项目描述（About章节）
    #[arg(long)]
    pub description: Option<String>,

    /// 技术栈（逗号分隔，用于徽章）
    #[arg(long)]
    pub tech_stack: Option<String>,

    /// 特性列表（每行一条）
    #[arg(long)]
    pub features: Option<String>,

    /// 详细技术栈（每行一条 "Category: Tech Version"）
    #[arg(long)]
    pub tech_stack_details: Option<String>,

    /// 部署地址
    #[arg(long)]
    pub deployment_url: Option<String>,

    /// 安装说明
    #[arg(long)]
    pub installation: Option<String>,

    /// 使用说明
    #[arg(long)]
    pub usage: Option<String>,

    /// README模板 (basic, professional, startup, library)
    #[arg(long)]
    pub template: Option<String>,

    /// 生成语气 (concise, professional, friendly)
    #[arg(long)]
    pub tone: Option<String>,

    /// 生成深度 (minimal, standard, detailed)
    #[arg(long)]
    pub depth: Option<String>,

    /// 许可证 (mit, apache-2.0, gplv3)
    #[arg(long)]
    pub license: Option<String>,

    /// 从已有Markdown文件反向解析字段
    #[arg(long)]
    pub from_markdown: Option<PathBuf>,

    /// 自由文本的改写指令，交给LLM增强字段
    #[arg(long)]
    pub refine: Option<String>,

    /// 用LLM填充空白字段
    #[arg(long)]
    pub ai_fill: bool,

    /// LLM增强结果允许覆盖非空字段
    #[arg(long)]
    pub overwrite_non_empty: bool,

    /// 跳过LLM增强阶段
    #[arg(long)]
    pub skip_enhance: bool,

    /// 输出到标准输出而不是文件
    #[arg(long)]
    pub stdout: bool,

    /// 忽略已保存的会话，从空字段开始
    #[arg(long)]
    pub fresh: bool,

    /// 不在两次运行之间保留字段集
    #[arg(long)]
    pub no_session: bool,

    /// 是否禁用缓存
    #[arg(long)]
    pub no_cache: bool,

    /// 高能效模型，优先用于常规生成任务
    #[arg(long)]
    pub model_efficient: Option<String>,

    /// 高质量模型，用于复杂任务，以及作为efficient失效情况下的兜底
    #[arg(long)]
    pub model_powerful: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// LLM Provider (openai, mistral, openrouter, anthropic, deepseek)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
            })
        } else {
            // 尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("readmegen.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}",
                        default_config_path
                    )
                })
            } else {
                Config::default()
            }
        };

        config.project_path = self.project_path.clone();
        config.output_path = self.output_path;
        config.internal_path = self.project_path.join(".readmegen");

        // 项目名称处理：CLI参数优先级最高，没有指定时get_project_name()会自动推断
        if let Some(name) = self.name {
            config.project_name = Some(name);
        }

        // 字段覆盖
        if let Some(description) = self.description {
            config.fields.description = description;
        }
        if let Some(tech_stack) = self.tech_stack {
            config.fields.tech_stack = tech_stack;
        }
        if let Some(features) = self.features {
            config.fields.features = features;
        }
        if let Some(tech_stack_details) = self.tech_stack_details {
            config.fields.tech_stack_details = tech_stack_details;
        }
        if let Some(deployment_url) = self.deployment_url {
            config.fields.deployment_url = deployment_url;
        }
        if let Some(installation) = self.installation {
            config.fields.installation = installation;
        }
        if let Some(usage) = self.usage {
            config.fields.usage = usage;
        }

        // 模板与风格
        if let Some(template_str) = self.template {
            if let Ok(template) = template_str.parse::<Template>() {
                config.template = template;
            } else {
                eprintln!("⚠️ 警告: 未知的模板: {}，使用默认模板", template_str);
            }
        }
        if let Some(tone_str) = self.tone {
            if let Ok(tone) = tone_str.parse::<Tone>() {
                config.tone = tone;
            } else {
                eprintln!("⚠️ 警告: 未知的语气: {}，使用默认语气", tone_str);
            }
        }
        if let Some(depth_str) = self.depth {
            if let Ok(depth) = depth_str.parse::<Depth>() {
                config.depth = depth;
            } else {
                eprintln!("⚠️ 警告: 未知的深度: {}，使用默认深度", depth_str);
            }
        }
        if let Some(license_str) = self.license {
            if let Ok(license) = license_str.parse::<License>() {
                config.license = Some(license);
            } else {
                eprintln!("⚠️ 警告: 未知的许可证: {}，不渲染License章节", license_str);
            }
        }

        // 反向解析与LLM增强
        if let Some(from_markdown) = self.from_markdown {
            config.import_markdown = Some(from_markdown);
        }
        if let Some(refine) = self.refine {
            config.refine_instruction = Some(refine);
        }
        if self.ai_fill {
            config.ai_fill = true;
        }
        if self.overwrite_non_empty {
            config.merge.overwrite_non_empty = true;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model_efficient) = self.model_efficient {
            config.llm.model_efficient = model_efficient;
        }
        if let Some(model_powerful) = self.model_powerful {
            config.llm.model_powerful = model_powerful;
        } else {
            config.llm.model_powerful = config.llm.model_efficient.to_string();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 缓存与会话配置
        if self.no_cache {
            config.cache.enabled = false;
        }
        if self.no_session {
            config.session.enabled = false;
        }

        // 其他配置
        config.emit_stdout = self.stdout;
        config.skip_enhance = self.skip_enhance;
        config.fresh = self.fresh;
        config.verbose = self.verbose;

        config
    }
}
