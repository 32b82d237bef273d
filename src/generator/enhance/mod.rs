//! LLM字段增强 - 用文本补全服务填充或改写README字段
//!
//! 两种触发方式：ai_fill（为空白字段生成内容）与refine_instruction
//! （按用户的自由文本指令改写）。增强结果是一个FieldPatch，按配置的
//! 合并策略叠加到字段集上；调用失败时字段集保持原值。

use anyhow::{Context, Result};

use crate::generator::context::GeneratorContext;
use crate::types::{FieldPatch, FieldSet, MergePolicy};

/// 缓存类目
const CACHE_CATEGORY: &str = "enhance";

/// 执行字段增强，把LLM产出的补丁合并进字段集
pub async fn execute(context: &GeneratorContext, fields: &mut FieldSet) -> Result<()> {
    let config = &context.config;

    println!("✨ 正在生成README内容...");

    let system_prompt = build_system_prompt(context);
    let user_prompt = build_user_prompt(fields, config.refine_instruction.as_deref())?;
    let cache_key = format!("{}\n---\n{}", system_prompt, user_prompt);

    let patch: FieldPatch = match context.get_from_cache(CACHE_CATEGORY, &cache_key).await {
        Some(cached) => {
            if config.verbose {
                println!("💾 命中增强缓存，跳过模型调用");
            }
            cached
        }
        None => {
            let patch = context
                .llm_client
                .extract::<FieldPatch>(&system_prompt, &user_prompt)
                .await
                .context("Field enhancement failed")?;
            if let Err(e) = context.store_to_cache(CACHE_CATEGORY, &cache_key, &patch).await {
                eprintln!("⚠️ 增强结果写入缓存失败: {}", e);
            }
            patch
        }
    };

    if patch.is_empty() {
        println!("⚠️ 模型没有返回任何可用字段，保留现有内容");
        return Ok(());
    }

    let policy = MergePolicy {
        overwrite_non_empty: config.merge.overwrite_non_empty,
    };
    fields.apply_patch(patch, &policy);

    println!("✅ README内容生成完成");
    Ok(())
}

/// 系统提示词：字段契约 + 语气与深度指令
pub fn build_system_prompt(context: &GeneratorContext) -> String {
    let config = &context.config;

    format!(
        r#"You are a professional README writer. Given the current project form fields and an optional user request, produce improved values for those fields.

Field contract:
- project_name: the project's short display name, plain text
- description: an "About" section of 2-3 sentences explaining what the project does
- tech_stack: comma-separated technology names, used for badge rendering (e.g. "Next.js, TypeScript, Vercel")
- features: one feature per line, each line a specific capability, markdown bullet syntax optional
- tech_stack_details: one "Category: Technology Version" item per line (e.g. "Framework: Next.js 14")
- installation: installation steps, fenced code blocks allowed
- usage: usage instructions, fenced code blocks allowed
- deployment_url: the live deployment host if one is mentioned, otherwise omit

Only return fields you can genuinely improve or fill; omit every other field entirely. Never invent facts that contradict the current field values.

{}
{}"#,
        config.tone.prompt_instruction(),
        config.depth.prompt_instruction()
    )
}

/// 用户提示词：当前字段 + 用户指令
pub fn build_user_prompt(fields: &FieldSet, instruction: Option<&str>) -> Result<String> {
    let current = serde_json::to_string_pretty(fields)
        .context("Failed to serialize current fields")?;

    let request = match instruction {
        Some(text) => format!("User request: {}", text),
        None => "User request: fill in the empty fields based on what the populated fields reveal about the project.".to_string(),
    };

    Ok(format!(
        "Current form fields:\n```json\n{}\n```\n\n{}",
        current, request
    ))
}
