use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::parse;
use crate::render::{self, RenderOptions};
use crate::types::{FieldSet, MergePolicy};

use anyhow::{Context, Result};

/// 启动README生成工作流
pub async fn launch(config: &Config) -> Result<()> {
    let context = GeneratorContext::new(config.clone())?;

    // 会话恢复
    let mut fields = if config.fresh {
        FieldSet::default()
    } else {
        match context.load_session().await {
            Some(saved) => {
                if config.verbose {
                    println!("🔄 已恢复上次会话的字段");
                }
                saved
            }
            None => FieldSet::default(),
        }
    };

    // Markdown导入：解析结果覆盖已有字段
    if let Some(import_path) = &config.import_markdown {
        let markdown = std::fs::read_to_string(import_path)
            .context(format!("Failed to read markdown file: {:?}", import_path))?;
        let patch = parse::parse_markdown(&markdown);
        if patch.is_empty() {
            println!("⚠️ 未能从 {} 中解析出任何字段", import_path.display());
        } else {
            fields.apply_patch(patch, &MergePolicy::overwrite());
            println!("📄 已从 {} 导入字段", import_path.display());
        }
    }

    // CLI与配置文件中给出的字段覆盖会话内容
    fields.apply_patch(config.field_patch(), &MergePolicy::overwrite());

    // 项目名推断（Cargo.toml / package.json / 目录名）
    if fields.project_name.trim().is_empty() {
        fields.project_name = config.get_project_name();
    }

    // LLM增强
    if !config.skip_enhance && (config.ai_fill || config.refine_instruction.is_some()) {
        context.llm_client.check_connection().await?;
        crate::generator::enhance::execute(&context, &mut fields).await?;
    }

    // 模板预填（安装/使用说明的默认内容）
    config.template.prefill(&mut fields);

    // 渲染与输出
    let options = RenderOptions {
        license: config.license.or_else(|| config.template.default_license()),
    };
    let document = render::synthesize(&fields, &options);
    crate::generator::outlet::save(&context, &document).await?;

    // 会话持久化（尽力而为，失败不打断主流程）
    if let Err(e) = context.save_session(&fields).await {
        eprintln!("⚠️ 会话保存失败: {}", e);
    }

    Ok(())
}

// Include tests
#[cfg(test)]
mod tests;
