use crate::generator::context::GeneratorContext;
use anyhow::{Context, Result};
use std::fs;

/// 保存渲染完成的README文档
pub async fn save(context: &GeneratorContext, document: &str) -> Result<()> {
    if context.config.emit_stdout {
        StdoutOutlet.save(context, document).await
    } else {
        DiskOutlet.save(context, document).await
    }
}

pub trait Outlet {
    async fn save(&self, context: &GeneratorContext, document: &str) -> Result<()>;
}

/// 写入磁盘的输出器
pub struct DiskOutlet;

impl Outlet for DiskOutlet {
    async fn save(&self, context: &GeneratorContext, document: &str) -> Result<()> {
        println!("\n🖊️ 文档存储中...");

        let output_path = &context.config.output_path;

        // 确保父目录存在
        if let Some(parent_dir) = output_path.parent()
            && !parent_dir.as_os_str().is_empty()
            && !parent_dir.exists()
        {
            fs::create_dir_all(parent_dir)
                .context(format!("Failed to create output directory: {:?}", parent_dir))?;
        }

        fs::write(output_path, document)
            .context(format!("Failed to write document: {:?}", output_path))?;

        println!("💾 已保存文档: {}", output_path.display());
        Ok(())
    }
}

/// 输出到标准输出的输出器
pub struct StdoutOutlet;

impl Outlet for StdoutOutlet {
    async fn save(&self, _context: &GeneratorContext, document: &str) -> Result<()> {
        println!("{}", document);
        Ok(())
    }
}
