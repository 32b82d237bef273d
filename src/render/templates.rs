//! README模板预设 - 各模板的章节与默认内容

use serde::{Deserialize, Serialize};

use crate::render::licenses::License;
use crate::types::FieldSet;

/// 模板类型
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub enum Template {
    /// 开源项目的简洁模板
    #[serde(rename = "basic")]
    Basic,
    /// 完整的专业项目模板
    #[serde(rename = "professional")]
    #[default]
    Professional,
    /// 面向市场宣传的初创/SaaS模板
    #[serde(rename = "startup")]
    Startup,
    /// 库/包的技术文档模板
    #[serde(rename = "library")]
    Library,
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::Basic => write!(f, "basic"),
            Template::Professional => write!(f, "professional"),
            Template::Startup => write!(f, "startup"),
            Template::Library => write!(f, "library"),
        }
    }
}

impl std::str::FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Template::Basic),
            "professional" => Ok(Template::Professional),
            "startup" => Ok(Template::Startup),
            "library" => Ok(Template::Library),
            _ => Err(format!("Unknown template: {}", s)),
        }
    }
}

impl Template {
    /// 获取模板的描述性名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Template::Basic => "Basic Open Source",
            Template::Professional => "Professional Project",
            Template::Startup => "Startup / SaaS",
            Template::Library => "Library / Package",
        }
    }

    /// 模板包含的章节清单
    pub fn sections(&self) -> &'static [&'static str] {
        match self {
            Template::Basic => &["Overview", "Installation", "Usage", "License"],
            Template::Professional => &[
                "Overview",
                "Features",
                "Installation",
                "Usage",
                "API Reference",
                "Contributing",
                "License",
                "Contact",
            ],
            Template::Startup => &[
                "Introduction",
                "Key Features",
                "Demo",
                "Getting Started",
                "Documentation",
                "Roadmap",
                "Support",
            ],
            Template::Library => &[
                "Overview",
                "Installation",
                "Quick Start",
                "API Documentation",
                "Examples",
                "Configuration",
                "TypeScript Support",
                "Contributing",
            ],
        }
    }

    /// 模板的默认安装说明
    pub fn default_installation(&self) -> &'static str {
        match self {
            Template::Basic => "```bash\nnpm install project-name\n```",
            Template::Professional => {
                "```bash\n# Clone the repository\ngit clone https://github.com/username/project.git\n\n# Install dependencies\ncd project\nnpm install\n```"
            }
            Template::Startup => {
                "```bash\nnpx create-app my-app\ncd my-app\nnpm start\n```"
            }
            Template::Library => {
                "```bash\nnpm install @scope/package-name\n# or\nyarn add @scope/package-name\n```"
            }
        }
    }

    /// 模板的默认使用说明
    pub fn default_usage(&self) -> &'static str {
        match self {
            Template::Basic => {
                "```javascript\nimport { feature } from 'project-name';\n\n// Your code here\n```"
            }
            Template::Professional => {
                "```bash\n# Start the development server\nnpm run dev\n\n# Build for production\nnpm run build\n```"
            }
            Template::Startup => {
                "1. Sign up for an account\n2. Configure your settings\n3. Start building"
            }
            Template::Library => {
                "```typescript\nimport { Library } from '@scope/package-name';\n\nconst instance = new Library({\n  apiKey: 'your-api-key',\n});\n\nawait instance.method();\n```"
            }
        }
    }

    /// 模板的默认许可证（Startup模板为私有协议，不在许可证表内）
    pub fn default_license(&self) -> Option<License> {
        match self {
            Template::Basic | Template::Professional | Template::Library => Some(License::Mit),
            Template::Startup => None,
        }
    }

    /// 用模板默认内容填充空白字段
    pub fn prefill(&self, fields: &mut FieldSet) {
        if fields.installation.trim().is_empty() {
            fields.installation = self.default_installation().to_string();
        }
        if fields.usage.trim().is_empty() {
            fields.usage = self.default_usage().to_string();
        }
    }
}
