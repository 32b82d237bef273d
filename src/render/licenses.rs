//! 开源许可证表 - 许可证徽章与License章节正文

use serde::{Deserialize, Serialize};

/// 许可证类型
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub enum License {
    #[serde(rename = "mit")]
    Mit,
    #[serde(rename = "apache-2.0")]
    Apache2,
    #[serde(rename = "gplv3")]
    Gplv3,
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            License::Mit => write!(f, "mit"),
            License::Apache2 => write!(f, "apache-2.0"),
            License::Gplv3 => write!(f, "gplv3"),
        }
    }
}

impl std::str::FromStr for License {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mit" => Ok(License::Mit),
            "apache-2.0" | "apache2" | "apache" => Ok(License::Apache2),
            "gplv3" | "gpl-3.0" | "gpl" => Ok(License::Gplv3),
            _ => Err(format!("Unknown license: {}", s)),
        }
    }
}

impl License {
    /// 获取许可证的描述性名称
    pub fn display_name(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache 2.0",
            License::Gplv3 => "GPLv3",
        }
    }

    /// 许可证徽章Markdown
    pub fn badge(&self) -> &'static str {
        match self {
            License::Mit => {
                "[![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg?style=for-the-badge)](https://opensource.org/licenses/MIT)"
            }
            License::Apache2 => {
                "[![License](https://img.shields.io/badge/License-Apache_2.0-blue.svg?style=for-the-badge)](https://opensource.org/licenses/Apache-2.0)"
            }
            License::Gplv3 => {
                "[![License: GPL v3](https://img.shields.io/badge/License-GPLv3-blue.svg?style=for-the-badge)](https://www.gnu.org/licenses/gpl-3.0)"
            }
        }
    }

    /// License章节正文
    pub fn text(&self) -> &'static str {
        match self {
            License::Mit => {
                "This project is licensed under the MIT License - see the [LICENSE](LICENSE) file for details."
            }
            License::Apache2 => {
                "This project is licensed under the Apache 2.0 License - see the [LICENSE](LICENSE) file for details."
            }
            License::Gplv3 => {
                "This project is licensed under the GPLv3 License - see the [LICENSE](LICENSE) file for details."
            }
        }
    }
}
