use serde::{Deserialize, Serialize};

/// 生成语气类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum Tone {
    #[serde(rename = "concise")]
    Concise,
    #[serde(rename = "professional")]
    #[default]
    Professional,
    #[serde(rename = "friendly")]
    Friendly,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Concise => write!(f, "concise"),
            Tone::Professional => write!(f, "professional"),
            Tone::Friendly => write!(f, "friendly"),
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "concise" => Ok(Tone::Concise),
            "professional" => Ok(Tone::Professional),
            "friendly" => Ok(Tone::Friendly),
            _ => Err(format!("Unknown tone: {}", s)),
        }
    }
}

impl Tone {
    /// 获取语气的提示词指令
    pub fn prompt_instruction(&self) -> &'static str {
        match self {
            Tone::Concise => {
                "Keep every generated field short and to the point. No filler sentences, no marketing language."
            }
            Tone::Professional => {
                "Write in a professional, clear register suitable for technical documentation. Use **bold** for key technologies and concepts."
            }
            Tone::Friendly => {
                "Write in a warm, welcoming register that encourages newcomers to try the project, while staying accurate."
            }
        }
    }
}

/// 生成深度类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum Depth {
    #[serde(rename = "minimal")]
    Minimal,
    #[serde(rename = "standard")]
    #[default]
    Standard,
    #[serde(rename = "detailed")]
    Detailed,
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Depth::Minimal => write!(f, "minimal"),
            Depth::Standard => write!(f, "standard"),
            Depth::Detailed => write!(f, "detailed"),
        }
    }
}

impl std::str::FromStr for Depth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Depth::Minimal),
            "standard" => Ok(Depth::Standard),
            "detailed" => Ok(Depth::Detailed),
            _ => Err(format!("Unknown depth: {}", s)),
        }
    }
}

impl Depth {
    /// 获取深度的描述性名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Depth::Minimal => "Quick overview with essential information",
            Depth::Standard => "Balanced coverage of all sections",
            Depth::Detailed => "Comprehensive documentation with examples",
        }
    }

    /// 获取深度的提示词指令
    pub fn prompt_instruction(&self) -> &'static str {
        match self {
            Depth::Minimal => {
                "Produce a quick overview with only the essential information: 2 sentences of description and at most 3 feature bullets."
            }
            Depth::Standard => {
                "Produce balanced coverage: 2-3 sentences of description and 4-6 feature bullets."
            }
            Depth::Detailed => {
                "Produce comprehensive documentation: a thorough description, 6 or more feature bullets, and concrete installation/usage examples."
            }
        }
    }
}
