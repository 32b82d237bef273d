//! LLM客户端公共类型

use thiserror::Error;

/// 文本补全失败的分类
///
/// 用于决定是否值得重试：限流与空响应属于瞬态问题，可以重试或
/// 切换备选模型；鉴权失败重试没有意义，直接上报给调用方。
#[derive(Debug, Error)]
pub enum CompletionError {
    /// 服务端限流，调用方可重试或换用备选模型
    #[error("模型服务限流: {0}")]
    RateLimited(String),

    /// 模型返回了空文本
    #[error("模型返回内容为空")]
    EmptyResponse,

    /// API密钥无效或无权限
    #[error("模型服务鉴权失败: {0}")]
    Unauthorized(String),

    /// 其他Provider错误
    #[error("模型服务调用失败: {0}")]
    Provider(String),
}

impl CompletionError {
    /// 根据Provider返回的错误信息进行分类
    pub fn from_provider(err: anyhow::Error) -> Self {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("rate limit")
            || lowered.contains("too many requests")
            || lowered.contains("429")
        {
            return Self::RateLimited(message);
        }
        if lowered.contains("unauthorized")
            || lowered.contains("invalid api key")
            || lowered.contains("401")
            || lowered.contains("403")
        {
            return Self::Unauthorized(message);
        }
        Self::Provider(message)
    }

    /// 该错误是否值得重试
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Unauthorized(_))
    }
}
