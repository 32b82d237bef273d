use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{cache::CacheManager, config::Config, llm::client::LLMClient, session::SessionStore};

#[derive(Clone)]
pub struct GeneratorContext {
    /// LLM调用器，用于与AI通信。
    pub llm_client: LLMClient,
    /// 配置
    pub config: Config,
    /// 缓存管理器
    pub cache_manager: Arc<RwLock<CacheManager>>,
    /// 会话存储器
    pub session: Arc<RwLock<SessionStore>>,
}

impl GeneratorContext {
    /// 创建新的生成器上下文
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(config.clone())?;
        let cache_manager = Arc::new(RwLock::new(CacheManager::new(config.cache.clone())));
        let session = Arc::new(RwLock::new(SessionStore::new(
            &config.internal_path,
            config.session.enabled,
        )));

        Ok(Self {
            llm_client,
            config,
            cache_manager,
            session,
        })
    }

    /// 读缓存
    pub async fn get_from_cache<T>(&self, category: &str, prompt: &str) -> Option<T>
    where
        T: for<'a> Deserialize<'a> + Send + Sync,
    {
        let cache_manager = self.cache_manager.read().await;
        cache_manager.get(category, prompt).await.ok().flatten()
    }

    /// 写缓存
    pub async fn store_to_cache<T>(&self, category: &str, prompt: &str, data: &T) -> Result<()>
    where
        T: Serialize + Send + Sync,
    {
        let cache_manager = self.cache_manager.read().await;
        cache_manager.put(category, prompt, data).await
    }

    /// 恢复已保存的会话字段
    pub async fn load_session(&self) -> Option<crate::types::FieldSet> {
        let session = self.session.read().await;
        session.load()
    }

    /// 保存会话字段
    pub async fn save_session(&self, fields: &crate::types::FieldSet) -> Result<()> {
        let session = self.session.write().await;
        session.save(fields)
    }
}
