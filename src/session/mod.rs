//! 会话存储 - 在两次运行之间尽力保留表单字段
//!
//! 只是一个便利功能：字段集序列化到内部工作目录下的JSON文件，
//! 下次运行时恢复。任何读取失败都当作"没有会话"处理，绝不作为
//! 权威数据来源。

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::FieldSet;

/// 会话文件内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub fields: FieldSet,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// 会话存储器
pub struct SessionStore {
    path: PathBuf,
    enabled: bool,
}

impl SessionStore {
    pub fn new(internal_path: &Path, enabled: bool) -> Self {
        Self {
            path: internal_path.join("session.json"),
            enabled,
        }
    }

    /// 恢复上次会话的字段集；没有会话或读取失败时返回None
    pub fn load(&self) -> Option<FieldSet> {
        if !self.enabled || !self.path.exists() {
            return None;
        }

        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<SessionState>(&content) {
            Ok(state) => Some(state.fields),
            Err(e) => {
                eprintln!("⚠️ 会话文件解析失败，忽略已保存的会话: {}", e);
                None
            }
        }
    }

    /// 保存当前字段集；保留首次创建时间
    pub fn save(&self, fields: &FieldSet) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let created_at = self
            .read_state()
            .map(|state| state.created_at)
            .unwrap_or_else(Utc::now);
        let state = SessionState {
            fields: fields.clone(),
            created_at,
            last_updated: Utc::now(),
        };

        if let Some(parent_dir) = self.path.parent() {
            fs::create_dir_all(parent_dir)
                .context("Failed to create session directory")?;
        }
        let content = serde_json::to_string_pretty(&state)?;
        fs::write(&self.path, content)
            .context(format!("Failed to write session file: {:?}", self.path))?;
        Ok(())
    }

    /// 清除已保存的会话
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .context(format!("Failed to remove session file: {:?}", self.path))?;
        }
        Ok(())
    }

    /// 会话文件是否存在
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_state(&self) -> Option<SessionState> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

// Include tests
#[cfg(test)]
mod tests;
