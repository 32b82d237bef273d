//! 表单字段类型 - README生成的结构化元数据

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 项目元数据字段集，驱动README的生成
///
/// 所有字段都是普通字符串，允许为空；除URL规范化外不做格式校验。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSet {
    /// 项目名称
    pub project_name: String,

    /// 项目描述（About章节正文）
    pub description: String,

    /// 技术栈（逗号分隔，用于徽章解析）
    pub tech_stack: String,

    /// 特性列表（每行一条，渲染为列表项）
    pub features: String,

    /// 详细技术栈（每行一条 "Category: Tech Version"）
    pub tech_stack_details: String,

    /// 部署地址
    pub deployment_url: String,

    /// 安装说明（Markdown正文）
    pub installation: String,

    /// 使用说明（Markdown正文）
    pub usage: String,
}

/// 字段集的部分更新
///
/// 由Markdown反向解析或LLM增强产生，只携带成功提取/生成的字段，
/// 缺失的字段保持None，合并时不影响已有值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldPatch {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
    pub features: Option<String>,
    pub tech_stack_details: Option<String>,
    pub deployment_url: Option<String>,
    pub installation: Option<String>,
    pub usage: Option<String>,
}

/// 合并策略
///
/// overwrite_non_empty为false时，补丁只填充空白字段，不覆盖用户已有内容。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MergePolicy {
    pub overwrite_non_empty: bool,
}

impl MergePolicy {
    /// 覆盖式合并（解析结果覆盖已有字段）
    pub fn overwrite() -> Self {
        Self {
            overwrite_non_empty: true,
        }
    }

    /// 保留式合并（只填充空白字段）
    pub fn preserve() -> Self {
        Self {
            overwrite_non_empty: false,
        }
    }
}

impl FieldSet {
    /// 按合并策略应用一个部分更新
    pub fn apply_patch(&mut self, patch: FieldPatch, policy: &MergePolicy) {
        Self::merge_field(&mut self.project_name, patch.project_name, policy);
        Self::merge_field(&mut self.description, patch.description, policy);
        Self::merge_field(&mut self.tech_stack, patch.tech_stack, policy);
        Self::merge_field(&mut self.features, patch.features, policy);
        Self::merge_field(&mut self.tech_stack_details, patch.tech_stack_details, policy);
        Self::merge_field(&mut self.deployment_url, patch.deployment_url, policy);
        Self::merge_field(&mut self.installation, patch.installation, policy);
        Self::merge_field(&mut self.usage, patch.usage, policy);
    }

    fn merge_field(target: &mut String, incoming: Option<String>, policy: &MergePolicy) {
        if let Some(value) = incoming
            && (policy.overwrite_non_empty || target.trim().is_empty())
        {
            *target = value;
        }
    }

    /// 是否所有字段均为空白
    pub fn is_empty(&self) -> bool {
        [
            &self.project_name,
            &self.description,
            &self.tech_stack,
            &self.features,
            &self.tech_stack_details,
            &self.deployment_url,
            &self.installation,
            &self.usage,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }
}

impl FieldPatch {
    /// 是否不携带任何字段
    pub fn is_empty(&self) -> bool {
        self.project_name.is_none()
            && self.description.is_none()
            && self.tech_stack.is_none()
            && self.features.is_none()
            && self.tech_stack_details.is_none()
            && self.deployment_url.is_none()
            && self.installation.is_none()
            && self.usage.is_none()
    }
}
