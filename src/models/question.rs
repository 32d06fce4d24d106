use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 单道选择题的结构化结果
///
/// `answers` 用 `serde_json::Map`（preserve_order）保存，
/// 键为选项标签（如 "1"、"2"），按首次出现顺序输出；
/// 同一标签出现两次时，后出现的文本覆盖先出现的。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// 题号
    pub number: u32,
    /// 题干文本
    pub text: String,
    /// 选项标签 → 选项文本
    #[serde(default)]
    pub answers: Map<String, Value>,
    /// 正确答案编号；缺失时序列化为 null
    #[serde(default)]
    pub correct: Option<u32>,
}
