//! 题目切分（流水线第二阶段）

use super::patterns;

/// 按「問題<编号>」标记把归一化文本切成题目块
///
/// 第 k 块从第 k 个标记起，到第 k+1 个标记前为止（最后一块到文本末尾），
/// 每块去掉首尾空白。没有任何标记时返回空列表，不视为错误。
pub fn extract_question_blocks(clean_text: &str) -> Vec<&str> {
    let starts: Vec<_> = patterns::QUESTION_MARKER.find_iter(clean_text).collect();
    let mut blocks = Vec::with_capacity(starts.len());
    for (idx, marker) in starts.iter().enumerate() {
        let end = starts
            .get(idx + 1)
            .map_or(clean_text.len(), |next| next.start());
        blocks.push(clean_text[marker.start()..end].trim());
    }
    blocks
}
