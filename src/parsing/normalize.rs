//! 文本归一化（流水线第一阶段）

use super::patterns;

/// 去除全形括号包裹的分类标注，例如 【常識】
///
/// 标注连同括号一并去除；左括号找不到配对右括号时，
/// 从该处起的文本原样保留。
pub fn remove_category_markers(source_text: &str) -> String {
    patterns::CATEGORY_MARKER
        .replace_all(source_text, "")
        .into_owned()
}

/// 归一化空白，不破坏 CJK 标点
///
/// - Windows / 旧 Mac 换行统一为 \n
/// - 所有空白连续段（含换行、制表符）压成单个空格
/// - 去掉首尾空白
pub fn normalize_text_spacing(source_text: &str) -> String {
    let text = source_text.replace("\r\n", "\n").replace('\r', "\n");
    patterns::WHITESPACE_RUN
        .replace_all(&text, " ")
        .trim()
        .to_string()
}

/// 压缩小片段内部的空白并去掉首尾空白
pub(super) fn clean_fragment(text: &str) -> String {
    patterns::WHITESPACE_RUN
        .replace_all(text, " ")
        .trim()
        .to_string()
}
