//! 流水线用到的全部正则
//!
//! 进程级只读静态量，首次使用时编译一次，之后所有解析调用共享。

use regex::Regex;
use std::sync::LazyLock;

/// 答案声明的字面关键字
pub(super) const ANSWER_KEYWORD: &str = "答案";

/// 全形括号包裹的分类标注，例如 【常識】
///
/// `[^】]*` 保证非贪婪、不嵌套：左括号只和最近的右括号配对，
/// 没有配对右括号的左括号之后的文本原样保留
pub(super) static CATEGORY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("【[^】]*】").expect("分类标注正则应当合法"));

/// 任意空白连续段（含换行、制表符、全形空格）
pub(super) static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("空白正则应当合法"));

/// 题目起始标记：問題 + 可选空白 + 数字（非锚定，用于切分）
pub(super) static QUESTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"問題\s*([0-9]+)").expect("题目标记正则应当合法"));

/// 题目起始标记（锚定在块首，用于单块解析时的复查）
pub(super) static QUESTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^問題\s*([0-9]+)").expect("题目块头正则应当合法"));

/// 题号后面紧跟的分隔标点（全形/半角逗号、句号、冒号）与空白
pub(super) static LEADING_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[、,，．。:：\s]+").expect("分隔标点正则应当合法"));

/// 标签为 1 的选项标记，全形或半角括号均可，数字两侧允许空白
pub(super) static FIRST_OPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[（(]\s*1\s*[）)]").expect("首选项标记正则应当合法"));

/// 任意选项标记：括号包裹的整数标签，尾部空白一并吃掉
pub(super) static OPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[（(]\s*([0-9]+)\s*[）)]\s*").expect("选项标记正则应当合法"));

/// 正确答案声明：答案 + 可选冒号 + 可选括号 + 数字
pub(super) static CORRECT_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"答案\s*[:：]?\s*[（(]?\s*([0-9]+)\s*[）)]?").expect("答案声明正则应当合法")
});
