//! 题目解析流水线
//!
//! normalize → segment → block 三段纯函数组合，
//! 整体遵循「尽力解析、绝不中断」：残缺的题目块退化成部分字段，
//! 连块头都没有的片段直接丢弃。

mod block;
mod normalize;
mod patterns;
mod segment;

pub use block::parse_block_to_question;
pub use normalize::{normalize_text_spacing, remove_category_markers};
pub use segment::extract_question_blocks;

use crate::models::Question;
use tracing::debug;

/// 完整流水线：原始文本 → 题目列表
///
/// 输出顺序与题目标记在文本中的出现顺序一致。
pub fn parse_questions(source_text: &str) -> Vec<Question> {
    let without_categories = remove_category_markers(source_text);
    let normalized = normalize_text_spacing(&without_categories);
    let blocks = extract_question_blocks(&normalized);
    debug!("切分出 {} 个题目块", blocks.len());

    blocks
        .iter()
        .filter_map(|block| parse_block_to_question(block))
        .collect()
}
