//! 单个题目块的解析（流水线第三阶段）

use super::normalize::clean_fragment;
use super::patterns;
use crate::models::Question;
use serde_json::{Map, Value};

/// 把一个题目块解析成结构化的 [`Question`]
///
/// 块的大致形状（对空白和标点宽容）：
///
/// ```text
/// 問題<编号>、<题干> （1）<选项1> （2）<选项2> ... 答案：(<编号>)
/// ```
///
/// 块首没有合法的「問題<编号>」标记时返回 `None`（按切分规则不会发生，
/// 但直接喂入任意文本时契约仍须成立）。选项区或答案声明缺失、残缺时
/// 不报错，对应字段输出为空表 / `None`。
pub fn parse_block_to_question(block_text: &str) -> Option<Question> {
    // 从块头取题号
    let header = patterns::QUESTION_HEADER.captures(block_text)?;
    let number: u32 = header[1].parse().ok()?;

    // 去掉「問題<编号>」以及紧随其后的 、，,。：等分隔标点
    let after_header = &block_text[header.get(0).unwrap().end()..];
    let body = match patterns::LEADING_SEPARATORS.find(after_header) {
        Some(m) => &after_header[m.end()..],
        None => after_header,
    };

    // 两个地标：第一个（1）选项标记、答案关键字
    let first_option = patterns::FIRST_OPTION_MARKER.find(body);
    let answer_label_idx = body.find(patterns::ANSWER_KEYWORD);

    // 题干在两个地标中靠前的那个之前结束；两者都没有时整块都是题干
    let question_text_end = match (first_option.map(|m| m.start()), answer_label_idx) {
        (Some(option_pos), Some(answer_pos)) => option_pos.min(answer_pos),
        (Some(option_pos), None) => option_pos,
        (None, Some(answer_pos)) => answer_pos,
        (None, None) => body.len(),
    };
    let question_text = clean_fragment(&body[..question_text_end]);

    // 选项区：从第一个选项标记到答案关键字；
    // 答案关键字出现在第一个选项之前时选项区为空
    let options_region_start = first_option.map_or(question_text_end, |m| m.start());
    let options_region_end = answer_label_idx.unwrap_or(body.len());
    let options_region = if options_region_start < options_region_end {
        &body[options_region_start..options_region_end]
    } else {
        ""
    };

    // 逐个选项标记切出选项文本；重复标签后写覆盖先写
    let mut answers = Map::new();
    let option_markers: Vec<_> = patterns::OPTION_MARKER.captures_iter(options_region).collect();
    for (idx, marker) in option_markers.iter().enumerate() {
        let label = marker[1].to_string();
        let text_start = marker.get(0).unwrap().end();
        let text_end = option_markers
            .get(idx + 1)
            .map_or(options_region.len(), |next| next.get(0).unwrap().start());
        let option_text = clean_fragment(&options_region[text_start..text_end]);
        answers.insert(label, Value::String(option_text));
    }

    // 正确答案在整个 body 里搜，不限于答案关键字之后
    let correct = patterns::CORRECT_ANSWER
        .captures(body)
        .and_then(|caps| caps[1].parse::<u32>().ok());

    Some(Question {
        number,
        text: question_text,
        answers,
        correct,
    })
}
