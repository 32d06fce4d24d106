use exam_question_extract::parse_questions;
use serde_json::json;

#[test]
fn test_single_question_scenario() {
    // 规格场景：一道完整的题目，全形选项括号，答案带半角括号
    let questions = parse_questions("問題1、天空是什麼顏色？ （1）紅色（2）藍色 答案：(2)");

    assert_eq!(questions.len(), 1);
    assert_eq!(
        serde_json::to_value(&questions).unwrap(),
        json!([{
            "number": 1,
            "text": "天空是什麼顏色？",
            "answers": { "1": "紅色", "2": "藍色" },
            "correct": 2
        }])
    );
    // 选项键按首次出现顺序输出
    let keys: Vec<&String> = questions[0].answers.keys().collect();
    assert_eq!(keys, vec!["1", "2"]);
}

#[test]
fn test_category_marker_scenario() {
    // 规格场景：题干里嵌着【常識】分类标注
    let questions = parse_questions("問題2【常識】今天星期幾 （1）一（2）二 答案:1");

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].number, 2);
    assert_eq!(questions[0].text, "今天星期幾");
    assert!(!questions[0].text.contains('【'));
    assert_eq!(questions[0].correct, Some(1));
}

#[test]
fn test_no_markers_yields_empty_list() {
    assert!(parse_questions("").is_empty());
    assert!(parse_questions("這段文字裡沒有題目 （1）甲 答案:1").is_empty());
}

#[test]
fn test_question_count_bounded_by_markers() {
    let text = "問題1 甲 問題2 乙 問題3 丙";
    let marker_count = text.matches("問題").count();
    assert!(parse_questions(text).len() <= marker_count);
    assert_eq!(parse_questions(text).len(), 3);
}

#[test]
fn test_back_to_back_questions_do_not_bleed() {
    // 两题紧挨：前一题的题干、选项不应混入后一题
    let questions = parse_questions(
        "問題1、甲題 （1）A（2）B 答案：(1)問題2、乙題 （1）C（2）D 答案：(2)",
    );

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].text, "甲題");
    assert_eq!(questions[0].answers["1"], "A");
    assert_eq!(questions[0].correct, Some(1));
    assert_eq!(questions[1].text, "乙題");
    assert_eq!(questions[1].answers["1"], "C");
    assert_eq!(questions[1].correct, Some(2));
    assert!(!questions[0].text.contains("乙題"));
}

#[test]
fn test_messy_whitespace_input() {
    // 换行、制表符、多空格混在一起，归一化后照常解析
    let questions = parse_questions(
        "問題1、\r\n天空 是\t什麼顏色？\n\n（1）紅色\r\n（2）藍色\n答案：(2)",
    );

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].text, "天空 是 什麼顏色？");
    assert_eq!(questions[0].answers["1"], "紅色");
    assert_eq!(questions[0].answers["2"], "藍色");
    assert_eq!(questions[0].correct, Some(2));
}

#[test]
fn test_partial_block_degrades_gracefully() {
    // 只有题干：选项为空表、答案为 null，不报错也不丢题
    let questions = parse_questions("問題8、只有題幹的一題");

    assert_eq!(questions.len(), 1);
    assert!(questions[0].answers.is_empty());
    assert_eq!(questions[0].correct, None);
    assert_eq!(questions[0].text, "只有題幹的一題");
}

#[test]
fn test_json_output_shape() {
    // 输出约定：2 空格缩进、非 ASCII 字符原样输出、缺失答案为 null
    let questions = parse_questions("問題1、天空是什麼顏色？ （1）紅色（2）藍色");
    let output_json = serde_json::to_string_pretty(&questions).unwrap();

    assert!(output_json.contains("天空是什麼顏色？"));
    assert!(!output_json.contains("\\u"));
    assert!(output_json.contains("\"correct\": null"));
    assert!(output_json.contains("  \"number\": 1"));
}

#[test]
fn test_duplicate_option_label_end_to_end() {
    // 重复标签：后写覆盖先写
    let questions = parse_questions("問題1、重複 （1）第一次（2）中間（1）第二次 答案：1");

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].answers.len(), 2);
    assert_eq!(questions[0].answers["1"], "第二次");
    assert_eq!(questions[0].answers["2"], "中間");
}
