//! 应用主流程
//!
//! 负责输入读取、解析流水线调用与 JSON 输出；
//! 核心解析逻辑见 `parsing` 模块，这里只做编排。

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Question;
use crate::parsing;
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;
use tracing::{info, warn};

/// 运行完整流程：读入 → 解析 → 序列化 → 输出
pub fn run(cli: &Cli, config: &Config) -> AppResult<()> {
    let raw_text = read_input(cli.input.as_deref())?;
    info!("✓ 读取输入完成，共 {} 字符", raw_text.chars().count());

    let questions = parsing::parse_questions(&raw_text);

    if questions.is_empty() {
        warn!("⚠️ 未在输入中找到任何题目标记");
    }
    if config.verbose_logging {
        log_questions(&questions, config);
    }

    let output_json = serde_json::to_string_pretty(&questions)?;
    write_output(cli.output.as_deref(), &output_json)?;

    log_parse_complete(&questions, cli.output.as_deref());
    Ok(())
}

/// 读取输入文本
///
/// 给了路径就读文件；没给路径时从标准输入读，
/// 但标准输入是交互终端时拒绝（避免程序看起来卡住）。
fn read_input(input: Option<&Path>) -> AppResult<String> {
    match input {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::InputNotFound {
                    path: path.display().to_string(),
                });
            }
            fs::read_to_string(path).map_err(|source| AppError::ReadFailed {
                path: path.display().to_string(),
                source,
            })
        }
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(AppError::StdinUnavailable);
            }
            let mut raw_text = String::new();
            stdin
                .read_to_string(&mut raw_text)
                .map_err(|source| AppError::StdinReadFailed { source })?;
            Ok(raw_text)
        }
    }
}

/// 输出 JSON
///
/// 给了路径就写文件，否则打印到标准输出
fn write_output(output: Option<&Path>, output_json: &str) -> AppResult<()> {
    match output {
        Some(path) => fs::write(path, output_json).map_err(|source| AppError::WriteFailed {
            path: path.display().to_string(),
            source,
        }),
        None => {
            println!("{}", output_json);
            Ok(())
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_questions(questions: &[Question], config: &Config) {
    for question in questions {
        info!(
            "  第 {} 题: {} [选项 {} 个, 答案 {}]",
            question.number,
            truncate_text(&question.text, config.stem_preview_len),
            question.answers.len(),
            question
                .correct
                .map_or("缺失".to_string(), |c| c.to_string()),
        );
    }
}

fn log_parse_complete(questions: &[Question], output: Option<&Path>) {
    let with_correct = questions.iter().filter(|q| q.correct.is_some()).count();
    info!(
        "✓ 解析完成: 共 {} 道题目，其中 {} 道带答案",
        questions.len(),
        with_correct
    );
    if let Some(path) = output {
        info!("结果已写入: {}", path.display());
    }
}

/// 截断长文本用于日志显示
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
