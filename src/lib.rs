//! # Exam Question Extract
//!
//! 从排版混乱的考试文本中提取选择题，输出结构化 JSON
//!
//! ## 处理流水线
//!
//! 三个纯函数阶段串联，每个阶段只消费上一阶段的输出，可独立测试：
//!
//! ### ① 文本归一化（parsing::normalize）
//! - 去掉【...】分类标注（连同括号一并去除）
//! - 统一换行符，把所有空白连续段压成单个空格
//!
//! ### ② 题目切分（parsing::segment）
//! - 按「問題<编号>」标记把归一化文本切成互不重叠的题目块
//!
//! ### ③ 题目解析（parsing::block）
//! - 从单个题目块中提取题号、题干、选项表与正确答案编号
//!
//! 外围的输入读取、JSON 输出与命令行参数由 `app` / `cli` 承担，
//! 核心流水线本身不做任何 I/O。
//!
//! ## 模块结构

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod parsing;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::Question;
pub use parsing::parse_questions;
