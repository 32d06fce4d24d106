use clap::Parser;
use std::path::PathBuf;

/// 命令行参数
///
/// 只有一个可选的输入路径和一个可选的输出路径，
/// 两者都省略时走「标准输入 → 标准输出」的管道用法。
#[derive(Parser, Debug)]
#[command(
    name = "exam_question_extract",
    version,
    about = "解析考试文本，提取选择题并输出 JSON"
)]
pub struct Cli {
    /// 输入文本文件路径（UTF-8）；省略时从标准输入读取
    pub input: Option<PathBuf>,

    /// JSON 输出文件路径；省略时写到标准输出
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
