use clap::Parser;
use exam_question_extract::cli::Cli;
use exam_question_extract::error::AppError;
use exam_question_extract::{app, logger, Config};

fn main() {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 解析命令行参数
    let cli = Cli::parse();

    if let Err(e) = app::run(&cli, &config) {
        if matches!(e, AppError::StdinUnavailable) {
            eprintln!("用法: exam_question_extract [输入文件] [--output 输出文件]");
        }
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
