/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否逐题输出详细日志
    pub verbose_logging: bool,
    /// 日志中题干预览的最大字符数
    pub stem_preview_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            stem_preview_len: 80,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            stem_preview_len: std::env::var("STEM_PREVIEW_LEN").ok().and_then(|v| v.parse().ok()).unwrap_or(default.stem_preview_len),
        }
    }
}
