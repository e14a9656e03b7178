/// 程序配置
///
/// 显式构造一次、传入编排层，不依赖任何全局状态
#[derive(Clone, Debug)]
pub struct Config {
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// 目标 URL（flux.qa 投票页）
    pub target_url: String,
    /// 用于在已打开的标签页中定位目标页面的 URL 片段
    pub page_url_marker: String,
    /// 外部助手站点 URL
    pub chat_url: String,
    /// 启动时是否在后台标签页打开外部助手站点
    pub open_chat_page: bool,
    /// 是否显示详细日志（完整回显生成的提示词）
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_debug_port: 2001,
            target_url: "https://flux.qa/".to_string(),
            page_url_marker: "flux.qa".to_string(),
            chat_url: "https://chat.openai.com/".to_string(),
            open_chat_page: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_debug_port),
            target_url: std::env::var("TARGET_URL").unwrap_or(default.target_url),
            page_url_marker: std::env::var("PAGE_URL_MARKER").unwrap_or(default.page_url_marker),
            chat_url: std::env::var("CHAT_URL").unwrap_or(default.chat_url),
            open_chat_page: std::env::var("OPEN_CHAT_PAGE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.open_chat_page),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.browser_debug_port, 2001);
        assert!(config.target_url.contains("flux.qa"));
        assert!(!config.open_chat_page);
        assert!(!config.verbose_logging);
    }
}
