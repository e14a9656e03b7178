use anyhow::Result;
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// 连接到浏览器并定位 flux.qa 投票页
///
/// 优先复用 URL 包含 `url_marker` 的已打开标签页，
/// 找不到时新建页面并导航到 `target_url`
pub async fn connect_to_browser_and_page(
    port: u16,
    target_url: &str,
    url_marker: &str,
) -> Result<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);
    debug!("目标 URL: {}, 定位片段: {}", target_url, url_marker);

    let (browser, mut handler) = Browser::connect(&browser_url).await.map_err(|e| {
        error!("连接浏览器失败: {}", e);
        e
    })?;
    debug!("浏览器连接成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let pages = browser.pages().await?;
    debug!("获取到 {} 个页面", pages.len());

    // 查找已经打开的投票页
    for p in pages.iter() {
        if let Ok(Some(page_url)) = p.url().await {
            debug!("检查页面 URL: {}", page_url);
            if page_url.contains(url_marker) {
                info!("✓ 找到目标页面: {}", page_url);
                return Ok((browser, p.clone()));
            }
        }
    }
    debug!("未找到匹配的页面，将创建新页面");

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建新页面失败: {}", e);
        e
    })?;
    page.goto(target_url).await.map_err(|e| {
        error!("导航到 {} 失败: {}", target_url, e);
        e
    })?;
    info!("已导航到: {}", target_url);

    Ok((browser, page))
}

/// 在后台标签页打开外部助手站点
///
/// 每次运行最多调用一次，失败只记日志，不影响主流程
pub async fn open_chat_tab(browser: &Browser, chat_url: &str) {
    match browser.new_page(chat_url).await {
        Ok(_) => info!("✓ 已在新标签页打开助手站点: {}", chat_url),
        Err(e) => warn!("⚠️ 打开助手站点失败: {}", e),
    }
}
