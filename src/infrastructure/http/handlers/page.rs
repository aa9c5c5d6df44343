//! Page Handler - 内嵌客户端页面
//!
//! 页面在构建期通过 include_str! 嵌入，运行时不做任何文件 I/O，
//! 也不做字符串拼接，原样返回

use axum::response::Html;

/// 构建期嵌入的客户端页面
const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/web/index.html"));

/// 未匹配任何路由的请求一律回退到客户端页面
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
