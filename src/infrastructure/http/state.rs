//! Application State

use std::sync::Arc;

use crate::application::ports::TtsEnginePort;

/// 应用状态
///
/// 请求间无共享可变状态，处理器只持有上游客户端的共享引用
pub struct AppState {
    pub tts_engine: Arc<dyn TtsEnginePort>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(tts_engine: Arc<dyn TtsEnginePort>) -> Self {
        Self { tts_engine }
    }
}
