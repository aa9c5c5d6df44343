//! TTS Engine Port - 上游合成服务抽象
//!
//! 定义上游 TTS 服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    /// 上游返回非成功状态码。对外展示为固定文案，具体状态码只进日志
    #[error("Failed to fetch speech data")]
    UpstreamFailure,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 音调参数
///
/// 请求方可传字符串或数字，转发时原样输出
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Pitch {
    Number(serde_json::Number),
    Text(String),
}

impl Pitch {
    /// 按 JS 真值语义判断：空字符串与 0 视为假，不参与转发
    pub fn is_truthy(&self) -> bool {
        match self {
            Pitch::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
            Pitch::Text(s) => !s.is_empty(),
        }
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pitch::Number(n) => write!(f, "{}", n),
            Pitch::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 合成请求
///
/// text 已通过入口校验（非空），可选字段不做任何校验，原样透传
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本内容
    pub text: String,
    /// 音频编码提示
    pub audio_type: Option<String>,
    /// 模型/音色名称
    pub voice_name: Option<String>,
    /// 下载标记（转发给上游的提示，不影响响应格式）
    pub download: bool,
    /// 音调
    pub pitch: Option<Pitch>,
}

impl SynthesisRequest {
    /// 创建仅包含文本的请求
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            audio_type: None,
            voice_name: None,
            download: false,
            pitch: None,
        }
    }
}

/// TTS Engine Port
///
/// 上游 TTS 服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行 TTS 合成
    ///
    /// 转发文本与可选参数到上游 TTS 服务，返回合成的音频字节（不做任何检查或转码）
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_truthiness() {
        let p: Pitch = serde_json::from_str("\"1.5\"").unwrap();
        assert!(p.is_truthy());

        let p: Pitch = serde_json::from_str("\"\"").unwrap();
        assert!(!p.is_truthy());

        let p: Pitch = serde_json::from_str("0").unwrap();
        assert!(!p.is_truthy());

        let p: Pitch = serde_json::from_str("2").unwrap();
        assert!(p.is_truthy());
    }

    #[test]
    fn test_pitch_display_preserves_form() {
        let p: Pitch = serde_json::from_str("1.5").unwrap();
        assert_eq!(p.to_string(), "1.5");

        let p: Pitch = serde_json::from_str("5").unwrap();
        assert_eq!(p.to_string(), "5");

        let p: Pitch = serde_json::from_str("\"fast\"").unwrap();
        assert_eq!(p.to_string(), "fast");
    }

    #[test]
    fn test_upstream_failure_message_is_generic() {
        let err = TtsError::UpstreamFailure;
        assert_eq!(err.to_string(), "Failed to fetch speech data");
    }
}
