//! HTTP TTS Client - 调用上游 TTS HTTP 服务
//!
//! 实现 TtsEnginePort trait，通过 HTTP 调用上游 TTS 服务
//!
//! 上游 TTS API:
//! GET http://localhost:8080/api/tts?text=...&audioType=...&voiceName=...&download=...&pitch=...
//! Response: 音频二进制（原样透传，不做检查）

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{SynthesisRequest, TtsEnginePort, TtsError};

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// 上游 TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒），0 表示不设超时
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 0,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// 构造上游查询参数
///
/// text 总是第一项；可选字段仅在取真值时出现（空字符串、false、0 一律省略，
/// 不会以空值形式发送）
pub fn build_query_params(request: &SynthesisRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![("text", request.text.clone())];

    if let Some(audio_type) = &request.audio_type {
        if !audio_type.is_empty() {
            params.push(("audioType", audio_type.clone()));
        }
    }
    if let Some(voice_name) = &request.voice_name {
        if !voice_name.is_empty() {
            params.push(("voiceName", voice_name.clone()));
        }
    }
    if request.download {
        params.push(("download", "true".to_string()));
    }
    if let Some(pitch) = &request.pitch {
        if pitch.is_truthy() {
            params.push(("pitch", pitch.to_string()));
        }
    }

    params
}

/// HTTP TTS 客户端
///
/// 通过 HTTP 调用上游 TTS 服务
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, TtsError> {
        Self::new(HttpTtsClientConfig::default())
    }

    /// 获取合成 URL
    fn tts_url(&self) -> String {
        format!("{}/api/tts", self.config.base_url)
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        let params = build_query_params(&request);

        tracing::debug!(
            url = %self.tts_url(),
            text_len = request.text.len(),
            param_count = params.len(),
            "Sending TTS request"
        );

        let response = self
            .client
            .get(self.tts_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "TTS upstream returned error status");
            return Err(TtsError::UpstreamFailure);
        }

        // 整体缓冲音频字节，不做增量转发
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(audio_size = audio_data.len(), "TTS synthesis completed");

        Ok(audio_data)
    }
}
