//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 不实际发起网络调用，返回固定音频或固定错误，并记录收到的请求，
//! 供测试断言转发内容与调用次数

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SynthesisRequest, TtsEnginePort, TtsError};

/// Fake TTS Client
pub struct FakeTtsClient {
    /// 固定返回的音频数据；None 表示固定返回上游失败
    audio_data: Option<Vec<u8>>,
    /// 收到的请求记录
    requests: Mutex<Vec<SynthesisRequest>>,
}

impl FakeTtsClient {
    /// 创建始终成功的客户端，返回给定音频字节
    pub fn with_audio(audio_data: Vec<u8>) -> Self {
        Self {
            audio_data: Some(audio_data),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 创建始终失败的客户端（模拟上游非成功状态）
    pub fn with_failure() -> Self {
        Self {
            audio_data: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 收到的请求数
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// 收到的请求记录
    pub fn recorded_requests(&self) -> Vec<SynthesisRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            "FakeTtsClient: recording request"
        );
        self.requests.lock().unwrap().push(request);

        match &self.audio_data {
            Some(data) => Ok(data.clone()),
            None => Err(TtsError::UpstreamFailure),
        }
    }
}
