//! ttsgate - 文本转语音中转服务
//!
//! 架构设计: Hexagonal Architecture（精简版）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 对外 API + 内嵌客户端页面
//! - Adapters: 上游 TTS HTTP 客户端

pub mod application;
pub mod config;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
