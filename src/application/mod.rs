//! 应用层
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine）

pub mod ports;

pub use ports::{Pitch, SynthesisRequest, TtsEnginePort, TtsError};
