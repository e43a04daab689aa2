//! TTS Adapter - 语音合成客户端实现

mod elevenlabs_client;
mod fake_tts_client;

pub use elevenlabs_client::{ElevenLabsClient, ElevenLabsClientConfig};
pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig};
