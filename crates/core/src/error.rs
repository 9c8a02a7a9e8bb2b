#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config json: {0}")]
    Config(#[from] serde_json::Error),

    #[error("tick rate must be positive and finite, got {0}")]
    InvalidTickRate(f32),

    #[error("platform {index} has non-positive size {w}x{h}")]
    MalformedPlatform { index: usize, w: f32, h: f32 },

    #[error("player size must be positive, got {w}x{h}")]
    InvalidPlayerSize { w: f32, h: f32 },

    #[error("renderer failed to initialise: {0}")]
    RendererInit(String),

    #[error("replay frame {frame} has unknown input bits {bits:#010b}")]
    ReplayInput { frame: usize, bits: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
