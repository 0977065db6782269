// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("not found")]
    NotFound,
    #[error("storage: {0}")]
    Storage(String),
    #[error("cache: {0}")]
    Cache(String),
    #[error("serialization: {0}")]
    Serialization(String),
    #[error("internal: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtlSecs(pub u64);

impl TtlSecs {
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(self.0)
    }
}

pub mod config;
