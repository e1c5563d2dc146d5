use thiserror::Error;

pub type Result<T> = std::result::Result<T, TestInfraError>;

#[derive(Debug, Error)]
pub enum TestInfraError {
    /// The container failed to start or to report its mapped port.
    #[error("redis container: {0}")]
    Container(#[from] testcontainers::TestcontainersError),

    #[error("redis client: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("redis did not accept a connection after {attempts} attempts: {source}")]
    ConnectRetriesExhausted {
        attempts: u32,
        #[source]
        source: redis::RedisError,
    },
}
