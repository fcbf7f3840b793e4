use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no observations to record; record at least one vital sign")]
    NothingRecorded,

    #[error("invalid time zone '{name}': {source}")]
    TimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },

    #[error("date arithmetic error: {0}")]
    Date(#[from] jiff::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
