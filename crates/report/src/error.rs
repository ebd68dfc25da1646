use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode json report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot save image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unknown locale {0:?}, expected one of: en, ru")]
    UnknownLocale(String),
}
