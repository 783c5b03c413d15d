use thiserror::Error;

use ocds_standards::StandardsError;

#[derive(Debug, Error)]
pub enum MapError {
    #[error(
        "cannot infer the notice type: table has both tender columns {tender_cols:?} \
         and award columns {award_cols:?}; pass the release type explicitly"
    )]
    AmbiguousNoticeType {
        tender_cols: Vec<String>,
        award_cols: Vec<String>,
    },

    #[error(transparent)]
    Standards(#[from] StandardsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
