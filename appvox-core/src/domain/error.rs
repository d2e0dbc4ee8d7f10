// appvox-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Source record is missing required field '{field}'")]
    #[diagnostic(
        code(appvox::domain::mapping),
        help("The listing service must expose 'content', 'score' and 'at' on every record.")
    )]
    MissingSourceField { field: String },

    #[error("Source field '{field}' has unexpected type '{found}'")]
    #[diagnostic(code(appvox::domain::mapping_type))]
    SourceFieldType { field: String, found: &'static str },

    #[error("Unrecognized date representation: '{0}'")]
    #[diagnostic(
        code(appvox::domain::date),
        help("Accepted forms: YYYY-MM-DD, RFC 3339, datetime, epoch seconds/millis.")
    )]
    DateFormat(String),
}
