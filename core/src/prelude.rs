/// Per-flight error raised while estimating a position.
///
/// Errors are local to the affected flight; the batch entry point never
/// aborts on one of these, it skips the record and keeps going.
#[derive(thiserror::Error, Debug)]
pub enum EstimateError {
    #[error("unknown airport: {0}")]
    UnknownAirport(String),
    #[error("malformed departure time: {0}")]
    MalformedTime(String),
}

pub type EstimateResult<T> = Result<T, EstimateError>;
