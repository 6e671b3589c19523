use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ArrayError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// `end` is exclusive, inclusive ranges are reported as `start..end + 1`.
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
    #[error("comparator failed")]
    Comparator(#[source] BoxError),
}

impl ArrayError {
    pub(crate) fn comparator<E: Into<BoxError>>(err: E) -> Self {
        let source = err.into();
        log::debug!("comparator failed: {source}");
        Self::Comparator(source)
    }
}
