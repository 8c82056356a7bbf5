use thiserror::Error;

/// The result type for the `datastar_scanner` crate.
pub type Result<T> = std::result::Result<T, ScannerError>;

/// The error type for the `datastar_scanner` crate.
///
/// A failed scan is not an error. It is reported as `None` by
/// [`crate::PluginKeyScanner::scan`] and the host engine tries its other
/// grammar alternatives. Errors only arise from violations of the state
/// snapshot contract.
#[derive(Error, Debug)]
pub enum ScannerError {
    /// The host handed back a state snapshot with a non-zero length.
    /// The scanner is stateless and only ever produces empty snapshots.
    #[error("invalid scanner snapshot of {len} bytes, expected 0")]
    InvalidSnapshot {
        /// The length of the rejected snapshot.
        len: usize,
    },
}
