use crate::error::Result;

/// Operations every connection-like object provides.
///
/// Implementors are built from an address string. Nothing is validated at
/// construction time, each call checks its own inputs.
#[cfg_attr(test, mockall::automock)]
pub trait DBConnection {
    /// Returns `Ok(false)` when the remote side refuses the connection.
    fn open(&self) -> Result<bool>;

    /// Returns `Ok(false)` when the remote side refuses the disconnect.
    fn close(&self) -> Result<bool>;

    fn execute_query(&self, query: &str) -> Result<()>;
}
