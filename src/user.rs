use crate::{databases::traits::DBConnection, error::Result};

/// Thin client over a borrowed connection.
///
/// Errors from the connection are returned as is, refusals (`Ok(false)`) are
/// dropped.
pub struct ConnectionUser<'a> {
    connection: &'a dyn DBConnection,
}

impl<'a> ConnectionUser<'a> {
    pub fn new(connection: &'a dyn DBConnection) -> Self {
        return ConnectionUser { connection };
    }

    pub fn open_connection(&self) -> Result<()> {
        self.connection.open()?;
        return Ok(());
    }

    pub fn use_connection(&self, query: &str) -> Result<()> {
        return self.connection.execute_query(query);
    }

    pub fn close_connection(&self) -> Result<()> {
        self.connection.close()?;
        return Ok(());
    }
}
