use tracing::debug;

use crate::error::{Error, Result};

use super::traits::DBConnection;

/// Address that always refuses connections.
pub const REFUSED_ADDRESS: &str = "0.0.0.0";

/// Connection whose behaviour is fully determined by its address.
///
/// No socket is ever opened: an empty address is invalid, [`REFUSED_ADDRESS`]
/// is refused and anything else is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDB {
    address: String,
}

impl AddressDB {
    pub fn new(address: &str) -> Self {
        return AddressDB {
            address: address.to_owned(),
        };
    }

    pub fn address(&self) -> &str {
        return &self.address;
    }

    fn accepts(&self) -> Result<bool> {
        if self.address.is_empty() {
            return Err(Error::InvalidArgument("address is empty"));
        }
        return Ok(self.address != REFUSED_ADDRESS);
    }
}

impl DBConnection for AddressDB {
    fn open(&self) -> Result<bool> {
        let accepted = self.accepts()?;
        debug!(address = %self.address, accepted, "Opening connection");
        return Ok(accepted);
    }

    fn close(&self) -> Result<bool> {
        let accepted = self.accepts()?;
        debug!(address = %self.address, accepted, "Closing connection");
        return Ok(accepted);
    }

    // Runs regardless of the address
    fn execute_query(&self, query: &str) -> Result<()> {
        if query.is_empty() {
            return Err(Error::InvalidArgument("query is empty"));
        }
        debug!(address = %self.address, "Executing query");
        println!("Query: {query} has done");
        return Ok(());
    }
}
