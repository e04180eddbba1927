use anyhow::Context;
use tracing::info;

pub mod args;
pub mod databases;
pub mod error;
pub mod user;

use databases::address::AddressDB;
use user::ConnectionUser;

pub fn run(args: args::Args) -> anyhow::Result<()> {
    info!("Connecting to {:?}", args.address);
    let connection = AddressDB::new(&args.address);
    let user = ConnectionUser::new(&connection);
    user.open_connection().context("Unable to open the connection")?;
    for query in &args.query {
        user.use_connection(query)
            .with_context(|| format!("Unable to execute query {query:?}"))?;
    }
    user.close_connection().context("Unable to close the connection")?;
    info!("Executed {} queries", args.query.len());
    return Ok(());
}
