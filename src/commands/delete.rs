use crate::{db::reports::Reports, libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the report to delete
    #[arg(required = true)]
    id: i64,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    // Cascade removes the child tasks; an unknown id is treated as success.
    Reports::new()?.delete(args.id)?;
    msg_success!(Message::ReportDeleted(args.id));

    Ok(())
}
