//! Data export command for external analysis and backup.

use crate::{
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Type of data to export
    #[arg(value_enum, default_value = "all")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// When not provided, a timestamped name is generated in the current
    /// directory, e.g. `innkeep_export_20250115_143022.csv`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    msg_info!(Message::ExportingData(format!("{:?}", args.data), format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(args.data)?;

    Ok(())
}
