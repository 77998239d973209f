//! Scan command handler.

use std::path::PathBuf;

use anyhow::Result;

use crate::bootstrap::CliContext;
use larder_core::{CoreError, ScanMode};
use larder_ocr::FileCaptureDevice;

/// Arguments for the scan command.
pub struct ScanArgs {
    pub text: Option<String>,
    pub image: Option<PathBuf>,
    pub mode: String,
    pub add: Option<String>,
    pub category: String,
    pub history: bool,
}

/// Execute the scan command.
pub async fn execute(ctx: &CliContext, args: ScanArgs) -> Result<()> {
    let scans = ctx.app().scans();

    if args.history {
        let records = scans.history().await;
        if records.is_empty() {
            println!("No scans recorded yet.");
        }
        for record in records {
            println!(
                "{}  {:<10} {}",
                record.scanned_at.format("%Y-%m-%d %H:%M"),
                record.mode.as_str(),
                record.value
            );
        }
        return Ok(());
    }

    let mode = ScanMode::parse(&args.mode).ok_or_else(|| {
        CoreError::Validation(format!(
            "Unknown scan mode '{}' (expected barcode, date or expiry)",
            args.mode
        ))
    })?;

    let outcome = match (args.text, args.image) {
        (Some(text), _) => scans.scan_text(&text, mode).await?,
        (None, Some(path)) => {
            let device = FileCaptureDevice::new(path);
            scans.scan_with_device(&device, mode).await?
        }
        (None, None) => {
            return Err(CoreError::Validation(
                "Provide label text with --text or an image with --image".to_string(),
            )
            .into());
        }
    };

    println!("{}", outcome.describe());

    if let Some(name) = args.add {
        let item = scans.add_scanned(&outcome, &name, &args.category).await?;
        println!(
            "Added '{}' (ID {}), expires {}",
            item.name,
            item.id,
            item.expiry_date.format("%Y-%m-%d")
        );
    }

    Ok(())
}
