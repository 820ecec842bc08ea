//! formshot CLI: fill the signup form, run the submit flow, and export the
//! captured PNG or its data URL.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use log::warn;
use serde_json::json;

use formshot::platform::clipboard::{ClipboardBridge, MemoryClipboard};
use formshot::platform::notify::LogNotifier;
use formshot::rendering::png_from_data_url;
use formshot::{Field, FormConfig, FormSession, SubmitOutcome, Viewport};

#[derive(Parser, Debug)]
#[command(
    name = "formshot",
    version,
    about = "Validate a signup form, rasterize it to PNG, and copy the base64 data URL"
)]
struct Cli {
    /// Name field value
    #[arg(long, default_value = "")]
    name: String,

    /// Email field value
    #[arg(long, default_value = "")]
    email: String,

    /// Password field value
    #[arg(long, default_value = "")]
    password: String,

    /// Confirm-password field value (defaults to the password when omitted)
    #[arg(long)]
    confirm_password: Option<String>,

    /// Write the captured PNG to this path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the full data URL to stdout
    #[arg(long, action = ArgAction::SetTrue)]
    print_data_url: bool,

    /// Print a JSON report of the submit flow
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Print the text rendering of the surface after the flow
    #[arg(long, action = ArgAction::SetTrue)]
    text_snapshot: bool,

    /// Write the data URL to the OS clipboard instead of the in-process one
    #[arg(long, action = ArgAction::SetTrue)]
    clipboard: bool,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Page heading override
    #[arg(long)]
    heading: Option<String>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = FormConfig {
        viewport: Viewport {
            width: cli.width,
            ..Viewport::default()
        },
        ..FormConfig::default()
    };
    if let Some(heading) = &cli.heading {
        config.heading = heading.clone();
    }

    let clipboard = pick_clipboard(cli.clipboard)?;
    let mut session = FormSession::with_backends(config, clipboard, Box::new(LogNotifier::new()))?;

    let confirm = cli
        .confirm_password
        .clone()
        .unwrap_or_else(|| cli.password.clone());
    session.set_field(Field::Name, &cli.name);
    session.set_field(Field::Email, &cli.email);
    session.set_field(Field::Password, &cli.password);
    session.set_field(Field::ConfirmPassword, &confirm);

    let outcome = session.submit()?;

    if cli.json {
        let report = report_json(&outcome, &session, cli.out.as_deref());
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if cli.text_snapshot {
        let snapshot = session.text_snapshot();
        println!("{}", snapshot.title);
        println!("{}", snapshot.text);
    }

    match &outcome {
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors {
                eprintln!("{}: {}", field.wire_name(), message);
            }
            bail!("validation failed for {} field(s)", errors.len());
        }
        SubmitOutcome::CaptureFailed => bail!("capture failed; see the log for details"),
        SubmitOutcome::CopyFailed => {
            warn!("clipboard write failed; the capture is still available");
        }
        SubmitOutcome::Done => {}
    }

    let data_url = session
        .captured_image()
        .context("submit reported success but no captured image is present")?
        .to_string();

    if let Some(path) = &cli.out {
        let png = png_from_data_url(&data_url)?;
        fs::write(path, &png)
            .with_context(|| format!("failed to write PNG to {}", path.display()))?;
        eprintln!("wrote {} ({} bytes)", path.display(), png.len());
    }

    if cli.print_data_url {
        println!("{}", data_url);
    } else if !cli.json {
        println!(
            "captured {} chars; pass --print-data-url for the full string",
            data_url.len()
        );
    }

    session.close()?;
    Ok(())
}

#[cfg(feature = "system-clipboard")]
fn pick_clipboard(system: bool) -> Result<Box<dyn ClipboardBridge>> {
    if system {
        let clipboard = formshot::platform::clipboard::SystemClipboard::new()?;
        Ok(Box::new(clipboard))
    } else {
        Ok(Box::new(MemoryClipboard::new()))
    }
}

#[cfg(not(feature = "system-clipboard"))]
fn pick_clipboard(system: bool) -> Result<Box<dyn ClipboardBridge>> {
    if system {
        bail!("this build does not include the system-clipboard feature");
    }
    Ok(Box::new(MemoryClipboard::new()))
}

fn report_json(
    outcome: &SubmitOutcome,
    session: &FormSession,
    out: Option<&Path>,
) -> serde_json::Value {
    let (outcome_name, errors) = match outcome {
        SubmitOutcome::Invalid(errors) => ("invalid", Some(errors)),
        SubmitOutcome::CaptureFailed => ("capture_failed", None),
        SubmitOutcome::CopyFailed => ("copy_failed", None),
        SubmitOutcome::Done => ("done", None),
    };
    json!({
        "outcome": outcome_name,
        "errors": errors,
        "captured": session.captured_image().is_some(),
        "data_url_chars": session.captured_image().map(|s| s.len()),
        "png_path": out.map(|p| p.display().to_string()),
    })
}
