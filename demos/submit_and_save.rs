//! Minimal example: fill the form, submit, save the captured PNG
//!
//! Run with: cargo run --example submit_and_save

use formshot::platform::clipboard::MemoryClipboard;
use formshot::platform::notify::LogNotifier;
use formshot::rendering::png_from_data_url;
use formshot::{Field, FormConfig, FormSession, SubmitOutcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("formshot - Submit and Save Example\n");

    // Prefer the default backends (OS clipboard when the feature is on);
    // fall back to the in-process clipboard on hosts without one.
    let mut session = match formshot::new_session(FormConfig::default()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Default clipboard unavailable ({}); using the in-process one", e);
            FormSession::with_backends(
                FormConfig::default(),
                Box::new(MemoryClipboard::new()),
                Box::new(LogNotifier::new()),
            )?
        }
    };

    session.set_field(Field::Name, "Ada Lovelace");
    session.set_field(Field::Email, "ada@example.com");
    session.set_field(Field::Password, "difference-engine");
    session.set_field(Field::ConfirmPassword, "difference-engine");

    match session.submit()? {
        SubmitOutcome::Done => println!("Captured and copied to the clipboard"),
        SubmitOutcome::CopyFailed => println!("Captured; the clipboard write failed"),
        other => {
            eprintln!("Submit ended in {:?}", other);
            return Ok(());
        }
    }

    let data_url = session
        .captured_image()
        .expect("a capture exists after Done or CopyFailed")
        .to_string();
    println!("Data URL: {} chars", data_url.len());

    let png = png_from_data_url(&data_url)?;
    std::fs::write("signup-form.png", &png)?;
    println!("Wrote signup-form.png ({} bytes)", png.len());

    session.close()?;
    println!("Done.");

    Ok(())
}
