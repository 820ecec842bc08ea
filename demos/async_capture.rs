//! Drive the submit flow through the async facade
//!
//! Run with: cargo run --example async_capture

use formshot::platform::clipboard::MemoryClipboard;
use formshot::platform::notify::LogNotifier;
use formshot::{AsyncSession, Field, FormConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("formshot - Async Facade Example\n");

    // The default backends need an OS clipboard; retry with explicit
    // in-process backends when none is reachable.
    let session = match AsyncSession::new(None).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Default clipboard unavailable ({}); using the in-process one", e);
            AsyncSession::with_backends(
                FormConfig::default(),
                Box::new(MemoryClipboard::new()),
                Box::new(LogNotifier::new()),
            )
            .await?
        }
    };

    session.set_field(Field::Name, "Grace Hopper").await?;
    session.set_field(Field::Email, "grace@example.com").await?;
    session.set_field(Field::Password, "cobol-60").await?;
    session.set_field(Field::ConfirmPassword, "cobol-60").await?;

    let outcome = session.submit().await?;
    println!("Submit outcome: {:?}", outcome);

    if let Some(data_url) = session.captured_image().await? {
        println!("Captured data URL: {} chars", data_url.len());
        session.copy_again().await?;
        println!("Copied it to the clipboard again");
    }

    let snapshot = session.text_snapshot().await?;
    println!("\nSnapshot:\n  title: {}\n{}", snapshot.title, snapshot.text);

    session.close().await?;
    println!("Done.");

    Ok(())
}
