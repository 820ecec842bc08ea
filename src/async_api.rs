use crate::form::Field;
use crate::platform::clipboard::ClipboardBridge;
use crate::platform::notify::Notifier;
use crate::session::{FormSession, SubmitOutcome};
use crate::{Error, FormConfig, Result, TextSnapshot};
use std::sync::mpsc::{self, Sender};
use std::thread;
use tokio::sync::oneshot;

enum Command {
    SetField(Field, String, oneshot::Sender<Result<()>>),
    Submit(oneshot::Sender<Result<SubmitOutcome>>),
    CopyAgain(oneshot::Sender<Result<()>>),
    Snapshot(oneshot::Sender<Result<TextSnapshot>>),
    CapturedImage(oneshot::Sender<Result<Option<String>>>),
    Close(oneshot::Sender<Result<()>>),
}

/// An async-friendly form session backed by a dedicated worker thread.
///
/// The worker thread owns a synchronous `FormSession` and executes commands
/// sent from async tasks, so callers get an async interface without the
/// session or its clipboard backend having to be `Send` across threads.
/// Commands run strictly in order; two submit flows can never overlap.
#[derive(Clone)]
pub struct AsyncSession {
    cmd_tx: Sender<Command>,
}

impl AsyncSession {
    /// Create a session with the default backends (spawns a background
    /// thread that owns the session).
    pub async fn new(config: Option<FormConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();
        Self::spawn(move || crate::new_session(config)).await
    }

    /// Create a session over explicit backends, e.g. an in-memory clipboard.
    pub async fn with_backends(
        config: FormConfig,
        clipboard: Box<dyn ClipboardBridge + Send>,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self> {
        Self::spawn(move || FormSession::with_backends(config, clipboard, notifier)).await
    }

    async fn spawn<F>(make_session: F) -> Result<Self>
    where
        F: FnOnce() -> Result<FormSession> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx): (oneshot::Sender<Result<()>>, oneshot::Receiver<Result<()>>) =
            oneshot::channel();

        thread::spawn(move || {
            // Initialize the session on the worker thread
            let mut session = match make_session() {
                Ok(s) => s,
                Err(err) => {
                    let _ = init_tx.send(Err(err));
                    return;
                }
            };

            // Signal successful creation
            let _ = init_tx.send(Ok(()));

            // Command loop
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::SetField(field, value, resp) => {
                        session.set_field(field, &value);
                        let _ = resp.send(Ok(()));
                    }
                    Command::Submit(resp) => {
                        let res = session.submit();
                        let _ = resp.send(res);
                    }
                    Command::CopyAgain(resp) => {
                        let res = session.copy_again();
                        let _ = resp.send(res);
                    }
                    Command::Snapshot(resp) => {
                        let _ = resp.send(Ok(session.text_snapshot()));
                    }
                    Command::CapturedImage(resp) => {
                        let captured = session.captured_image().map(|s| s.to_string());
                        let _ = resp.send(Ok(captured));
                    }
                    Command::Close(resp) => {
                        let res = session.close();
                        let _ = resp.send(res);
                        break;
                    }
                }
            }
        });

        // Wait for the worker to report initialization success or failure
        let init_res = init_rx
            .await
            .map_err(|e| Error::Other(format!("Worker init canceled: {}", e)))?;
        init_res?;

        Ok(Self { cmd_tx })
    }

    /// Overwrite one field value
    pub async fn set_field(&self, field: Field, value: &str) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self
            .cmd_tx
            .send(Command::SetField(field, value.to_string(), tx));
        rx.await
            .map_err(|e| Error::Other(format!("SetField canceled: {}", e)))?
    }

    /// Run the submit flow and return its outcome
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Submit(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Submit canceled: {}", e)))?
    }

    /// Write the stored data URL to the clipboard again
    pub async fn copy_again(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::CopyAgain(tx));
        rx.await
            .map_err(|e| Error::Other(format!("CopyAgain canceled: {}", e)))?
    }

    /// A textual snapshot of the rendered surface
    pub async fn text_snapshot(&self) -> Result<TextSnapshot> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Snapshot(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Snapshot canceled: {}", e)))?
    }

    /// The last captured data URL, if any
    pub async fn captured_image(&self) -> Result<Option<String>> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::CapturedImage(tx));
        rx.await
            .map_err(|e| Error::Other(format!("CapturedImage canceled: {}", e)))?
    }

    /// Shut down the background worker and close the session.
    ///
    /// Clones of this handle remain but their commands fail once the worker
    /// has stopped.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))?
    }
}
