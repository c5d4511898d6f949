//! Stdin and OS signal sources
//!
//! Both feed one channel so runners can `select!` over a single receiver.

use colored::Colorize;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;
use tracing::trace;

/// Something the user did outside the banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSignal {
    /// A line typed on stdin
    Line(String),
    /// Stdin reached end of file
    Eof,
    /// SIGINT (Ctrl+C)
    Interrupt,
    /// SIGTERM
    Terminate,
}

/// Merged stdin and signal receiver
pub struct InputHandler {
    receiver: mpsc::Receiver<InputSignal>,
}

impl InputHandler {
    /// Start listening for signals and stdin lines.
    ///
    /// Stdin is read on a plain thread: a blocked read must never hold up
    /// runtime shutdown.
    pub fn new() -> Result<Self, std::io::Error> {
        let (tx, rx) = mpsc::channel(16);

        // Setup SIGINT handler
        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            while sigint.recv().await.is_some() {
                eprintln!();
                if tx_int.send(InputSignal::Interrupt).await.is_err() {
                    break;
                }
            }
        });

        // Setup SIGTERM handler
        let tx_term = tx.clone();
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            while sigterm.recv().await.is_some() {
                eprintln!("{} Received SIGTERM", "↓".cyan());
                if tx_term.send(InputSignal::Terminate).await.is_err() {
                    break;
                }
            }
        });

        std::thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || read_stdin(tx))?;

        Ok(Self { receiver: rx })
    }

    /// Wait for the next input signal
    pub async fn recv(&mut self) -> Option<InputSignal> {
        self.receiver.recv().await
    }
}

fn read_stdin(tx: mpsc::Sender<InputSignal>) {
    use std::io::BufRead;

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        trace!(%line, "stdin line");
        if tx.blocking_send(InputSignal::Line(line)).is_err() {
            return;
        }
    }
    let _ = tx.blocking_send(InputSignal::Eof);
}
