//! Line-oriented chat loop.
//!
//! A reader task forwards input lines over a bounded channel and a single
//! consumer owns the [`Session`], so turns are handled strictly one after
//! another no matter how fast lines arrive.

use crate::{
    core::{assistant::Assistant, session::Session},
    error::Result,
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::mpsc,
};
use tracing::{debug, error};

pub const INPUT_QUEUE_CAPACITY: usize = 32;

/// Spawn a task that sends every non-blank, trimmed line of `reader` to the
/// returned receiver. Invalid UTF-8 is decoded lossily. The channel closes
/// when the input ends or a read fails.
pub fn spawn_line_reader<R>(reader: R, capacity: usize) -> mpsc::Receiver<String>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(capacity);

    tokio::spawn(async move {
        let mut lines = reader.split(b'\n');
        loop {
            match lines.next_segment().await {
                Ok(Some(raw)) => {
                    // undecodable bytes become U+FFFD rather than ending the input
                    let line = String::from_utf8_lossy(&raw);
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if tx.send(line.to_string()).await.is_err() {
                        debug!("input consumer went away");
                        break;
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    error!(error = %err, "failed to read input");
                    break;
                }
            }
        }
    });

    rx
}

/// Handle queued lines one at a time, writing each reply followed by a newline.
///
/// A failed turn is logged and the loop moves on to the next line. Returns the
/// number of replies written once the queue is closed and drained.
pub async fn serve<W>(
    assistant: &Assistant,
    session: &mut Session,
    mut inbox: mpsc::Receiver<String>,
    out: &mut W,
) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut replies = 0;

    while let Some(line) = inbox.recv().await {
        match assistant.handle_turn(session, &line).await {
            Ok(outcome) => {
                if let Some(reply) = outcome.reply() {
                    out.write_all(reply.as_bytes()).await?;
                    out.write_all(b"\n").await?;
                    out.flush().await?;
                    replies += 1;
                }
            }
            Err(err) => {
                error!(code = err.error_code(), error = %err, "turn failed");
            }
        }
    }

    Ok(replies)
}
