//! TCP line transport for the client.
//!
//! Provides [`ConnectedSession`] which handles socket I/O for one
//! connection. This is a thin layer that just reads and writes
//! newline-delimited lines - protocol logic remains in the Sans-IO
//! [`crate::Session`].

use std::io;

use thiserror::Error;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{TcpStream, tcp::OwnedWriteHalf},
    sync::mpsc,
};

/// Well-known chat server port, used when the address has no explicit port.
pub const DEFAULT_PORT: u16 = 59001;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established. Fatal at startup.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Channel or socket failure on an established connection.
    #[error("stream error: {0}")]
    Stream(String),
}

/// What the transport produced: a line, or the end of the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// One complete line from the server, delimiter stripped.
    Line(String),

    /// The server closed the stream (graceful end-of-stream).
    Closed,

    /// The stream failed mid-session. Treated like a close; not retried.
    Failed {
        /// The underlying I/O error, stringified.
        reason: String,
    },
}

/// Handle to a connected session's transport.
///
/// Lines are sent and received via the channels; an internal task owns the
/// socket. The single writer loop serializes outgoing lines in issue order
/// while reads proceed concurrently in arrival order.
pub struct ConnectedSession {
    /// Send outgoing lines to the server.
    pub to_server: mpsc::Sender<String>,
    /// Receive incoming lines and stream termination from the server.
    pub from_server: mpsc::Receiver<TransportEvent>,
    /// Abort handle to stop the connection task.
    abort_handle: tokio::task::AbortHandle,
}

impl ConnectedSession {
    /// Stop the connection. The pending read terminates and the socket is
    /// released; this is the only cancellation mechanism.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Connect to a chat server.
///
/// `server_addr` is a host name or a `host:port` pair; a bare host uses
/// [`DEFAULT_PORT`]. Returns a [`ConnectedSession`] with channels for line
/// transport.
pub async fn connect(server_addr: &str) -> Result<ConnectedSession, TransportError> {
    let addr = if server_addr.contains(':') {
        server_addr.to_string()
    } else {
        format!("{server_addr}:{DEFAULT_PORT}")
    };

    let stream = TcpStream::connect(&addr)
        .await
        .map_err(|e| TransportError::Connect(format!("connect to {addr} failed: {e}")))?;

    let (to_server_tx, to_server_rx) = mpsc::channel::<String>(32);
    let (from_server_tx, from_server_rx) = mpsc::channel::<TransportEvent>(32);

    // Spawn connection handler
    let handle = tokio::spawn(run_connection(stream, to_server_rx, from_server_tx));

    Ok(ConnectedSession {
        to_server: to_server_tx,
        from_server: from_server_rx,
        abort_handle: handle.abort_handle(),
    })
}

/// Run the connection, bridging between channels and the socket.
async fn run_connection(
    stream: TcpStream,
    mut to_server: mpsc::Receiver<String>,
    from_server: mpsc::Sender<TransportEvent>,
) {
    let (read_half, mut write_half) = stream.into_split();

    // Reader task: one blocking suspension point, the line read. It runs
    // until end-of-stream, a read error, or the receiver going away.
    let line_events = from_server.clone();
    let recv_handle = tokio::spawn(async move {
        let mut lines = BufReader::new(read_half).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line_events.send(TransportEvent::Line(line)).await.is_err() {
                        break;
                    }
                },
                Ok(None) => {
                    let _ = line_events.send(TransportEvent::Closed).await;
                    break;
                },
                Err(e) => {
                    tracing::debug!(error = %e, "line read failed");
                    let _ = line_events.send(TransportEvent::Failed { reason: e.to_string() }).await;
                    break;
                },
            }
        }
    });

    // Writer loop: sole owner of the write half, one outstanding write at a
    // time, lines go out in the order they were issued
    while let Some(line) = to_server.recv().await {
        if let Err(e) = write_line(&mut write_half, &line).await {
            tracing::warn!(error = %e, "line write failed");
            let _ = from_server.send(TransportEvent::Failed { reason: e.to_string() }).await;
            break;
        }
    }

    recv_handle.abort();
}

/// Write one line, appending the protocol's only framing: the newline.
async fn write_line(write_half: &mut OwnedWriteHalf, line: &str) -> io::Result<()> {
    write_half.write_all(line.as_bytes()).await?;
    write_half.write_all(b"\n").await?;
    write_half.flush().await?;
    Ok(())
}
