use std::future::Future;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio::time::{Duration, timeout};

use crate::error::{AppError, AppResult};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

/// Mock portal: serves exactly `statuses.len()` connections, answering
/// the i-th accepted connection with `statuses[i]`. The task resolves to
/// the number of connections handled.
pub(crate) async fn spawn_portal(
    statuses: Vec<u16>,
) -> AppResult<(SocketAddr, JoinHandle<AppResult<usize>>)> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| AppError::validation(format!("Failed to bind portal: {}", err)))?;
    let addr = listener
        .local_addr()
        .map_err(|err| AppError::validation(format!("Failed to read portal addr: {}", err)))?;

    let task = tokio::spawn(async move {
        let mut handlers = Vec::with_capacity(statuses.len());
        for status in statuses {
            let (stream, _) = timeout(TEST_TIMEOUT, listener.accept())
                .await
                .map_err(|_elapsed| AppError::validation("Portal accept timed out"))?
                .map_err(|err| AppError::validation(format!("Portal accept failed: {}", err)))?;
            handlers.push(tokio::spawn(handle_connection(stream, status)));
        }
        let mut handled = 0usize;
        for handler in handlers {
            handler
                .await
                .map_err(|err| AppError::validation(format!("Portal handler panicked: {}", err)))??;
            handled = handled.saturating_add(1);
        }
        Ok(handled)
    });

    Ok((addr, task))
}

async fn handle_connection(mut stream: TcpStream, status: u16) -> AppResult<()> {
    let mut req = Vec::with_capacity(1024);
    loop {
        let mut chunk = [0_u8; 1024];
        let read = timeout(TEST_TIMEOUT, stream.read(&mut chunk))
            .await
            .map_err(|_elapsed| AppError::validation("Portal read timed out"))?
            .map_err(|err| AppError::validation(format!("Portal read failed: {}", err)))?;
        if read == 0 {
            break;
        }
        let prefix = chunk
            .get(..read)
            .ok_or_else(|| AppError::validation("Portal failed to slice read buffer"))?;
        req.extend_from_slice(prefix);
        if req.windows(4).any(|bytes| bytes == b"\r\n\r\n") {
            break;
        }
    }

    let reason = match status {
        200 => "OK",
        204 => "No Content",
        302 => "Found",
        404 => "Not Found",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let location = if status == 302 {
        "Location: /portal\r\n"
    } else {
        ""
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\n{}Content-Length: 2\r\nConnection: close\r\n\r\nok",
        status, reason, location
    );
    timeout(TEST_TIMEOUT, stream.write_all(response.as_bytes()))
        .await
        .map_err(|_elapsed| AppError::validation("Portal write timed out"))?
        .map_err(|err| AppError::validation(format!("Portal write failed: {}", err)))?;
    Ok(())
}

/// Reserves a port nothing listens on, so connections to it are refused.
pub(crate) fn refused_target() -> AppResult<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .map_err(|err| AppError::validation(format!("Failed to reserve port: {}", err)))?;
    let addr = listener
        .local_addr()
        .map_err(|err| AppError::validation(format!("Failed to read reserved addr: {}", err)))?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}
