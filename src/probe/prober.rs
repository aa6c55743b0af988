use reqwest::Client;
use tokio::time::Instant;
use tracing::warn;

use super::types::ProbeOutcome;

/// Status codes that count as the portal answering properly: a served
/// page (200) or the login redirect (302).
const ACCEPTED_STATUS: [u16; 2] = [200, 302];

pub(crate) fn is_accepted_status(status: u16) -> bool {
    ACCEPTED_STATUS.contains(&status)
}

/// Issues one GET against `url` and classifies the response.
///
/// Transport failures (timeout, refused connection, reset) never escape:
/// they are logged and folded into a failed outcome, so one dead socket
/// cannot abort a phase.
pub(crate) async fn probe_once(client: &Client, url: &str) -> ProbeOutcome {
    let start = Instant::now();
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            ProbeOutcome {
                url: url.to_owned(),
                success: is_accepted_status(status),
                elapsed: start.elapsed(),
            }
        }
        Err(err) => {
            warn!("Probe failed for {}: {}", url, err);
            ProbeOutcome {
                url: url.to_owned(),
                success: false,
                elapsed: start.elapsed(),
            }
        }
    }
}
