use std::time::{Duration, Instant};

use crate::core::constants::MAX_FRAME_SIZE;

use super::error::TransportError;
use super::ethernet::EthernetFrame;
use super::transport::RawFrameTransport;

/// Waits until a frame matching `predicate` arrives or `timeout` elapses.
///
/// Returns `Ok(None)` on timeout; an unanswered request is an expected
/// outcome on a real network, not an error. Frames that fail to decode are
/// discarded and the wait continues, since a shared segment carries traffic
/// from other hosts that must not abort a local request. Transport errors
/// abort the wait immediately.
///
/// The remaining budget shrinks by the time already spent on every
/// iteration, so the total wall-clock spent never exceeds `timeout` even
/// when unrelated frames arrive back to back.
pub fn wait_for_reply<T, P>(
    transport: &mut T,
    mut predicate: P,
    timeout: Duration,
) -> Result<Option<EthernetFrame>, TransportError>
where
    T: RawFrameTransport,
    P: FnMut(&EthernetFrame) -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(None);
        }
        if !transport.wait_readable(remaining)? {
            return Ok(None);
        }

        let bytes = transport.receive(MAX_FRAME_SIZE)?;
        match EthernetFrame::decode(&bytes) {
            Ok(frame) if predicate(&frame) => return Ok(Some(frame)),
            Ok(_) | Err(_) => continue,
        }
    }
}
