//! Motion service contract
//!
//! Samples are produced on the service's own worker. They cross into the
//! core only through the channel, and the core applies them during `tick`,
//! never from the worker thread.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::domain::Vec2;

/// Unit gravity vector in device coordinates (y up)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    pub gravity: Vec2,
}

/// Producer end, handed to the worker
#[derive(Clone)]
pub struct MotionSender(Sender<MotionSample>);

impl MotionSender {
    /// Returns false once the core has been dropped
    pub fn send(&self, sample: MotionSample) -> bool {
        self.0.send(sample).is_ok()
    }
}

/// Consumer end, owned by the core
pub struct MotionReceiver(Receiver<MotionSample>);

impl MotionReceiver {
    /// Drain everything queued and keep only the newest sample
    pub fn latest(&self) -> Option<MotionSample> {
        self.0.try_iter().last()
    }
}

pub fn motion_channel() -> (MotionSender, MotionReceiver) {
    let (tx, rx) = mpsc::channel();
    (MotionSender(tx), MotionReceiver(rx))
}

pub trait MotionService {
    /// Begin streaming samples into `sink` from a background worker
    fn start(&mut self, sink: MotionSender);

    fn stop(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_keeps_newest_sample() {
        let (tx, rx) = motion_channel();
        assert!(rx.latest().is_none());
        for i in 0..5 {
            assert!(tx.send(MotionSample { gravity: Vec2::new(i as f32, 0.0) }));
        }
        assert_eq!(rx.latest().map(|s| s.gravity.x), Some(4.0));
        assert!(rx.latest().is_none());
    }

    #[test]
    fn send_fails_after_receiver_drop() {
        let (tx, rx) = motion_channel();
        drop(rx);
        assert!(!tx.send(MotionSample { gravity: Vec2::zero() }));
    }
}
