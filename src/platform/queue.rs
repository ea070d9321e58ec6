//! Ordered event queue
//!
//! Two producers (tick timer, input reader) feed one bounded channel; the
//! game loop is the only consumer and handles events strictly in order.

use crossbeam_channel::{Receiver, Sender};

use crate::game::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Tick,
    Input(InputEvent),
}

pub struct EventQueue {
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl EventQueue {
    pub fn bounded(capacity: usize) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(capacity.max(1));
        Self { tx, rx }
    }

    /// Producer handle; clone freely
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    pub fn receiver(&self) -> Receiver<Event> {
        self.rx.clone()
    }
}
