//! Periodic tick source
//!
//! A background thread turns `TimerCommand`s into a stream of `Event::Tick`.
//! Ticks are offered with `try_send`: if the queue is full the tick is
//! dropped rather than blocking the timer. A new period takes effect from
//! the next tick; ticks already queued are left alone.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError, select};

use super::queue::Event;
use crate::sim::TimerCommand;

/// Anything that can be started, restarted and stopped by the game
pub trait TickSource {
    fn apply(&self, cmd: TimerCommand);
}

pub struct TickTimer {
    control: Option<Sender<TimerCommand>>,
    handle: Option<JoinHandle<()>>,
}

impl TickTimer {
    /// Spawn the timer thread. It starts stopped.
    pub fn spawn(events: Sender<Event>) -> io::Result<Self> {
        let (control_tx, control_rx) = crossbeam_channel::unbounded();
        let handle = thread::Builder::new()
            .name("tick-timer".into())
            .spawn(move || run_timer(control_rx, events))?;
        Ok(Self {
            control: Some(control_tx),
            handle: Some(handle),
        })
    }
}

impl TickSource for TickTimer {
    fn apply(&self, cmd: TimerCommand) {
        if let Some(control) = &self.control {
            if control.send(cmd).is_err() {
                log::warn!("tick timer is gone, dropped {:?}", cmd);
            }
        }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        // Closing the control channel ends the thread
        self.control.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("tick timer thread panicked");
            }
        }
    }
}

enum Step {
    Command(TimerCommand),
    Tick,
    Shutdown,
}

fn run_timer(control: Receiver<TimerCommand>, events: Sender<Event>) {
    let mut ticker: Receiver<Instant> = crossbeam_channel::never();
    log::debug!("tick timer thread started");

    loop {
        let step = select! {
            recv(control) -> cmd => cmd.map_or(Step::Shutdown, Step::Command),
            recv(ticker) -> _ => Step::Tick,
        };

        match step {
            Step::Command(TimerCommand::Start { interval_ms }) => {
                log::debug!("tick timer period {} ms", interval_ms);
                ticker = crossbeam_channel::tick(Duration::from_millis(interval_ms.max(1) as u64));
            }
            Step::Command(TimerCommand::Stop) => ticker = crossbeam_channel::never(),
            Step::Tick => match events.try_send(Event::Tick) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => log::warn!("event queue full, tick dropped"),
                Err(TrySendError::Disconnected(_)) => break,
            },
            Step::Shutdown => break,
        }
    }

    log::debug!("tick timer thread stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::EventQueue;

    #[test]
    fn test_timer_ticks_only_while_started() {
        let queue = EventQueue::bounded(64);
        let rx = queue.receiver();
        let timer = TickTimer::spawn(queue.sender()).unwrap();

        // Stopped by default
        assert!(rx.recv_timeout(Duration::from_millis(40)).is_err());

        timer.apply(TimerCommand::Start { interval_ms: 5 });
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), Event::Tick);

        timer.apply(TimerCommand::Stop);
        // Let the stop land, then drain whatever slipped in before it
        thread::sleep(Duration::from_millis(30));
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(40)).is_err());
    }

    #[test]
    fn test_drop_joins_thread() {
        let queue = EventQueue::bounded(1);
        let timer = TickTimer::spawn(queue.sender()).unwrap();
        timer.apply(TimerCommand::Start { interval_ms: 1 });
        thread::sleep(Duration::from_millis(10));
        // Queue is full by now; dropping must still return
        drop(timer);
    }
}
