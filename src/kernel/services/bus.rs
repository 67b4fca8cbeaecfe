use std::sync::mpsc::{self, Receiver, SendError, Sender, TryRecvError};

use crate::core::event::NotificationKind;
use crate::kernel::services::ports::TextChange;

#[derive(Debug, Clone)]
pub struct Notification<C, E> {
    pub kind: NotificationKind,
    pub payload: TextChange<C, E>,
}

impl<C, E> Notification<C, E> {
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

pub struct NotificationSender<C, E> {
    tx: Sender<Notification<C, E>>,
}

impl<C, E> Clone for NotificationSender<C, E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

pub struct NotificationReceiver<C, E> {
    rx: Receiver<Notification<C, E>>,
}

pub fn notification_bus<C, E>() -> (NotificationSender<C, E>, NotificationReceiver<C, E>) {
    let (tx, rx) = mpsc::channel();
    (NotificationSender { tx }, NotificationReceiver { rx })
}

impl<C, E> NotificationSender<C, E> {
    pub fn send(&self, msg: Notification<C, E>) -> Result<(), SendError<Notification<C, E>>> {
        self.tx.send(msg)
    }

    pub fn send_change(
        &self,
        kind: NotificationKind,
        payload: TextChange<C, E>,
    ) -> Result<(), SendError<Notification<C, E>>> {
        self.send(Notification { kind, payload })
    }
}

impl<C, E> NotificationReceiver<C, E> {
    pub fn try_recv(&mut self) -> Result<Notification<C, E>, TryRecvError> {
        self.rx.try_recv()
    }

    /// Everything queued so far, in publish order.
    pub fn drain(&mut self) -> Vec<Notification<C, E>> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/bus.rs"]
mod tests;
