use std::collections::BTreeSet;

use crate::StreamRecord;

/// Notifications sent from the polling worker to whoever presents them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Update {
        streams: Vec<StreamRecord>,
        newly_online: BTreeSet<String>,
    },
    Error(String),
    Stopped,
}

pub trait Presenter {
    fn on_update(&mut self, streams: &[StreamRecord], newly_online: &BTreeSet<String>);
    fn on_error(&mut self, message: &str);
    fn on_stopped(&mut self);
}

impl Event {
    /// Hands the event to the presenter, on the caller's thread
    pub fn dispatch(self, presenter: &mut dyn Presenter) {
        match self {
            Self::Update {
                streams,
                newly_online,
            } => presenter.on_update(&streams, &newly_online),
            Self::Error(message) => presenter.on_error(&message),
            Self::Stopped => presenter.on_stopped(),
        }
    }
}

pub trait Alert: Send + Sync {
    fn play(&self);
}

/// Rings the terminal bell
#[derive(Debug, Default, Copy, Clone)]
pub struct Bell;

impl Alert for Bell {
    fn play(&self) {
        use std::io::Write as _;
        let mut stderr = std::io::stderr();
        if let Err(err) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
            log::warn!("cannot ring the bell: {}", err);
        }
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Silent;

impl Alert for Silent {
    fn play(&self) {}
}
