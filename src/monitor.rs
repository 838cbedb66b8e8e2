use std::{
    sync::{mpsc::Sender, Arc},
    thread::JoinHandle,
    time::{Duration, Instant},
};

use parking_lot::{Condvar, Mutex};

use crate::{Alert, Config, ConfigStore, Credentials, Error, Event, Fetcher, Snapshot};

/// Time units to wait after a failed poll
pub const BACKOFF_UNITS: u32 = 10;

/// Polls the followed streams on a background thread while running
pub struct Monitor {
    fetcher: Arc<dyn Fetcher>,
    alert: Arc<dyn Alert>,
    store: ConfigStore,
    events: Sender<Event>,
    unit: Duration,
    current: Option<Arc<Control>>,
    workers: Vec<JoinHandle<()>>,
}

impl Monitor {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        alert: Arc<dyn Alert>,
        store: ConfigStore,
        events: Sender<Event>,
    ) -> Self {
        Self {
            fetcher,
            alert,
            store,
            events,
            unit: Duration::from_secs(1),
            current: None,
            workers: Vec::new(),
        }
    }

    /// Scales the refresh interval and the backoff, which are otherwise in seconds
    pub fn with_time_unit(mut self, unit: Duration) -> Self {
        self.unit = unit;
        self
    }

    pub fn is_running(&self) -> bool {
        self.current.as_ref().map_or(false, |c| c.is_running())
    }

    /// Validates and persists `config`, then starts polling with it
    pub fn start(&mut self, config: Config) -> Result<(), Error> {
        if self.is_running() {
            return Err(Error::AlreadyRunning);
        }

        config.validate()?;
        self.store.save(&config)?;
        self.reap();

        let control = Arc::new(Control::running());
        let worker = Worker {
            control: Arc::clone(&control),
            fetcher: Arc::clone(&self.fetcher),
            alert: Arc::clone(&self.alert),
            events: self.events.clone(),
            credentials: config.credentials(),
            refresh: self.unit.saturating_mul(
                u32::try_from(config.refresh_interval()).unwrap_or(u32::MAX),
            ),
            backoff: self.unit * BACKOFF_UNITS,
        };

        log::info!(
            "monitoring followed streams for {} every {} second(s)",
            config.user_id,
            config.refresh_interval()
        );

        let handle = std::thread::Builder::new()
            .name("followed_live poller".into())
            .spawn(move || worker.run())
            .map_err(Error::Spawn)?;

        self.current.replace(control);
        self.workers.push(handle);
        Ok(())
    }

    /// Stops polling. Returns whether it was running
    pub fn stop(&mut self) -> bool {
        self.stop_handle().map_or(false, |handle| handle.stop())
    }

    /// A handle that can stop the current run from another thread
    pub fn stop_handle(&self) -> Option<StopHandle> {
        self.current.as_ref().map(|control| StopHandle {
            control: Arc::clone(control),
            events: self.events.clone(),
        })
    }

    /// Stops polling and waits for every worker to exit
    pub fn shutdown(mut self) {
        self.join_all()
    }

    fn join_all(&mut self) {
        self.stop();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::error!("a polling worker panicked");
            }
        }
    }

    fn reap(&mut self) {
        let (done, pending) = std::mem::take(&mut self.workers)
            .into_iter()
            .partition::<Vec<_>, _>(|h| h.is_finished());
        for handle in done {
            if handle.join().is_err() {
                log::error!("a polling worker panicked");
            }
        }
        self.workers = pending;
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        self.join_all()
    }
}

#[derive(Clone)]
pub struct StopHandle {
    control: Arc<Control>,
    events: Sender<Event>,
}

impl StopHandle {
    /// Stops the run this handle belongs to. Returns whether it was running
    pub fn stop(&self) -> bool {
        self.control.stop(|| {
            log::info!("stopped monitoring");
            let _ = self.events.send(Event::Stopped);
        })
    }
}

struct Control {
    running: Mutex<bool>,
    signal: Condvar,
}

impl Control {
    fn running() -> Self {
        Self {
            running: Mutex::new(true),
            signal: Condvar::new(),
        }
    }

    fn is_running(&self) -> bool {
        *self.running.lock()
    }

    fn stop(&self, notify: impl FnOnce()) -> bool {
        let mut running = self.running.lock();
        if !*running {
            return false;
        }
        *running = false;
        self.signal.notify_all();
        notify();
        true
    }

    /// Runs `f` only if still running, holding the lock so `stop` cannot interleave
    fn while_running(&self, f: impl FnOnce()) -> bool {
        let running = self.running.lock();
        if *running {
            f();
        }
        *running
    }

    /// Waits up to `timeout`, returning early if stopped. Returns whether still running
    fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut running = self.running.lock();
        while *running {
            if self.signal.wait_until(&mut running, deadline).timed_out() {
                break;
            }
        }
        *running
    }
}

struct Worker {
    control: Arc<Control>,
    fetcher: Arc<dyn Fetcher>,
    alert: Arc<dyn Alert>,
    events: Sender<Event>,
    credentials: Credentials,
    refresh: Duration,
    backoff: Duration,
}

impl Worker {
    fn run(self) {
        let mut snapshot = Snapshot::default();

        while self.control.is_running() {
            match self.fetcher.fetch_followed(&self.credentials) {
                Ok(streams) => {
                    let diff = snapshot.update(&streams);
                    log::debug!(
                        "{} online, {} newly online",
                        snapshot.len(),
                        diff.newly_online.len()
                    );

                    let delivered = self.control.while_running(|| {
                        if diff.alert {
                            self.alert.play();
                        }
                        let _ = self.events.send(Event::Update {
                            streams,
                            newly_online: diff.newly_online,
                        });
                    });

                    if !delivered {
                        break;
                    }
                }

                Err(err) => {
                    log::warn!("poll failed: {}", err);

                    let message = err.to_string();
                    let delivered = self.control.while_running(|| {
                        let _ = self.events.send(Event::Error(message));
                    });

                    if !delivered || !self.control.wait(self.backoff) {
                        break;
                    }
                }
            }

            if !self.control.wait(self.refresh) {
                break;
            }
        }

        snapshot.clear();
        log::trace!("polling worker exited");
    }
}
