use std::collections::{BTreeSet, HashSet};

use crate::StreamRecord;

/// The channels considered online as of the last successful poll
#[derive(Debug, Default)]
pub struct Snapshot {
    online: HashSet<String>,
    polled: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diff {
    pub newly_online: BTreeSet<String>,
    pub alert: bool,
}

impl Snapshot {
    /// Replaces the snapshot with the channels in `streams`.
    ///
    /// The first update after a reset reports every channel as newly online.
    /// An alert is only raised when something came online and the previous
    /// snapshot was not empty.
    pub fn update(&mut self, streams: &[StreamRecord]) -> Diff {
        let current: HashSet<String> = streams.iter().map(|s| s.user_name.clone()).collect();

        let newly_online: BTreeSet<String> = if self.polled {
            current.difference(&self.online).cloned().collect()
        } else {
            current.iter().cloned().collect()
        };

        let alert = !newly_online.is_empty() && !self.online.is_empty();

        self.online = current;
        self.polled = true;

        Diff {
            newly_online,
            alert,
        }
    }

    pub fn clear(&mut self) {
        self.online.clear();
        self.polled = false;
    }

    pub fn contains(&self, user_name: &str) -> bool {
        self.online.contains(user_name)
    }

    pub fn len(&self) -> usize {
        self.online.len()
    }

    pub fn is_empty(&self) -> bool {
        self.online.is_empty()
    }
}
