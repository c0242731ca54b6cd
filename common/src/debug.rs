use crossbeam_channel::{unbounded, Receiver, Sender};
use lazy_static::lazy_static;
use std::{collections::BTreeMap, sync::Arc, sync::RwLock};

lazy_static! {
    static ref OVERLAY: Arc<RwLock<Option<Sender<OverlayLine>>>> = Arc::new(RwLock::new(None));
}

#[derive(Debug, Clone)]
struct OverlayLine {
    section: String,
    id: String,
    message: String,
}

/// Collects the debug lines sent from anywhere in the process.
/// There can only be one active `DebugOverlay` at any time.
pub struct DebugOverlay {
    receiver: Receiver<OverlayLine>,
    lines: BTreeMap<(String, String), String>,
}

impl DebugOverlay {
    /// Create a new `DebugOverlay` and make it the current one.
    pub fn new_current() -> Self {
        let (sender, receiver) = unbounded();
        *OVERLAY.write().unwrap() = Some(sender);
        Self {
            receiver,
            lines: BTreeMap::new(),
        }
    }

    /// Drain the pending lines, returning the ones whose content changed
    /// since the last poll as `("Section.id", message)` pairs.
    pub fn poll_changes(&mut self) -> Vec<(String, String)> {
        let mut changes = Vec::new();
        while let Ok(line) = self.receiver.try_recv() {
            let key = (line.section, line.id);
            let previous = self.lines.insert(key.clone(), line.message.clone());
            if previous.as_ref() != Some(&line.message) {
                changes.push((format!("{}.{}", key.0, key.1), line.message));
            }
        }
        changes
    }
}

/// Send a line to the current `DebugOverlay` if there is one.
pub fn send_debug_info(section: impl ToString, id: impl ToString, message: impl ToString) {
    OVERLAY.read().unwrap().as_ref().map(|sender| {
        // The send only fails when the overlay was dropped, and then the
        // line can be dropped with it.
        let _ = sender.send(OverlayLine {
            section: section.to_string(),
            id: id.to_string(),
            message: message.to_string(),
        });
    });
}
