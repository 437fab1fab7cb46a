// SPDX-License-Identifier: MPL-2.0
//! Live change notifications for the directory being browsed.
//!
//! A [`notify`] watcher observes one directory (non-recursively). Its raw
//! events go to a forwarding thread which never touches viewer state: it only
//! translates them into [`DirectoryEvent`]s, pairing rename halves on the
//! way, and pushes them into a channel. The Iced subscription returned by [`watch`] drains that channel,
//! so every change is applied from the application's update loop, one message
//! at a time.

use iced::futures::{SinkExt, Stream};
use iced::{stream, Subscription};
use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A change to the watched directory, reduced to what navigation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    Created(PathBuf),
    Removed(PathBuf),
    Renamed { from: PathBuf, to: PathBuf },
}

/// Translates one raw notify event into directory events, without context.
///
/// Only direct children of `directory` are reported. A `Both` event carrying
/// the two paths becomes a rename; lone `From`/`To` halves are reported as
/// removal/creation and an `Any` event per path is resolved by checking
/// whether the path still exists. Halves tagged with a tracker are paired by
/// [`RenamePairing`] before they get here.
pub fn classify(directory: &Path, event: &Event) -> Vec<DirectoryEvent> {
    let in_directory = |path: &Path| path.parent() == Some(directory);

    match event.kind {
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            match (event.paths.first(), event.paths.get(1)) {
                (Some(from), Some(to)) => rename_events(directory, from, to),
                _ => Vec::new(),
            }
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) | EventKind::Remove(_) => event
            .paths
            .iter()
            .filter(|path| in_directory(path.as_path()))
            .map(|path| DirectoryEvent::Removed(path.clone()))
            .collect(),
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) | EventKind::Create(_) => event
            .paths
            .iter()
            .filter(|path| in_directory(path.as_path()) && !path.is_dir())
            .map(|path| DirectoryEvent::Created(path.clone()))
            .collect(),
        EventKind::Modify(ModifyKind::Name(_)) => event
            .paths
            .iter()
            .filter(|path| in_directory(path.as_path()) && !path.is_dir())
            .map(|path| {
                if path.exists() {
                    DirectoryEvent::Created(path.clone())
                } else {
                    DirectoryEvent::Removed(path.clone())
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// How long the source half of a rename waits for its destination before it
/// counts as a removal. Also the poll interval of the forwarding thread.
pub const RENAME_WINDOW: Duration = Duration::from_millis(100);

/// Number of completed rename trackers remembered to drop their late halves.
const COMPLETED_RENAMES: usize = 16;

/// Reports a rename between two paths according to which side is a direct
/// child of `directory`.
fn rename_events(directory: &Path, from: &Path, to: &Path) -> Vec<DirectoryEvent> {
    let in_directory = |path: &Path| path.parent() == Some(directory);

    match (in_directory(from), in_directory(to)) {
        (true, true) => vec![DirectoryEvent::Renamed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        }],
        (true, false) => vec![DirectoryEvent::Removed(from.to_path_buf())],
        (false, true) => vec![DirectoryEvent::Created(to.to_path_buf())],
        (false, false) => Vec::new(),
    }
}

#[derive(Debug)]
struct PendingRename {
    tracker: usize,
    from: PathBuf,
    since: Instant,
}

/// Stateful translation of the raw event stream of one directory.
///
/// Some platforms (inotify on Linux) report a single rename three times: a
/// `From` half, a `To` half and a combined `Both` event, all tagged with the
/// same tracker. A tagged `From` is held until its partner arrives and the
/// pair is reported as one [`DirectoryEvent::Renamed`]; later events carrying
/// a tracker that was already paired are dropped. A held `From` whose partner
/// never shows up, which is what a move out of the directory looks like,
/// becomes a removal once [`RENAME_WINDOW`] has passed. Untagged events go
/// through [`classify`].
#[derive(Debug)]
pub struct RenamePairing {
    directory: PathBuf,
    pending: Vec<PendingRename>,
    completed: VecDeque<usize>,
}

impl RenamePairing {
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            pending: Vec::new(),
            completed: VecDeque::with_capacity(COMPLETED_RENAMES),
        }
    }

    /// Feeds one raw event received at `now`.
    pub fn push(&mut self, event: &Event, now: Instant) -> Vec<DirectoryEvent> {
        let Some(tracker) = event.attrs.tracker() else {
            return classify(&self.directory, event);
        };

        match event.kind {
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                if self.completed.contains(&tracker) {
                    return Vec::new();
                }
                if let Some(from) = event.paths.first() {
                    self.pending.push(PendingRename {
                        tracker,
                        from: from.clone(),
                        since: now,
                    });
                }
                Vec::new()
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::To | RenameMode::Both)) => {
                if self.completed.contains(&tracker) {
                    return Vec::new();
                }
                let pending = self
                    .pending
                    .iter()
                    .position(|pending| pending.tracker == tracker)
                    .map(|position| self.pending.remove(position));

                // `To` carries the destination only, `Both` carries [from, to].
                match (pending, event.paths.last()) {
                    (Some(pending), Some(to)) => {
                        self.complete(tracker);
                        rename_events(&self.directory, &pending.from, to)
                    }
                    (Some(pending), None) => vec![DirectoryEvent::Removed(pending.from)],
                    (None, _) => {
                        if event.kind == EventKind::Modify(ModifyKind::Name(RenameMode::Both)) {
                            self.complete(tracker);
                        }
                        classify(&self.directory, event)
                    }
                }
            }
            _ => classify(&self.directory, event),
        }
    }

    /// Reports every held `From` older than [`RENAME_WINDOW`] as a removal.
    pub fn expire(&mut self, now: Instant) -> Vec<DirectoryEvent> {
        let (expired, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|pending| {
                now.saturating_duration_since(pending.since) >= RENAME_WINDOW
            });
        self.pending = kept;

        expired
            .into_iter()
            .filter(|pending| pending.from.parent() == Some(self.directory.as_path()))
            .map(|pending| DirectoryEvent::Removed(pending.from))
            .collect()
    }

    fn complete(&mut self, tracker: usize) {
        if self.completed.len() == COMPLETED_RENAMES {
            self.completed.pop_front();
        }
        self.completed.push_back(tracker);
    }
}

/// Keeps a notify watcher alive for one directory.
///
/// Raw events are paired on a forwarding thread; dropping the watcher closes
/// its channel, which ends that thread.
pub struct DirectoryWatcher {
    directory: PathBuf,
    _watcher: RecommendedWatcher,
}

impl DirectoryWatcher {
    /// Starts watching `directory` and returns the watcher together with the
    /// receiving end of its event channel.
    ///
    /// # Errors
    ///
    /// Returns the notify error if the platform watcher cannot be created, the
    /// directory cannot be watched or the forwarding thread cannot start.
    pub fn spawn(
        directory: &Path,
    ) -> notify::Result<(Self, mpsc::UnboundedReceiver<DirectoryEvent>)> {
        let (raw_tx, raw_rx) = std::sync::mpsc::channel();
        let (tx, rx) = mpsc::unbounded_channel();

        let mut watcher = notify::recommended_watcher(raw_tx)?;
        watcher.watch(directory, RecursiveMode::NonRecursive)?;

        let pairing = RenamePairing::new(directory.to_path_buf());
        thread::Builder::new()
            .name("directory-watcher".into())
            .spawn(move || forward(raw_rx, pairing, tx))
            .map_err(notify::Error::io)?;

        Ok((
            Self {
                directory: directory.to_path_buf(),
                _watcher: watcher,
            },
            rx,
        ))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl std::fmt::Debug for DirectoryWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryWatcher")
            .field("directory", &self.directory)
            .finish()
    }
}

fn forward(
    events: Receiver<notify::Result<Event>>,
    mut pairing: RenamePairing,
    tx: mpsc::UnboundedSender<DirectoryEvent>,
) {
    loop {
        let changes = match events.recv_timeout(RENAME_WINDOW) {
            Ok(Ok(event)) => pairing.push(&event, Instant::now()),
            Ok(Err(err)) => {
                log::warn!("Directory watch error: {err}");
                Vec::new()
            }
            Err(RecvTimeoutError::Timeout) => Vec::new(),
            Err(RecvTimeoutError::Disconnected) => break,
        };

        for change in changes.into_iter().chain(pairing.expire(Instant::now())) {
            // Receiver gone means the subscription ended.
            if tx.send(change).is_err() {
                return;
            }
        }
    }
}

/// Subscription data for a directory watch.
/// Hashed by directory so the watcher is created once and kept across updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct WatchId(PathBuf);

/// Creates a subscription delivering changes of `directory`.
///
/// If the watcher cannot be started the failure is logged and the
/// subscription stays silent; navigation keeps working on the last known
/// listing.
pub fn watch(directory: PathBuf) -> Subscription<DirectoryEvent> {
    Subscription::run_with(WatchId(directory), watch_stream)
}

fn watch_stream(id: &WatchId) -> impl Stream<Item = DirectoryEvent> {
    let directory = id.0.clone();

    stream::channel(100, move |mut output: iced::futures::channel::mpsc::Sender<DirectoryEvent>| async move {
        match DirectoryWatcher::spawn(&directory) {
            Ok((watcher, mut events)) => {
                log::info!("Watching {}", watcher.directory().display());
                while let Some(event) = events.recv().await {
                    if output.send(event).await.is_err() {
                        break;
                    }
                }
            }
            Err(err) => {
                log::warn!("Cannot watch {}: {err}", directory.display());
            }
        }

        // Ending the stream would make the runtime start it again.
        std::future::pending::<()>().await;
    })
}
