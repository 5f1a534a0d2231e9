//! Bridge from a non-async event source onto the widget's async channel.
//!
//! Real embeddings raise resize notifications on a platform thread; the
//! watcher consumes them from a tokio channel. This forwards between the
//! two until either side hangs up.

use crossbeam_channel::Receiver;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use crate::events::SurfaceEvent;

pub fn run(source: Receiver<SurfaceEvent>, sink: Sender<SurfaceEvent>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while let Ok(event) = source.recv() {
            if sink.blocking_send(event).is_err() {
                break;
            }
        }
    })
}
