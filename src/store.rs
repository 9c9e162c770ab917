use crate::domain::ScreenState;
use crate::domain::events::Event;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument};

#[derive(Debug)]
pub struct Store {
    state: ScreenState,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<ScreenState>,
    notifier_rx: WatchReceiver<ScreenState>,
}

impl Store {
    pub fn new(initial_state: ScreenState, rx: Receiver<Event>) -> Self {
        let (notifier_tx, notifier_rx) = watch::channel(initial_state.clone());

        Store {
            state: initial_state,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<ScreenState> {
        self.notifier_rx.clone()
    }

    /// Applies events until every sender is gone, publishing a snapshot after each change.
    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);

            let previous_distance = self.state.distance_km;
            if !self.state.apply(event) {
                continue;
            }

            if self.state.distance_km != previous_distance {
                info!("🟢 Distance between markers is now {:.3} km, was {:.3} km", self.state.distance_km, previous_distance);
            }

            self.notifier_tx.send_replace(self.state.clone());
        }

        debug!("🔵 All event senders are gone, store stopped");
    }
}
