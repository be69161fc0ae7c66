use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// One firing of the auto-advance timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTick {
    /// 1-based count of ticks fired by the timer that produced this one
    pub seq: u64,
}

/// Repeating timer task; cancelled when dropped
pub(crate) struct TickTimer {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl TickTimer {
    /// Spawn a timer that sends a tick every `period` until cancelled
    pub(crate) fn spawn(
        runtime: &Handle,
        period: Duration,
        tx: mpsc::UnboundedSender<AdvanceTick>,
    ) -> Self {
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            // Skip the first tick (fires immediately)
            interval.tick().await;

            let mut seq = 0u64;
            loop {
                tokio::select! {
                    result = shutdown_rx.changed() => {
                        if result.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = interval.tick() => {
                        seq += 1;
                        if tx.send(AdvanceTick { seq }).is_err() {
                            warn!("Auto-advance tick dropped: receiver closed");
                            break;
                        }
                    }
                }
            }

            debug!("Auto-advance timer stopped after {} ticks", seq);
        });

        Self { shutdown, handle }
    }

    /// Whether the timer task is still running
    pub(crate) fn is_live(&self) -> bool {
        !self.handle.is_finished()
    }

    pub(crate) fn cancel(self) {
        drop(self);
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = TickTimer::spawn(&Handle::current(), Duration::from_millis(1500), tx);

        let first = timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
        assert_eq!(first, Some(AdvanceTick { seq: 1 }));
        let second = timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
        assert_eq!(second, Some(AdvanceTick { seq: 2 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_immediate_tick() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = TickTimer::spawn(&Handle::current(), Duration::from_millis(1500), tx);

        assert!(timeout(Duration::from_millis(1400), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_closes_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = TickTimer::spawn(&Handle::current(), Duration::from_millis(1500), tx);
        timer.cancel();

        // The task owned the only sender
        let result = timeout(Duration::from_secs(10), rx.recv()).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = TickTimer::spawn(&Handle::current(), Duration::from_millis(100), tx);
        drop(rx);

        tokio::time::sleep(Duration::from_millis(250)).await;
        for _ in 0..10 {
            if !timer.is_live() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(!timer.is_live());
    }
}
