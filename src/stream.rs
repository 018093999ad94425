//! Alert feed from the synchronous observer side to async consumers.
//!
//! `StreamAlertObserver` pushes into an [`AlertSender`] without ever
//! waiting; whoever holds the [`AlertStream`] drains it at their own pace.

use std::pin::Pin;

use futures_core::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::observer::StockAlert;

/// Boxed async stream of stock alerts.
pub type AlertStream = Pin<Box<dyn Stream<Item = StockAlert> + Send>>;

/// Why an alert could not be queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undelivered {
    /// The stream is at capacity.
    Full,
    /// The stream was dropped.
    Closed,
}

/// Non-blocking producer half of an alert feed.
#[derive(Debug)]
pub struct AlertSender {
    tx: mpsc::Sender<StockAlert>,
}

impl AlertSender {
    /// Queue an alert if there is room, never waiting.
    pub fn try_send(&self, alert: StockAlert) -> Result<(), Undelivered> {
        self.tx.try_send(alert).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => Undelivered::Full,
            mpsc::error::TrySendError::Closed(_) => Undelivered::Closed,
        })
    }
}

/// Create an alert feed holding at most `buffer` undelivered alerts.
///
/// # Panics
///
/// Panics if `buffer` is 0; `DemoConfig::validate` rejects that value.
pub fn alert_channel(buffer: usize) -> (AlertSender, AlertStream) {
    let (tx, rx) = mpsc::channel(buffer);
    (AlertSender { tx }, Box::pin(ReceiverStream::new(rx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn alert(product: &str) -> StockAlert {
        StockAlert {
            product: product.to_string(),
        }
    }

    #[tokio::test]
    async fn test_alerts_arrive_in_order() {
        let (sender, stream) = alert_channel(4);

        sender.try_send(alert("iPhone")).unwrap();
        sender.try_send(alert("iPad")).unwrap();
        drop(sender);

        let products: Vec<String> = stream.map(|a| a.product).collect().await;
        assert_eq!(products, vec!["iPhone", "iPad"]);
    }

    #[tokio::test]
    async fn test_full_then_closed() {
        let (sender, stream) = alert_channel(1);

        assert_eq!(sender.try_send(alert("iPhone")), Ok(()));
        assert_eq!(sender.try_send(alert("iPhone")), Err(Undelivered::Full));

        drop(stream);
        assert_eq!(sender.try_send(alert("iPhone")), Err(Undelivered::Closed));
    }
}
