use tokio::sync::mpsc::{self, error::TrySendError, Receiver, Sender};

use crate::features::analytics::models::NewPageView;

/// Bounded hand-off between request handlers and the page view writer.
///
/// Enqueueing never waits: when the writer falls behind, views are dropped
/// and logged.
#[derive(Clone)]
pub struct PageViewQueue {
    tx: Sender<NewPageView>,
}

impl PageViewQueue {
    pub fn new(capacity: usize) -> (Self, Receiver<NewPageView>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Returns whether the view was accepted for writing
    pub fn enqueue(&self, view: NewPageView) -> bool {
        match self.tx.try_send(view) {
            Ok(()) => true,
            Err(TrySendError::Full(view)) => {
                tracing::warn!("Page view queue full, dropping view of {}", view.page_url);
                false
            }
            Err(TrySendError::Closed(view)) => {
                tracing::warn!("Page view writer stopped, dropping view of {}", view.page_url);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn view(url: &str) -> NewPageView {
        NewPageView {
            page_url: url.to_string(),
            page_title: None,
            referrer: None,
            visitor_id: "v".to_string(),
            user_agent: None,
            viewed_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_full_queue_drops_without_blocking() {
        let (queue, mut rx) = PageViewQueue::new(1);
        assert!(queue.enqueue(view("/a")));
        assert!(!queue.enqueue(view("/b")));

        assert_eq!(rx.recv().await.unwrap().page_url, "/a");
        assert!(queue.enqueue(view("/c")));
    }

    #[tokio::test]
    async fn test_closed_queue_drops() {
        let (queue, rx) = PageViewQueue::new(4);
        drop(rx);
        assert!(!queue.enqueue(view("/a")));
    }
}
