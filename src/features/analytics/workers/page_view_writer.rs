use std::sync::Arc;

use tokio::sync::mpsc::Receiver;

use crate::features::analytics::models::NewPageView;
use crate::features::analytics::repositories::PageViewRepository;

/// Background worker that drains the page view queue into storage
pub struct PageViewWriter {
    repo: Arc<dyn PageViewRepository>,
    rx: Receiver<NewPageView>,
}

impl PageViewWriter {
    pub fn new(repo: Arc<dyn PageViewRepository>, rx: Receiver<NewPageView>) -> Self {
        Self { repo, rx }
    }

    /// Run until every queue handle is dropped. Insert failures are logged
    /// and the view is discarded.
    pub async fn run(mut self) {
        tracing::info!("Starting page view writer");

        while let Some(view) = self.rx.recv().await {
            if let Err(e) = self.repo.insert(&view).await {
                tracing::error!("Failed to record page view for {}: {:?}", view.page_url, e);
            }
        }

        tracing::info!("Page view writer stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::analytics::queue::PageViewQueue;
    use crate::features::analytics::repositories::InMemoryPageViewRepository;
    use chrono::Utc;

    fn view(url: &str) -> NewPageView {
        NewPageView {
            page_url: url.to_string(),
            page_title: None,
            referrer: None,
            visitor_id: "visitor".to_string(),
            user_agent: None,
            viewed_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_writer_drains_queue_until_closed() {
        let repo = Arc::new(InMemoryPageViewRepository::new());
        let (queue, rx) = PageViewQueue::new(8);

        queue.enqueue(view("/"));
        queue.enqueue(view("/berita"));
        drop(queue);

        PageViewWriter::new(repo.clone(), rx).run().await;

        let urls: Vec<String> = repo.recorded().into_iter().map(|v| v.page_url).collect();
        assert_eq!(urls, vec!["/", "/berita"]);
    }

    #[tokio::test]
    async fn test_insert_failure_does_not_stop_writer() {
        let repo = Arc::new(InMemoryPageViewRepository::new());
        repo.fail_inserts(true);
        let (queue, rx) = PageViewQueue::new(8);

        queue.enqueue(view("/lost"));
        drop(queue);

        PageViewWriter::new(repo.clone(), rx).run().await;
        assert!(repo.recorded().is_empty());
    }
}
