use std::sync::Arc;

use tracing::info;

use crate::assessment::session::AssessmentSession;
use crate::chat::thread::ChatThread;
use crate::chat::ChatTransport;
use crate::config::Config;
use crate::generation::generator::RecommendationGenerator;
use crate::notify::Notifier;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable recommendation backend. Default: CatalogRecommendationGenerator.
    pub generator: Arc<dyn RecommendationGenerator>,
    /// Receives "toast" notifications raised by wizard submissions.
    pub notifier: Arc<dyn Notifier>,
    /// Upstream chat endpoint used by the chat relay.
    pub chat: Arc<dyn ChatTransport>,
    pub assessments: Arc<SessionStore<AssessmentSession>>,
    pub chat_threads: Arc<SessionStore<ChatThread>>,
}

impl AppState {
    pub fn new(
        config: Config,
        generator: Arc<dyn RecommendationGenerator>,
        notifier: Arc<dyn Notifier>,
        chat: Arc<dyn ChatTransport>,
    ) -> Self {
        Self {
            config,
            generator,
            notifier,
            chat,
            assessments: Arc::new(SessionStore::new()),
            chat_threads: Arc::new(SessionStore::new()),
        }
    }

    /// Drops assessments and chat threads older than the configured TTL.
    /// Expired assessments that are still submitting get their submission cancelled.
    pub async fn sweep_expired_sessions(&self) -> usize {
        let ttl = self.config.session_ttl;

        let assessments = self.assessments.prune_older_than(ttl).await;
        for session in &assessments {
            session.lock().await.wizard.cancel();
        }
        let threads = self.chat_threads.prune_older_than(ttl).await;

        let removed = assessments.len() + threads.len();
        if removed > 0 {
            info!(
                "Swept {} expired assessments and {} expired chat threads",
                assessments.len(),
                threads.len()
            );
        }
        removed
    }
}
