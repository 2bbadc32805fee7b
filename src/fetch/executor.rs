//! Running requests off the UI thread.

use crate::fetch::{CatalogClient, FetchReply, PageRequest, RequestTicket};
use crate::model::FetchError;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

/// Starts a request and delivers its reply on a channel.
///
/// `execute` must not block on the network. The reply is sent exactly once.
pub trait RequestExecutor {
    /// Start `request`; send the outcome to `reply_to`.
    fn execute(&self, ticket: RequestTicket, request: PageRequest, reply_to: Sender<FetchReply>);
}

/// One worker thread per request.
#[derive(Clone)]
pub struct ThreadExecutor {
    client: Arc<dyn CatalogClient>,
}

impl ThreadExecutor {
    /// Executor backed by `client`.
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }
}

impl RequestExecutor for ThreadExecutor {
    fn execute(&self, ticket: RequestTicket, request: PageRequest, reply_to: Sender<FetchReply>) {
        let client = Arc::clone(&self.client);
        let fallback = reply_to.clone();
        let fallback_request = request.clone();

        let spawned = thread::Builder::new()
            .name(format!("fetch-page-{}", request.page))
            .spawn(move || {
                let result = client.fetch_page(&request);
                // Receiver gone means the app is shutting down.
                let _ = reply_to.send(FetchReply {
                    ticket,
                    request,
                    result,
                });
            });

        if let Err(e) = spawned {
            tracing::error!(error = %e, "failed to spawn fetch thread");
            let url = fallback_request.display_url();
            let _ = fallback.send(FetchReply {
                ticket,
                request: fallback_request,
                result: Err(FetchError::Transport {
                    url,
                    reason: e.to_string(),
                }),
            });
        }
    }
}
