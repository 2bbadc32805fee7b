//! Issues a request per query change and applies the replies.

use crate::fetch::{FetchReply, RequestExecutor, RequestTicket, ResponseOrdering};
use crate::state::AppState;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Watches the query and drives the request lifecycle.
///
/// [`FetchController::sync`] issues one request whenever the query's
/// revision differs from the last one requested. [`FetchController::poll`]
/// drains finished replies into the state. Both run on the UI thread.
///
/// Replies tagged with a generation older than the card collection's are
/// discarded, so a page requested before a search commit never lands in the
/// new list. Within a generation, [`ResponseOrdering::Sequenced`] holds
/// early arrivals until every earlier request has resolved.
pub struct FetchController<E: RequestExecutor> {
    executor: E,
    ordering: ResponseOrdering,
    tx: Sender<FetchReply>,
    rx: Receiver<FetchReply>,
    requested_revision: Option<u64>,
    next_sequence: u64,
    unresolved: BTreeSet<(u64, u64)>,
    held: BTreeMap<u64, FetchReply>,
}

impl<E: RequestExecutor> FetchController<E> {
    /// Controller that has not issued anything yet.
    pub fn new(executor: E, ordering: ResponseOrdering) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            executor,
            ordering,
            tx,
            rx,
            requested_revision: None,
            next_sequence: 0,
            unresolved: BTreeSet::new(),
            held: BTreeMap::new(),
        }
    }

    /// The executor requests are handed to.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Requests issued but not yet applied or discarded.
    pub fn pending(&self) -> usize {
        self.unresolved.len() + self.held.len()
    }

    /// Issue a request if the query changed since the last one.
    ///
    /// Returns whether a request was issued. The first call always issues.
    pub fn sync(&mut self, state: &mut AppState) -> bool {
        let revision = state.query().revision();
        if self.requested_revision == Some(revision) {
            return false;
        }
        self.requested_revision = Some(revision);

        let ticket = RequestTicket {
            generation: state.cards().generation(),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        let request = state.query().request();
        tracing::info!(
            page = request.page,
            page_size = request.page_size,
            name = request.name.as_deref().unwrap_or(""),
            sequence = ticket.sequence,
            "fetching cards"
        );

        state.cards_mut().begin_request();
        self.unresolved.insert((ticket.generation, ticket.sequence));
        self.executor.execute(ticket, request, self.tx.clone());
        true
    }

    /// Apply every reply that has arrived. Never blocks.
    ///
    /// Returns whether the state changed.
    pub fn poll(&mut self, state: &mut AppState) -> bool {
        let mut changed = self.drop_stale_held(state);

        loop {
            match self.rx.try_recv() {
                Ok(reply) => changed |= self.accept(state, reply),
                Err(TryRecvError::Empty) => break,
                // The controller holds a sender, so this cannot happen.
                Err(TryRecvError::Disconnected) => break,
            }
        }

        changed
    }

    fn accept(&mut self, state: &mut AppState, reply: FetchReply) -> bool {
        let ticket = reply.ticket;
        self.unresolved.remove(&(ticket.generation, ticket.sequence));

        if ticket.generation != state.cards().generation() {
            tracing::debug!(
                page = reply.request.page,
                sequence = ticket.sequence,
                "discarding reply for cleared list"
            );
            state.cards_mut().end_request();
            return true;
        }

        match self.ordering {
            ResponseOrdering::Arrival => {
                apply(state, reply);
                true
            }
            ResponseOrdering::Sequenced => {
                self.held.insert(ticket.sequence, reply);
                self.release_held(state)
            }
        }
    }

    /// Apply held replies in sequence order, stopping at the first one with
    /// an earlier request still unresolved.
    fn release_held(&mut self, state: &mut AppState) -> bool {
        let generation = state.cards().generation();
        let mut changed = false;

        while let Some(entry) = self.held.first_entry() {
            let sequence = *entry.key();
            let blocked = self
                .unresolved
                .range((generation, 0)..(generation, sequence))
                .next()
                .is_some();
            if blocked {
                break;
            }
            apply(state, entry.remove());
            changed = true;
        }

        changed
    }

    fn drop_stale_held(&mut self, state: &mut AppState) -> bool {
        let generation = state.cards().generation();
        let before = self.held.len();
        self.held.retain(|_, reply| {
            let keep = reply.ticket.generation == generation;
            if !keep {
                state.cards_mut().end_request();
            }
            keep
        });
        let dropped = before != self.held.len();

        // Anything held behind a request from the old generation may now go.
        dropped | self.release_held(state)
    }
}

fn apply(state: &mut AppState, reply: FetchReply) {
    match reply.result {
        Ok(page) => {
            tracing::info!(
                page = reply.request.page,
                count = page.cards.len(),
                "cards received"
            );
            state.apply_page(page);
        }
        Err(error) => {
            tracing::warn!(page = reply.request.page, error = %error, "fetch failed");
            state.record_fetch_error(error);
        }
    }
    state.cards_mut().end_request();
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
