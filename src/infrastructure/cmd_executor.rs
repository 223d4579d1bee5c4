use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::cmd::{Cmd, RequestId},
    core::msg::{ListMsg, Msg},
    domain::Listable,
    infrastructure::source::ListSource,
};

/// Runs list commands against a [`ListSource`].
///
/// Every fetch and mutation runs on its own tokio task under a child of the
/// executor's cancellation token. Results come back as messages on `msg_tx`
/// so the state is only ever touched by the loop that owns it.
pub struct CmdExecutor<T> {
    source: Arc<dyn ListSource<T>>,
    msg_tx: mpsc::UnboundedSender<Msg<T>>,
    cancel_token: CancellationToken,
    in_flight: Option<(RequestId, CancellationToken)>,
}

impl<T: Listable> CmdExecutor<T> {
    pub fn new(source: Arc<dyn ListSource<T>>, msg_tx: mpsc::UnboundedSender<Msg<T>>) -> Self {
        Self {
            source,
            msg_tx,
            cancel_token: CancellationToken::new(),
            in_flight: None,
        }
    }

    /// The request whose task is still allowed to report back
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight.as_ref().map(|(request, _)| *request)
    }

    /// Forget `request` once its answer has reached the state; a newer
    /// request stays in flight
    pub fn fetch_settled(&mut self, request: RequestId) {
        if self.in_flight() == Some(request) {
            self.in_flight = None;
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Execute commands in priority order (cancellations first)
    pub fn execute_commands(&mut self, mut cmds: Vec<Cmd<T>>) -> Result<()> {
        cmds.sort_by_key(Cmd::priority);
        for cmd in cmds {
            self.execute_command(cmd)?;
        }
        Ok(())
    }

    pub fn execute_command(&mut self, cmd: Cmd<T>) -> Result<()> {
        if self.is_shut_down() {
            log::debug!("executor shut down, dropping command");
            return Ok(());
        }

        match cmd {
            Cmd::Fetch { request, query } => {
                log::debug!("fetch {request:?}: {}", query.to_query_string());
                let token = self.cancel_token.child_token();
                if let Some((previous, previous_token)) =
                    self.in_flight.replace((request, token.clone()))
                {
                    // Normally already cancelled by the CancelFetch sorted ahead of us
                    if !previous_token.is_cancelled() {
                        log::debug!("fetch {previous:?} superseded by {request:?}");
                        previous_token.cancel();
                    }
                }

                let future = self.source.fetch(query);
                let msg_tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let msg = tokio::select! {
                        _ = token.cancelled() => {
                            log::debug!("fetch {request:?} cancelled");
                            return;
                        }
                        result = future => match result {
                            Ok(page) => ListMsg::Loaded { request, page },
                            Err(e) => ListMsg::LoadFailed { request, error: e.to_string() },
                        },
                    };
                    let _ = msg_tx.send(Msg::List(msg));
                });
            }

            Cmd::CancelFetch { request } => {
                match self.in_flight.take() {
                    Some((current, token)) if current == request => token.cancel(),
                    other => {
                        log::debug!("nothing to cancel for {request:?}");
                        self.in_flight = other;
                    }
                }
            }

            Cmd::Mutate { mutation, op } => {
                log::debug!("mutate {mutation:?}");
                let token = self.cancel_token.child_token();
                let future = self.source.mutate(op);
                let msg_tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => return,
                        result = future => result.map_err(|e| e.to_string()),
                    };
                    let _ = msg_tx.send(Msg::List(ListMsg::MutationSettled { mutation, result }));
                });
            }

            Cmd::ShowError { message } => {
                self.msg_tx
                    .send(Msg::StatusMessageUpdated(format!("[Error] {message}")))
                    .map_err(|_| eyre!("message channel closed"))?;
            }
        }
        Ok(())
    }

    /// Cancel every task this executor started; later commands are dropped
    pub fn shutdown(&mut self) {
        log::info!("shutting down list executor");
        self.cancel_token.cancel();
        self.in_flight = None;
    }
}

impl<T> Drop for CmdExecutor<T> {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
