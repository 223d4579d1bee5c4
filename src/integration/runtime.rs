use std::collections::VecDeque;
use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        msg::{ListMsg, Msg},
        state::{AppState, ListState},
        update::update,
    },
    domain::Listable,
    infrastructure::{cmd_executor::CmdExecutor, source::ListSource},
};

/// Owns one list view's state and serializes every change to it.
///
/// Messages from the UI are queued with [`ListRuntime::send_msg`]; messages
/// from background tasks arrive on an internal channel. Both are drained by
/// [`ListRuntime::run_update_cycle`], which then executes the resulting
/// commands. Dropping the runtime cancels all of its tasks.
pub struct ListRuntime<T> {
    state: AppState<T>,
    msg_queue: VecDeque<Msg<T>>,
    msg_tx: mpsc::UnboundedSender<Msg<T>>,
    msg_rx: mpsc::UnboundedReceiver<Msg<T>>,
    executor: CmdExecutor<T>,
    processed: usize,
}

impl<T: Listable> ListRuntime<T> {
    pub fn new(initial_state: AppState<T>, source: Arc<dyn ListSource<T>>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new(source, msg_tx.clone());
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            executor,
            processed: 0,
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState<T> {
        &self.state
    }

    pub fn send_msg(&mut self, msg: impl Into<Msg<T>>) {
        self.msg_queue.push_back(msg.into());
    }

    /// Sender for messages produced outside the runtime
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg<T>> {
        self.msg_tx.clone()
    }

    /// Apply one message and return the commands it produced (not executed)
    pub fn process_message(&mut self, msg: Msg<T>) -> Vec<Cmd<T>> {
        if !msg.is_frequent() {
            log::trace!("processing {msg:?}");
        }
        if let Msg::List(
            ListMsg::Loaded { request, .. } | ListMsg::LoadFailed { request, .. },
        ) = &msg
        {
            self.executor.fetch_settled(*request);
        }
        let placeholder = AppState::new(String::new(), ListState::default());
        let state = std::mem::replace(&mut self.state, placeholder);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;
        self.processed += 1;
        commands
    }

    /// Drain queued and received messages; returns every command produced
    pub fn process_all_messages(&mut self) -> Vec<Cmd<T>> {
        let mut all_commands = Vec::new();

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<()> {
        let commands = self.process_all_messages();
        if commands.is_empty() {
            return Ok(());
        }
        self.executor.execute_commands(commands)
    }

    /// Wait for the next message from a background task and queue it.
    /// Returns `false` when no more messages can arrive.
    pub async fn recv(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.msg_queue.push_back(msg);
                true
            }
            None => false,
        }
    }

    /// Cancel in-flight work; the view is going away
    pub fn shutdown(&mut self) {
        self.executor.shutdown();
    }

    pub fn get_stats(&self) -> RuntimeStats {
        let state = self.state();
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            processed_messages: self.processed,
            in_flight: self.executor.in_flight(),
            pending_mutations: state.list.pending_mutations().len(),
            is_loading: state.list.is_loading(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub processed_messages: usize,
    pub in_flight: Option<crate::core::cmd::RequestId>,
    pub pending_mutations: usize,
    pub is_loading: bool,
}
