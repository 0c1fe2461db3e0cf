use iced::futures::StreamExt;
use std::sync::Arc;

use iced_runtime::{task::into_stream, Action};

use crate::{api::Api, app::message::Message, app::state::State, notify::Notifier};

/// Drives a panel outside the iced runtime: every task a state transition
/// returns is drained, its output messages are fed back into the panel and
/// recorded so tests can assert on emitted navigation.
pub struct Sandbox<S: State> {
    state: S,
    messages: Vec<Message>,
}

impl<S: State + 'static> Sandbox<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            messages: Vec::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Every message drained out of the tasks, in delivery order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    async fn drain(&mut self, api: &Arc<dyn Api>, notifier: &Arc<dyn Notifier>, task: iced::Task<Message>) {
        let mut tasks = vec![task];
        while let Some(task) = tasks.pop() {
            if let Some(mut stream) = into_stream(task) {
                while let Some(action) = stream.next().await {
                    if let Action::Output(msg) = action {
                        self.messages.push(msg.clone());
                        tasks.push(self.state.update(api.clone(), notifier.as_ref(), msg));
                    }
                }
            }
        }
    }

    pub async fn update(
        mut self,
        api: Arc<dyn Api>,
        notifier: Arc<dyn Notifier>,
        message: Message,
    ) -> Self {
        let task = self.state.update(api.clone(), notifier.as_ref(), message);
        self.drain(&api, &notifier, task).await;
        self
    }

    pub async fn load(mut self, api: Arc<dyn Api>, notifier: Arc<dyn Notifier>) -> Self {
        let task = self.state.reload(api.clone());
        self.drain(&api, &notifier, task).await;
        self
    }
}
