//! Message processing: runs update() to a fixed point and dispatches actions

use lunar_api::Backend;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are handled immediately; actions are spawned and
/// their results arrive later on `msg_tx`.
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    backend: &B,
    msg_tx: &mpsc::Sender<Message>,
) where
    B: Backend + Clone + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            handle_action(action, backend, msg_tx.clone());
        }
        msg = result.message;
    }
}
