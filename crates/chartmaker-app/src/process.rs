//! Message processing loop

use crate::handler;
use crate::message::Message;
use crate::state::ChartMakerState;

/// Process a message through the TEA update function, draining follow-ups
pub fn process_message(state: &mut ChartMakerState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}
