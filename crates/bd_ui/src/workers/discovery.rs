//! Forwarding discovery events into the iced update loop.

use iced::futures::channel::mpsc;
use iced::futures::{SinkExt, Stream};

use bd_core::discovery::event_channel;

use crate::app::Message;

/// Stream behind the discovery subscription.
///
/// Creates the event channel, hands its sending half to the application as
/// [`Message::EventsReady`], then forwards every event as
/// [`Message::Discovery`] for as long as the application keeps a sender.
pub fn discovery_events() -> impl Stream<Item = Message> {
    iced::stream::channel(100, |mut output: mpsc::Sender<Message>| async move {
        let (events, mut receiver) = event_channel();

        if output.send(Message::EventsReady(events)).await.is_err() {
            return;
        }

        while let Some(event) = receiver.recv().await {
            if output.send(Message::Discovery(event)).await.is_err() {
                break;
            }
        }

        tracing::debug!("Discovery event channel closed");
    })
}
