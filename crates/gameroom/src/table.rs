use super::ServerMessage;
use mc_core::Connection;
use mc_core::ID;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;

/// Connection fanout for one lobby.
///
/// Maps connection ids to outbound channels. Sends are fire-and-forget:
/// a dead channel is logged and skipped, never an error — the disconnect
/// path cleans the entry up when the bridge notices.
#[derive(Debug, Default)]
pub struct Table {
    senders: HashMap<ID<Connection>, UnboundedSender<ServerMessage>>,
}

impl Table {
    /// Registers a connection's outbound channel.
    pub fn connect(&mut self, connection: ID<Connection>, sender: UnboundedSender<ServerMessage>) {
        self.senders.insert(connection, sender);
    }
    /// Drops a connection's outbound channel.
    pub fn disconnect(&mut self, connection: ID<Connection>) {
        self.senders.remove(&connection);
    }
    /// Number of live connections.
    pub fn connected(&self) -> usize {
        self.senders.len()
    }
    /// Sends a message to one connection.
    pub fn unicast(&self, connection: ID<Connection>, message: ServerMessage) {
        match self.senders.get(&connection).map(|tx| tx.send(message)) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[table] unicast to {} failed: {:?}", connection, e),
            None => log::warn!("[table] unicast to {}: no such connection", connection),
        }
    }
    /// Sends a message to every connection.
    pub fn broadcast(&self, message: ServerMessage) {
        for (connection, sender) in self.senders.iter() {
            if let Err(e) = sender.send(message.clone()) {
                log::warn!("[table] broadcast to {} failed: {:?}", connection, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn table_starts_empty() {
        let table = Table::default();
        assert_eq!(table.connected(), 0);
    }
    #[test]
    fn connect_and_disconnect() {
        let mut table = Table::default();
        let id = ID::default();
        let (tx, _rx) = unbounded_channel();
        table.connect(id, tx);
        assert_eq!(table.connected(), 1);
        table.disconnect(id);
        assert_eq!(table.connected(), 0);
    }
    #[test]
    fn broadcast_reaches_every_connection() {
        let mut table = Table::default();
        let (tx_a, mut rx_a) = unbounded_channel();
        let (tx_b, mut rx_b) = unbounded_channel();
        table.connect(ID::default(), tx_a);
        table.connect(ID::default(), tx_b);
        table.broadcast(ServerMessage::err("x".into()));
        assert!(rx_a.try_recv().is_ok());
        assert!(rx_b.try_recv().is_ok());
    }
    #[test]
    fn unicast_reaches_only_the_target() {
        let mut table = Table::default();
        let (tx_a, mut rx_a) = unbounded_channel();
        let (tx_b, mut rx_b) = unbounded_channel();
        let a = ID::default();
        table.connect(a, tx_a);
        table.connect(ID::default(), tx_b);
        table.unicast(a, ServerMessage::err("x".into()));
        assert!(rx_a.try_recv().is_ok());
        assert!(rx_b.try_recv().is_err());
    }
    #[test]
    fn dead_channels_are_tolerated() {
        let mut table = Table::default();
        let (tx, rx) = unbounded_channel();
        let id = ID::default();
        table.connect(id, tx);
        drop(rx);
        table.broadcast(ServerMessage::err("x".into()));
        table.unicast(id, ServerMessage::err("x".into()));
    }
}
