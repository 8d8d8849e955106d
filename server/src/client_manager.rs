//! Transport-side registry of connected clients.
//!
//! Tracks which UDP peers currently hold a player session: address to id
//! resolution for inbound datagrams, liveness driven by any traffic from a
//! known peer, and the timeout sweep that retires peers gone quiet.
//!
//! This registry is transport bookkeeping only. Player state (position,
//! score, username) lives in the game state, keyed by the same id.

use log::info;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

/// How long a peer may stay silent before the sweep retires it. Clients
/// heartbeat once a second, so five seconds means five missed beats.
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

/// One connected peer as the transport layer sees it.
#[derive(Debug)]
pub struct Client {
    /// Session id assigned at connect time, shared with the game state.
    pub id: u32,
    /// Where replies and broadcasts for this session are sent.
    pub addr: SocketAddr,
    /// Arrival time of the most recent datagram from this peer.
    pub last_seen: Instant,
}

impl Client {
    pub fn new(id: u32, addr: SocketAddr) -> Self {
        Self {
            id,
            addr,
            last_seen: Instant::now(),
        }
    }

    /// True once the peer has been silent longer than `timeout`.
    pub fn is_timed_out(&self, timeout: Duration) -> bool {
        self.last_seen.elapsed() > timeout
    }
}

/// Roster of live transport sessions.
///
/// Ids start at 1, grow monotonically and are never reused, so a
/// reconnecting peer always comes back as a brand-new identity. The same
/// ids key the player sessions in the game state.
pub struct ClientManager {
    clients: HashMap<u32, Client>,
    next_client_id: u32,
}

impl ClientManager {
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
            next_client_id: 1,
        }
    }

    /// Registers a peer and hands out its session id. Connecting cannot
    /// fail; there is no capacity cap.
    pub fn add_client(&mut self, addr: SocketAddr) -> u32 {
        let client_id = self.next_client_id;
        self.next_client_id += 1;

        info!("Client {} connected from {}", client_id, addr);
        self.clients.insert(client_id, Client::new(client_id, addr));

        client_id
    }

    /// Drops a peer from the roster. Idempotent; covers explicit
    /// disconnects, timeouts and reconnect retirement alike.
    pub fn remove_client(&mut self, client_id: u32) -> bool {
        if let Some(client) = self.clients.remove(&client_id) {
            info!("Client {} disconnected", client.id);
            true
        } else {
            false
        }
    }

    /// Resolves a datagram's source address to its session id, if the
    /// peer currently holds one.
    pub fn find_client_by_addr(&self, addr: SocketAddr) -> Option<u32> {
        self.clients
            .values()
            .find(|client| client.addr == addr)
            .map(|client| client.id)
    }

    /// Refreshes a peer's liveness stamp. Called for every datagram from
    /// a known peer, heartbeats included, so an active player never times
    /// out. Returns false for an unknown id.
    pub fn mark_active(&mut self, client_id: u32) -> bool {
        match self.clients.get_mut(&client_id) {
            Some(client) => {
                client.last_seen = Instant::now();
                true
            }
            None => false,
        }
    }

    /// Retires every peer silent past [`CLIENT_TIMEOUT`] and returns their
    /// ids, so the caller can drop the matching player sessions and tell
    /// everyone else about it.
    pub fn check_timeouts(&mut self) -> Vec<u32> {
        let timed_out: Vec<u32> = self
            .clients
            .values()
            .filter(|client| client.is_timed_out(CLIENT_TIMEOUT))
            .map(|client| client.id)
            .collect();

        for client_id in &timed_out {
            self.remove_client(*client_id);
        }

        timed_out
    }

    /// Every live session with its delivery address, for broadcast fan-out.
    pub fn get_client_addrs(&self) -> Vec<(u32, SocketAddr)> {
        self.clients
            .values()
            .map(|client| (client.id, client.addr))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(port: u16) -> SocketAddr {
        format!("127.0.0.1:{}", port).parse().unwrap()
    }

    #[test]
    fn test_new_client_is_live() {
        let client = Client::new(1, addr(4000));

        assert_eq!(client.id, 1);
        assert_eq!(client.addr, addr(4000));
        assert!(!client.is_timed_out(CLIENT_TIMEOUT));
    }

    #[test]
    fn test_client_times_out_after_silence() {
        let mut client = Client::new(1, addr(4000));
        assert!(!client.is_timed_out(Duration::from_secs(1)));

        client.last_seen = Instant::now() - Duration::from_secs(2);
        assert!(client.is_timed_out(Duration::from_secs(1)));
    }

    #[test]
    fn test_ids_count_up_from_one() {
        let mut manager = ClientManager::new();
        assert!(manager.is_empty());

        assert_eq!(manager.add_client(addr(4000)), 1);
        assert_eq!(manager.add_client(addr(4001)), 2);
        assert_eq!(manager.add_client(addr(4002)), 3);
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut manager = ClientManager::new();

        let first = manager.add_client(addr(4000));
        manager.remove_client(first);

        // The same peer reconnecting gets a fresh identity.
        let second = manager.add_client(addr(4000));
        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn test_remove_client_is_idempotent() {
        let mut manager = ClientManager::new();
        let id = manager.add_client(addr(4000));

        assert!(manager.remove_client(id));
        assert!(!manager.remove_client(id));
        assert!(!manager.remove_client(999));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_find_client_by_addr() {
        let mut manager = ClientManager::new();
        let first = manager.add_client(addr(4000));
        manager.add_client(addr(4001));

        assert_eq!(manager.find_client_by_addr(addr(4000)), Some(first));
        assert_eq!(manager.find_client_by_addr(addr(9999)), None);
    }

    #[test]
    fn test_mark_active_resets_the_clock() {
        let mut manager = ClientManager::new();
        let id = manager.add_client(addr(4000));

        manager.clients.get_mut(&id).unwrap().last_seen =
            Instant::now() - CLIENT_TIMEOUT - Duration::from_secs(5);
        assert!(manager.mark_active(id));

        assert!(manager.check_timeouts().is_empty());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_mark_active_unknown_client() {
        let mut manager = ClientManager::new();
        assert!(!manager.mark_active(404));
    }

    #[test]
    fn test_sweep_retires_only_stale_clients() {
        let mut manager = ClientManager::new();
        let stale = manager.add_client(addr(4000));
        let fresh = manager.add_client(addr(4001));

        manager.clients.get_mut(&stale).unwrap().last_seen =
            Instant::now() - CLIENT_TIMEOUT - Duration::from_secs(1);

        assert_eq!(manager.check_timeouts(), vec![stale]);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.find_client_by_addr(addr(4000)), None);
        assert_eq!(manager.find_client_by_addr(addr(4001)), Some(fresh));
    }

    #[test]
    fn test_client_addrs_cover_the_roster() {
        let mut manager = ClientManager::new();
        let first = manager.add_client(addr(4000));
        let second = manager.add_client(addr(4001));

        let mut addrs = manager.get_client_addrs();
        addrs.sort_by_key(|(id, _)| *id);
        assert_eq!(addrs, vec![(first, addr(4000)), (second, addr(4001))]);
    }
}
