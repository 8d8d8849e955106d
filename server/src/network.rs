//! UDP transport and the server run loop.
//!
//! Datagrams arrive on a receiver task and are handed to the run loop as
//! messages; the loop applies them to the game state and queues outbound
//! packets on a FIFO channel drained by a single sender task, which keeps
//! events on the wire in emission order. The loop's other arm fires the
//! 30 Hz simulation tick. Game state is only ever touched from the run
//! loop, so command handling and ticks interleave without locks.

use crate::client_manager::ClientManager;
use crate::game::{GameState, TickEvent};
use bincode::{deserialize, serialize};
use log::{debug, error, info, warn};
use shared::{Packet, FIELD_HEIGHT, FIELD_WIDTH, TICK_RATE};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, RwLock};
use tokio::time::{interval, MissedTickBehavior};

/// Inbound traffic and transport faults, as delivered to the run loop.
#[derive(Debug)]
pub enum ServerMessage {
    PacketReceived {
        packet: Packet,
        addr: SocketAddr,
    },
    ClientTimeout {
        client_id: u32,
    },
    #[allow(dead_code)]
    Shutdown,
}

/// Outbound work for the sender task.
#[derive(Debug)]
pub enum OutboundMessage {
    /// One packet to one peer.
    SendPacket { packet: Packet, addr: SocketAddr },
    /// One packet to every connected peer, optionally skipping a session
    /// (a fresh joiner already holds its own init).
    BroadcastPacket { packet: Packet, exclude: Option<u32> },
}

/// The authoritative pillow fight server.
///
/// Owns the game state outright; the receiver, sender and sweeper tasks
/// only ever talk to the run loop through channels, never to the state,
/// so simulation steps never race with packet handling.
pub struct Server {
    socket: Arc<UdpSocket>,
    clients: Arc<RwLock<ClientManager>>,
    game_state: GameState,
    tick_duration: Duration,

    inbound_tx: mpsc::UnboundedSender<ServerMessage>,
    inbound_rx: mpsc::UnboundedReceiver<ServerMessage>,
    outbound_tx: mpsc::UnboundedSender<OutboundMessage>,
    outbound_rx: mpsc::UnboundedReceiver<OutboundMessage>,
}

impl Server {
    pub async fn new(addr: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let socket = Arc::new(UdpSocket::bind(addr).await?);
        info!("Server listening on {}", addr);

        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();

        Ok(Server {
            socket,
            clients: Arc::new(RwLock::new(ClientManager::new())),
            game_state: GameState::new(),
            tick_duration: Duration::from_millis(1000 / TICK_RATE as u64),
            inbound_tx,
            inbound_rx,
            outbound_tx,
            outbound_rx,
        })
    }

    /// Address the UDP socket is actually bound to, useful after binding
    /// port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Spawns the task that turns datagrams into run-loop messages.
    async fn spawn_network_receiver(&self) {
        let socket = Arc::clone(&self.socket);
        let inbound_tx = self.inbound_tx.clone();

        tokio::spawn(async move {
            let mut buffer = [0u8; 2048];

            loop {
                match socket.recv_from(&mut buffer).await {
                    Ok((len, addr)) => match deserialize::<Packet>(&buffer[..len]) {
                        Ok(packet) => {
                            if inbound_tx
                                .send(ServerMessage::PacketReceived { packet, addr })
                                .is_err()
                            {
                                // Run loop is gone; nothing left to feed.
                                break;
                            }
                        }
                        // Undecodable datagrams are dropped without a
                        // reply; the protocol has no error channel.
                        Err(_) => {
                            warn!("Dropping undecodable {}-byte datagram from {}", len, addr)
                        }
                    },
                    Err(e) => {
                        error!("Error receiving datagram: {}", e);
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    }
                }
            }
        });
    }

    /// Spawns the task that drains the outbound queue onto the socket.
    /// Single consumer, FIFO, so broadcasts reach the wire in the order
    /// the simulation emitted them.
    async fn spawn_network_sender(&mut self) {
        let socket = Arc::clone(&self.socket);
        let clients = Arc::clone(&self.clients);
        let mut outbound_rx = std::mem::replace(&mut self.outbound_rx, mpsc::unbounded_channel().1);

        tokio::spawn(async move {
            while let Some(message) = outbound_rx.recv().await {
                match message {
                    OutboundMessage::SendPacket { packet, addr } => {
                        if let Err(e) = Self::transmit(&socket, &packet, addr).await {
                            error!("Failed to send packet to {}: {}", addr, e);
                        }
                    }
                    OutboundMessage::BroadcastPacket { packet, exclude } => {
                        let roster = {
                            let clients = clients.read().await;
                            clients.get_client_addrs()
                        };

                        for (client_id, addr) in roster {
                            if exclude == Some(client_id) {
                                continue;
                            }
                            if let Err(e) = Self::transmit(&socket, &packet, addr).await {
                                error!("Failed to send to client {}: {}", client_id, e);
                            }
                        }
                    }
                }
            }
        });
    }

    /// Spawns the task that retires peers gone silent, on a one-second
    /// cadence. Retirements are routed through the run loop so session
    /// cleanup and the leave broadcast happen on the same thread of
    /// control as every other mutation.
    async fn spawn_timeout_sweeper(&self) {
        let clients = Arc::clone(&self.clients);
        let inbound_tx = self.inbound_tx.clone();

        tokio::spawn(async move {
            let mut sweep = interval(Duration::from_secs(1));

            loop {
                sweep.tick().await;

                let timed_out = {
                    let mut clients = clients.write().await;
                    clients.check_timeouts()
                };

                for client_id in timed_out {
                    if inbound_tx
                        .send(ServerMessage::ClientTimeout { client_id })
                        .is_err()
                    {
                        return;
                    }
                }
            }
        });
    }

    async fn transmit(
        socket: &UdpSocket,
        packet: &Packet,
        addr: SocketAddr,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let data = serialize(packet)?;
        socket.send_to(&data, addr).await?;
        Ok(())
    }

    /// Queues one packet for one peer.
    async fn send_packet(&self, packet: &Packet, addr: SocketAddr) {
        if let Err(e) = self.outbound_tx.send(OutboundMessage::SendPacket {
            packet: packet.clone(),
            addr,
        }) {
            error!("Failed to queue packet for sending: {}", e);
        }
    }

    /// Queues one packet for every connected peer, minus the excluded
    /// session if any.
    async fn broadcast_packet(&self, packet: &Packet, exclude: Option<u32>) {
        if let Err(e) = self.outbound_tx.send(OutboundMessage::BroadcastPacket {
            packet: packet.clone(),
            exclude,
        }) {
            error!("Failed to queue broadcast packet: {}", e);
        }
    }

    /// Resolves the sender's session and refreshes its liveness. Commands
    /// from addresses without a session resolve to `None` and are dropped
    /// by the callers.
    async fn client_id_for(&self, addr: SocketAddr) -> Option<u32> {
        let mut clients = self.clients.write().await;
        let client_id = clients.find_client_by_addr(addr)?;
        clients.mark_active(client_id);
        Some(client_id)
    }

    /// Applies one client command to the game state and queues whatever
    /// the rest of the arena needs to hear about it.
    async fn handle_packet(&mut self, packet: Packet, addr: SocketAddr) {
        match packet {
            Packet::Connect { client_version } => {
                info!(
                    "Client connecting from {} (version: {})",
                    addr, client_version
                );

                // A reconnect from a known address retires the old session
                // first; the new connection always gets a fresh identity.
                let existing_client_id = {
                    let clients = self.clients.read().await;
                    clients.find_client_by_addr(addr)
                };

                if let Some(existing_id) = existing_client_id {
                    info!("Retiring existing client {} from {}", existing_id, addr);
                    {
                        let mut clients = self.clients.write().await;
                        clients.remove_client(existing_id);
                    }
                    self.game_state.remove_player(existing_id);
                    self.broadcast_packet(&Packet::PlayerLeft { id: existing_id }, None)
                        .await;
                }

                let client_id = {
                    let mut clients = self.clients.write().await;
                    clients.add_client(addr)
                };

                let player = self.game_state.add_player(client_id);
                let init = Packet::Init {
                    id: client_id,
                    players: self.game_state.players.values().cloned().collect(),
                    field_width: FIELD_WIDTH,
                    field_height: FIELD_HEIGHT,
                };
                self.send_packet(&init, addr).await;
                self.broadcast_packet(&Packet::PlayerJoined { player }, Some(client_id))
                    .await;
            }

            Packet::SetUsername { username } => {
                if let Some(client_id) = self.client_id_for(addr).await {
                    // Names that trim to nothing change nothing and are
                    // not announced.
                    if let Some(player) = self.game_state.set_username(client_id, &username) {
                        self.broadcast_packet(&Packet::PlayerUpdated { player }, None)
                            .await;
                    }
                }
            }

            Packet::Move { direction } => {
                if let Some(client_id) = self.client_id_for(addr).await {
                    if let Some((x, y)) = self.game_state.move_player(client_id, direction) {
                        self.broadcast_packet(&Packet::PlayerMoved { id: client_id, x, y }, None)
                            .await;
                    }
                }
            }

            Packet::Shoot {
                velocity_x,
                velocity_y,
            } => {
                if let Some(client_id) = self.client_id_for(addr).await {
                    if let Some(pillow) =
                        self.game_state
                            .spawn_pillow(client_id, velocity_x, velocity_y)
                    {
                        self.broadcast_packet(&Packet::PillowShot { pillow }, None)
                            .await;
                    }
                }
            }

            Packet::Heartbeat { .. } => {
                // Liveness refresh only; no reply, no broadcast.
                let _ = self.client_id_for(addr).await;
            }

            Packet::Disconnect => {
                let client_id = {
                    let clients = self.clients.read().await;
                    clients.find_client_by_addr(addr)
                };

                if let Some(client_id) = client_id {
                    {
                        let mut clients = self.clients.write().await;
                        clients.remove_client(client_id);
                    }
                    self.game_state.remove_player(client_id);
                    self.broadcast_packet(&Packet::PlayerLeft { id: client_id }, None)
                        .await;
                }
            }

            _ => {
                warn!("Unexpected packet type from client at {}", addr);
            }
        }
    }

    /// Fans one tick's events out to every client, in the order the
    /// simulation produced them.
    async fn broadcast_tick_events(&self, events: Vec<TickEvent>) {
        for event in events {
            let packet = match event {
                TickEvent::PlayerHit {
                    shooter_id,
                    target_id,
                    score,
                } => Packet::PlayerHit {
                    shooter_id,
                    target_id,
                    score,
                },
                TickEvent::PillowRemoved { id } => Packet::PillowRemoved { id },
            };
            self.broadcast_packet(&packet, None).await;
        }
    }

    /// Broadcasts the authoritative pillow snapshot that lets clients
    /// which missed an event converge anyway. Skipped while nobody is
    /// connected; there is no one to reconcile.
    async fn broadcast_pillow_snapshot(&self) {
        let connected = {
            let clients = self.clients.read().await;
            clients.len()
        };
        if connected == 0 {
            return;
        }

        self.broadcast_packet(
            &Packet::PillowsUpdate {
                pillows: self.game_state.pillows.clone(),
            },
            None,
        )
        .await;
    }

    /// Runs the server: spawns the transport tasks, then alternates
    /// between applying client commands and stepping the simulation until
    /// the process is shut down.
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.spawn_network_receiver().await;
        self.spawn_network_sender().await;
        self.spawn_timeout_sweeper().await;

        let mut tick_interval = interval(self.tick_duration);
        // A stalled tick is skipped rather than replayed in a burst.
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("Server started successfully");

        loop {
            tokio::select! {
                // Client commands and transport faults, in arrival order.
                message = self.inbound_rx.recv() => {
                    match message {
                        Some(ServerMessage::PacketReceived { packet, addr }) => {
                            self.handle_packet(packet, addr).await;
                        },
                        Some(ServerMessage::ClientTimeout { client_id }) => {
                            info!("Client {} timed out", client_id);
                            self.game_state.remove_player(client_id);
                            self.broadcast_packet(&Packet::PlayerLeft { id: client_id }, None).await;
                        },
                        Some(ServerMessage::Shutdown) | None => {
                            info!("Server shutting down");
                            break;
                        }
                    }
                },

                // Fixed-rate simulation step.
                _ = tick_interval.tick() => {
                    let events = self.game_state.tick(unix_millis());
                    self.broadcast_tick_events(events).await;
                    self.broadcast_pillow_snapshot().await;

                    if self.game_state.tick_count % 60 == 0 {
                        let connected = {
                            let clients = self.clients.read().await;
                            clients.len()
                        };

                        if connected > 0 {
                            debug!("Tick {}: {} clients, {} pillows in flight",
                                   self.game_state.tick_count, connected,
                                   self.game_state.pillows.len());
                        }
                    }
                },
            }
        }

        Ok(())
    }
}

/// Milliseconds since the unix epoch, clamped instead of panicking on a
/// clock set before 1970.
fn unix_millis() -> u64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_millis();
    millis.min(u64::MAX as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Direction;
    use tokio_test::block_on;

    fn peer(port: u16) -> SocketAddr {
        format!("127.0.0.1:{}", port).parse().unwrap()
    }

    /// Pops everything currently queued for the sender task. The sender
    /// is never spawned in these tests, so the queue holds exactly what
    /// the handlers produced.
    fn drain_outbound(server: &mut Server) -> Vec<OutboundMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = server.outbound_rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    async fn connect_from(server: &mut Server, addr: SocketAddr) -> u32 {
        server
            .handle_packet(Packet::Connect { client_version: 1 }, addr)
            .await;
        let id = {
            let clients = server.clients.read().await;
            clients
                .find_client_by_addr(addr)
                .expect("connect did not register the peer")
        };
        drain_outbound(server);
        id
    }

    #[test]
    fn test_connect_queues_init_then_join_announcement() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            server
                .handle_packet(Packet::Connect { client_version: 1 }, peer(5000))
                .await;

            assert_eq!(server.game_state.players.len(), 1);

            let outbound = drain_outbound(&mut server);
            assert_eq!(outbound.len(), 2);

            match &outbound[0] {
                OutboundMessage::SendPacket {
                    packet:
                        Packet::Init {
                            id,
                            players,
                            field_width,
                            field_height,
                        },
                    addr,
                } => {
                    assert_eq!(*id, 1);
                    assert_eq!(players.len(), 1);
                    assert_eq!(*field_width, FIELD_WIDTH);
                    assert_eq!(*field_height, FIELD_HEIGHT);
                    assert_eq!(*addr, peer(5000));
                }
                other => panic!("Expected init to the new peer, got {:?}", other),
            }

            match &outbound[1] {
                OutboundMessage::BroadcastPacket {
                    packet: Packet::PlayerJoined { player },
                    exclude,
                } => {
                    assert_eq!(player.id, 1);
                    assert_eq!(*exclude, Some(1));
                }
                other => panic!("Expected join broadcast, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_reconnect_retires_the_old_session() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            connect_from(&mut server, peer(5000)).await;

            server
                .handle_packet(Packet::Connect { client_version: 1 }, peer(5000))
                .await;

            assert!(!server.game_state.players.contains_key(&1));
            assert!(server.game_state.players.contains_key(&2));

            let outbound = drain_outbound(&mut server);
            assert_eq!(outbound.len(), 3);
            assert!(matches!(
                &outbound[0],
                OutboundMessage::BroadcastPacket {
                    packet: Packet::PlayerLeft { id: 1 },
                    exclude: None,
                }
            ));
            assert!(matches!(
                &outbound[1],
                OutboundMessage::SendPacket {
                    packet: Packet::Init { id: 2, .. },
                    ..
                }
            ));
            assert!(matches!(
                &outbound[2],
                OutboundMessage::BroadcastPacket {
                    packet: Packet::PlayerJoined { .. },
                    exclude: Some(2),
                }
            ));
        });
    }

    #[test]
    fn test_commands_from_unknown_peers_are_dropped() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();

            server
                .handle_packet(
                    Packet::Move {
                        direction: Direction::Up,
                    },
                    peer(5000),
                )
                .await;
            server
                .handle_packet(
                    Packet::Shoot {
                        velocity_x: 1.0,
                        velocity_y: 0.0,
                    },
                    peer(5000),
                )
                .await;
            server
                .handle_packet(
                    Packet::SetUsername {
                        username: "Ghost".to_string(),
                    },
                    peer(5000),
                )
                .await;
            server.handle_packet(Packet::Disconnect, peer(5000)).await;

            assert!(server.game_state.players.is_empty());
            assert!(server.game_state.pillows.is_empty());
            assert!(drain_outbound(&mut server).is_empty());
        });
    }

    #[test]
    fn test_move_command_is_applied_and_broadcast() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            let id = connect_from(&mut server, peer(5000)).await;

            let player = server.game_state.players.get_mut(&id).unwrap();
            player.x = 100.0;
            player.y = 100.0;

            server
                .handle_packet(
                    Packet::Move {
                        direction: Direction::Right,
                    },
                    peer(5000),
                )
                .await;

            let outbound = drain_outbound(&mut server);
            match &outbound[..] {
                [OutboundMessage::BroadcastPacket {
                    packet: Packet::PlayerMoved { id: moved, x, y },
                    exclude: None,
                }] => {
                    assert_eq!(*moved, id);
                    assert_eq!((*x, *y), (105.0, 100.0));
                }
                other => panic!("Expected one move broadcast, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_shoot_spawns_pillow_at_body_center() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            let id = connect_from(&mut server, peer(5000)).await;

            let player = server.game_state.players.get_mut(&id).unwrap();
            player.x = 60.0;
            player.y = 80.0;

            server
                .handle_packet(
                    Packet::Shoot {
                        velocity_x: 0.0,
                        velocity_y: -1.0,
                    },
                    peer(5000),
                )
                .await;

            assert_eq!(server.game_state.pillows.len(), 1);

            let outbound = drain_outbound(&mut server);
            match &outbound[..] {
                [OutboundMessage::BroadcastPacket {
                    packet: Packet::PillowShot { pillow },
                    exclude: None,
                }] => {
                    assert_eq!(pillow.shooter_id, id);
                    assert_eq!((pillow.x, pillow.y), (80.0, 100.0));
                    assert_eq!((pillow.velocity_x, pillow.velocity_y), (0.0, -1.0));
                }
                other => panic!("Expected one shot broadcast, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_rename_rules() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            connect_from(&mut server, peer(5000)).await;

            // Whitespace-only input changes nothing and is not announced.
            server
                .handle_packet(
                    Packet::SetUsername {
                        username: "   ".to_string(),
                    },
                    peer(5000),
                )
                .await;
            assert!(drain_outbound(&mut server).is_empty());
            assert_eq!(server.game_state.players[&1].username, "Player0");

            server
                .handle_packet(
                    Packet::SetUsername {
                        username: "  Ada  ".to_string(),
                    },
                    peer(5000),
                )
                .await;
            let outbound = drain_outbound(&mut server);
            match &outbound[..] {
                [OutboundMessage::BroadcastPacket {
                    packet: Packet::PlayerUpdated { player },
                    exclude: None,
                }] => {
                    assert_eq!(player.username, "Ada");
                }
                other => panic!("Expected one rename broadcast, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_heartbeat_is_silent() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            let id = connect_from(&mut server, peer(5000)).await;

            server
                .handle_packet(Packet::Heartbeat { timestamp: 42 }, peer(5000))
                .await;

            assert!(server.game_state.players.contains_key(&id));
            assert!(drain_outbound(&mut server).is_empty());
        });
    }

    #[test]
    fn test_disconnect_retires_session_and_announces() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            let id = connect_from(&mut server, peer(5000)).await;

            server.handle_packet(Packet::Disconnect, peer(5000)).await;

            assert!(server.game_state.players.is_empty());
            assert!(server.clients.read().await.is_empty());

            let outbound = drain_outbound(&mut server);
            match &outbound[..] {
                [OutboundMessage::BroadcastPacket {
                    packet: Packet::PlayerLeft { id: left },
                    exclude: None,
                }] => {
                    assert_eq!(*left, id);
                }
                other => panic!("Expected one leave broadcast, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_server_bound_packets_are_ignored() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            connect_from(&mut server, peer(5000)).await;

            // A client echoing a server event back must not mutate
            // anything.
            server
                .handle_packet(Packet::PlayerLeft { id: 1 }, peer(5000))
                .await;

            assert!(server.game_state.players.contains_key(&1));
            assert!(drain_outbound(&mut server).is_empty());
        });
    }

    #[test]
    fn test_tick_events_and_snapshot_queue_in_order() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            connect_from(&mut server, peer(5000)).await;

            let events = vec![
                TickEvent::PlayerHit {
                    shooter_id: 1,
                    target_id: 2,
                    score: 3,
                },
                TickEvent::PillowRemoved { id: 9 },
            ];
            server.broadcast_tick_events(events).await;
            server.broadcast_pillow_snapshot().await;

            let outbound = drain_outbound(&mut server);
            assert_eq!(outbound.len(), 3);
            assert!(matches!(
                &outbound[0],
                OutboundMessage::BroadcastPacket {
                    packet: Packet::PlayerHit {
                        shooter_id: 1,
                        target_id: 2,
                        score: 3,
                    },
                    exclude: None,
                }
            ));
            assert!(matches!(
                &outbound[1],
                OutboundMessage::BroadcastPacket {
                    packet: Packet::PillowRemoved { id: 9 },
                    exclude: None,
                }
            ));
            assert!(matches!(
                &outbound[2],
                OutboundMessage::BroadcastPacket {
                    packet: Packet::PillowsUpdate { .. },
                    exclude: None,
                }
            ));
        });
    }

    #[test]
    fn test_snapshot_skipped_with_no_clients() {
        block_on(async {
            let mut server = Server::new("127.0.0.1:0").await.unwrap();
            server.broadcast_pillow_snapshot().await;
            assert!(drain_outbound(&mut server).is_empty());
        });
    }

    #[test]
    fn test_server_binds_ephemeral_port() {
        block_on(async {
            let server = Server::new("127.0.0.1:0").await.unwrap();
            let addr = server.local_addr().unwrap();
            assert_ne!(addr.port(), 0);
        });
    }

    #[test]
    fn test_tick_duration_is_thirty_hertz() {
        let duration = Duration::from_millis(1000 / TICK_RATE as u64);
        assert_eq!(duration.as_millis(), 33);
    }

    #[test]
    fn test_unix_millis_is_recent() {
        let first = unix_millis();

        std::thread::sleep(Duration::from_millis(2));

        let second = unix_millis();
        assert!(second > first);

        // Sometime after 2020; catches a zeroed or truncated clock.
        assert!(first > 1_577_836_800_000);
    }
}
