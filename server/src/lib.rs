//! # Pillow Fight Server Library
//!
//! This library provides the authoritative server implementation for the
//! networked pillow fight arena. It owns the canonical world state, applies
//! player commands, runs the fixed-rate simulation and broadcasts events so
//! every connected client renders the same fight.
//!
//! ## Core Responsibilities
//!
//! ### Authoritative Simulation
//! The server runs the definitive version of the game. Player positions,
//! pillow flight, collisions and scores are all decided here; clients only
//! send intents and render what the server tells them.
//!
//! ### Session Management
//! Handles the complete lifecycle of client connections including:
//! - Connection establishment and player session creation
//! - Command routing from network address to session
//! - Disconnection handling, both explicit and by timeout
//! - Reconnect handling, where the old session is retired first
//!
//! ### Event Broadcasting
//! Every observable change (a join, a move, a shot, a hit, a removal) is
//! pushed to all connected clients the moment it happens, followed each
//! tick by an authoritative snapshot of all pillows in flight.
//!
//! ## Architecture Design
//!
//! ### Single Owner of World State
//! The world state is owned by the main run loop and nothing else. Network
//! tasks translate datagrams into messages on a channel, the run loop
//! consumes them between ticks, and so command handling and simulation
//! steps are strictly interleaved with no locking around game data.
//!
//! ### UDP-Based Communication
//! Uses UDP sockets for low-latency communication with clients. Commands
//! and events are small bincode-encoded packets; a lost snapshot is simply
//! superseded by the next one a tick later.
//!
//! ### Fixed 30 Hz Tick
//! Simulation advances on a fixed interval. Each tick moves every pillow,
//! removes the ones that left the field, resolves hits and then broadcasts
//! the pillow snapshot. A stalled tick is skipped, never replayed as a
//! burst.
//!
//! ## Module Organization
//!
//! ### Client Manager Module (`client_manager`)
//! Transport-side registry of connected clients:
//! - Address-to-session resolution for incoming datagrams
//! - Session id assignment, never reused across reconnects
//! - Liveness tracking and timeout detection
//!
//! ### Game Module (`game`)
//! Contains the authoritative world state and simulation logic:
//! - Player sessions with position, color, username and score
//! - Pillow store and per-tick movement
//! - Collision detection, scoring and the tick event stream
//!
//! ### Network Module (`network`)
//! Handles all networking operations and protocol implementation:
//! - UDP socket management and packet processing
//! - Message serialization and deserialization
//! - Command handling and event fan-out
//! - The main run loop tying commands and ticks together
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::network::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut server = Server::new("0.0.0.0:3000").await?;
//!
//!     // Runs the main loop which:
//!     // - Listens for client connections and commands
//!     // - Applies commands in arrival order between ticks
//!     // - Advances the simulation at a fixed 30 Hz
//!     // - Broadcasts events and pillow snapshots to all clients
//!     // - Handles client timeouts and disconnections
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The server uses an event-driven architecture with internal async tasks:
//! - **Network Receiver**: Continuously listens for incoming packets
//! - **Network Sender**: Drains the outgoing queue in FIFO order, so the
//!   relative order of events and snapshots is preserved on the wire
//! - **Timeout Sweeper**: Retires clients that have gone quiet for too long
//! - **Main Loop**: Applies commands, runs ticks and queues broadcasts

pub mod client_manager;
pub mod game;
pub mod network;
