use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 600.0;
pub const PLAYER_SIZE: f32 = 40.0;
pub const PILLOW_SIZE: f32 = 20.0;
pub const PILLOW_SPEED: f32 = 8.0;
pub const PLAYER_MOVE_STEP: f32 = 5.0;
pub const TICK_RATE: u32 = 30;
pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub color: String,
    pub username: String,
    pub score: u32,
    /// Unix millis of the last time a pillow landed on this player.
    /// Cosmetic only; the simulation never reads it back.
    pub last_hit_at: u64,
}

impl Player {
    pub fn new(id: u32, x: f32, y: f32, color: &str, username: &str) -> Self {
        Self {
            id,
            x,
            y,
            color: color.to_string(),
            username: username.to_string(),
            score: 0,
            last_hit_at: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Pillow {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub shooter_id: u32,
}

impl Pillow {
    pub fn new(id: u64, x: f32, y: f32, velocity_x: f32, velocity_y: f32, shooter_id: u32) -> Self {
        Self {
            id,
            x,
            y,
            velocity_x,
            velocity_y,
            shooter_id,
        }
    }
}

/// True if the pillow's position lies inside the player's body square.
/// Bounds are inclusive on all four edges. Owner exclusion is the
/// simulation's job, not this function's.
pub fn pillow_hits_player(pillow: &Pillow, player: &Player) -> bool {
    pillow.x >= player.x
        && pillow.x <= player.x + PLAYER_SIZE
        && pillow.y >= player.y
        && pillow.y <= player.y + PLAYER_SIZE
}

/// True if the point is still on the field. NaN coordinates fail the
/// range test, so pillows fired with non-finite velocities get swept
/// like any other out-of-bounds pillow.
pub fn in_field(x: f32, y: f32) -> bool {
    (0.0..=FIELD_WIDTH).contains(&x) && (0.0..=FIELD_HEIGHT).contains(&y)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum Packet {
    // client -> server
    Connect {
        client_version: u32,
    },
    SetUsername {
        username: String,
    },
    Move {
        direction: Direction,
    },
    Shoot {
        velocity_x: f32,
        velocity_y: f32,
    },
    Heartbeat {
        timestamp: u64,
    },
    Disconnect,

    // server -> client
    Init {
        id: u32,
        players: Vec<Player>,
        field_width: f32,
        field_height: f32,
    },
    PlayerJoined {
        player: Player,
    },
    PlayerLeft {
        id: u32,
    },
    PlayerMoved {
        id: u32,
        x: f32,
        y: f32,
    },
    PlayerUpdated {
        player: Player,
    },
    PillowShot {
        pillow: Pillow,
    },
    PillowsUpdate {
        pillows: BTreeMap<u64, Pillow>,
    },
    PillowRemoved {
        id: u64,
    },
    PlayerHit {
        shooter_id: u32,
        target_id: u32,
        score: u32,
    },
}
