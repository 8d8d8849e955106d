use log::{debug, info};
use rand::Rng;
use shared::{
    in_field, pillow_hits_player, Direction, Pillow, Player, FIELD_HEIGHT, FIELD_WIDTH,
    PILLOW_SPEED, PLAYER_MOVE_STEP, PLAYER_SIZE,
};
use std::collections::BTreeMap;

/// Fixed palette handed out round-robin as players join.
const COLOR_PALETTE: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2",
];

/// State changes produced by one simulation step, in the order they must
/// reach clients.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    PillowRemoved {
        id: u64,
    },
    PlayerHit {
        shooter_id: u32,
        target_id: u32,
        score: u32,
    },
}

/// Authoritative world state. Owned exclusively by the server's run loop,
/// which is the only place it is read or mutated.
#[derive(Debug, Clone)]
pub struct GameState {
    pub tick_count: u64,
    /// Sessions keyed by id. Ids are handed out monotonically, so iteration
    /// order is join order; hit resolution relies on that.
    pub players: BTreeMap<u32, Player>,
    /// Live pillows keyed by id, again monotonic, so iteration order is
    /// creation order.
    pub pillows: BTreeMap<u64, Pillow>,
    next_pillow_id: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            players: BTreeMap::new(),
            pillows: BTreeMap::new(),
            next_pillow_id: 0,
        }
    }

    /// Creates a session for a freshly connected client: random spawn spot
    /// fully inside the field, palette color, generated username, zero score.
    pub fn add_player(&mut self, id: u32) -> Player {
        let mut rng = rand::thread_rng();
        let x = rng.gen_range(0.0..FIELD_WIDTH - PLAYER_SIZE);
        let y = rng.gen_range(0.0..FIELD_HEIGHT - PLAYER_SIZE);
        let color = COLOR_PALETTE[(id as usize - 1) % COLOR_PALETTE.len()];
        let username = format!("Player{}", self.players.len());

        let player = Player::new(id, x, y, color, &username);
        info!(
            "Player {} joined as {} at ({:.1}, {:.1})",
            id, player.username, x, y
        );
        self.players.insert(id, player.clone());
        player
    }

    /// Idempotent: removing an unknown id is a no-op.
    pub fn remove_player(&mut self, id: u32) -> bool {
        if self.players.remove(&id).is_some() {
            info!("Player {} left", id);
            true
        } else {
            false
        }
    }

    /// Renames a session. Names are stored trimmed; input that trims to
    /// nothing keeps the current name and reports no change.
    pub fn set_username(&mut self, id: u32, username: &str) -> Option<Player> {
        let player = self.players.get_mut(&id)?;
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return None;
        }
        player.username = trimmed.to_string();
        info!("Player {} is now known as {}", id, player.username);
        Some(player.clone())
    }

    /// Steps a session one move along an axis, clamped so the body never
    /// pokes past a field edge. Returns the position after the move.
    pub fn move_player(&mut self, id: u32, direction: Direction) -> Option<(f32, f32)> {
        let player = self.players.get_mut(&id)?;
        match direction {
            Direction::Up => player.y = (player.y - PLAYER_MOVE_STEP).max(0.0),
            Direction::Down => {
                player.y = (player.y + PLAYER_MOVE_STEP).min(FIELD_HEIGHT - PLAYER_SIZE)
            }
            Direction::Left => player.x = (player.x - PLAYER_MOVE_STEP).max(0.0),
            Direction::Right => {
                player.x = (player.x + PLAYER_MOVE_STEP).min(FIELD_WIDTH - PLAYER_SIZE)
            }
        }
        Some((player.x, player.y))
    }

    /// Spawns a pillow at the shooter's body center with the velocity the
    /// client sent. Returns `None` when the shooter is gone, in which case
    /// nothing is spawned.
    pub fn spawn_pillow(
        &mut self,
        shooter_id: u32,
        velocity_x: f32,
        velocity_y: f32,
    ) -> Option<Pillow> {
        let shooter = self.players.get(&shooter_id)?;
        let id = self.next_pillow_id;
        self.next_pillow_id += 1;

        let pillow = Pillow::new(
            id,
            shooter.x + PLAYER_SIZE / 2.0,
            shooter.y + PLAYER_SIZE / 2.0,
            velocity_x,
            velocity_y,
            shooter_id,
        );
        debug!("Player {} shot pillow {}", shooter_id, id);
        self.pillows.insert(id, pillow);
        Some(pillow)
    }

    /// Idempotent: removing an unknown id is a no-op.
    pub fn remove_pillow(&mut self, id: u64) -> bool {
        self.pillows.remove(&id).is_some()
    }

    /// Moves every pillow one step along its velocity. Positional only;
    /// bounds and collisions are resolved by [`GameState::tick`].
    pub fn advance_pillows(&mut self) {
        for pillow in self.pillows.values_mut() {
            pillow.x += pillow.velocity_x * PILLOW_SPEED;
            pillow.y += pillow.velocity_y * PILLOW_SPEED;
        }
    }

    /// One simulation step. Advances every pillow, sweeps the ones that left
    /// the field, then checks the survivors against players in join order.
    /// The first player containing the pillow takes the hit (never the
    /// shooter's own body), the shooter scores if still connected, and the
    /// pillow is consumed either way.
    pub fn tick(&mut self, now_ms: u64) -> Vec<TickEvent> {
        self.tick_count += 1;
        let mut events = Vec::new();

        self.advance_pillows();

        // Pillows that left the field are swept before collision checks, so
        // an escaping pillow is gone within the tick it escapes.
        let out_of_bounds: Vec<u64> = self
            .pillows
            .values()
            .filter(|pillow| !in_field(pillow.x, pillow.y))
            .map(|pillow| pillow.id)
            .collect();
        for id in out_of_bounds {
            self.pillows.remove(&id);
            events.push(TickEvent::PillowRemoved { id });
        }

        let survivors: Vec<u64> = self.pillows.keys().copied().collect();
        for id in survivors {
            let pillow = match self.pillows.get(&id) {
                Some(pillow) => *pillow,
                None => continue,
            };

            let target_id = self
                .players
                .values()
                .find(|player| {
                    player.id != pillow.shooter_id && pillow_hits_player(&pillow, player)
                })
                .map(|player| player.id);

            if let Some(target_id) = target_id {
                // A hit only scores while the shooter is still connected;
                // the pillow is consumed either way.
                if let Some(shooter) = self.players.get_mut(&pillow.shooter_id) {
                    shooter.score += 1;
                    events.push(TickEvent::PlayerHit {
                        shooter_id: pillow.shooter_id,
                        target_id,
                        score: shooter.score,
                    });
                }
                if let Some(target) = self.players.get_mut(&target_id) {
                    target.last_hit_at = now_ms;
                }
                self.pillows.remove(&id);
                events.push(TickEvent::PillowRemoved { id });
            }
        }

        events
    }
}
