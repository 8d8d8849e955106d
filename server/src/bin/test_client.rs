use bincode::{deserialize, serialize};
use shared::{Direction, Packet};
use std::net::SocketAddr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::net::UdpSocket;
use tokio::time::{sleep, timeout};

// Get current timestamp in milliseconds
fn get_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_millis() as u64
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create local socket
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    println!("Client socket bound to {}", socket.local_addr()?);

    // Server address
    let server_addr = "127.0.0.1:3000".parse::<SocketAddr>()?;

    // Join the arena
    let connect_data = serialize(&Packet::Connect { client_version: 1 })?;
    println!("Sending connect to {}", server_addr);
    socket.send_to(&connect_data, server_addr).await?;

    // Buffer for receiving data
    let mut buf = [0u8; 2048];

    println!("Waiting for init...");
    let (len, addr) = socket.recv_from(&mut buf).await?;
    println!("Received {} bytes from {}", len, addr);

    let my_id = match deserialize::<Packet>(&buf[0..len]) {
        Ok(Packet::Init {
            id,
            players,
            field_width,
            field_height,
        }) => {
            println!(
                "Joined as player {} on a {}x{} field, {} players present",
                id,
                field_width,
                field_height,
                players.len()
            );
            for p in &players {
                println!(
                    "  Player {} ({}) at ({:.1}, {:.1}) score {}",
                    p.id, p.username, p.x, p.y, p.score
                );
            }
            id
        }
        Ok(other) => {
            println!("Expected init but got: {:?}", other);
            return Ok(());
        }
        Err(e) => {
            println!("Failed to deserialize response: {}", e);
            return Ok(());
        }
    };

    // Pick a name, strafe right a bit, then throw a pillow
    let rename = serialize(&Packet::SetUsername {
        username: "SmokeTester".to_string(),
    })?;
    socket.send_to(&rename, server_addr).await?;

    for _ in 0..5 {
        let step = serialize(&Packet::Move {
            direction: Direction::Right,
        })?;
        socket.send_to(&step, server_addr).await?;
        sleep(Duration::from_millis(50)).await;
    }

    let shot = serialize(&Packet::Shoot {
        velocity_x: 1.0,
        velocity_y: 0.0,
    })?;
    socket.send_to(&shot, server_addr).await?;
    println!("Pillow away");

    // Listen for broadcasts for a few seconds, heartbeating as we go
    for _ in 0..30 {
        let heartbeat = serialize(&Packet::Heartbeat {
            timestamp: get_timestamp(),
        })?;
        socket.send_to(&heartbeat, server_addr).await?;

        match timeout(Duration::from_millis(200), socket.recv_from(&mut buf)).await {
            Ok(Ok((len, _))) => match deserialize::<Packet>(&buf[0..len]) {
                Ok(Packet::PillowsUpdate { pillows }) => {
                    if !pillows.is_empty() {
                        println!("{} pillows in flight", pillows.len());
                    }
                }
                Ok(Packet::PlayerMoved { id, x, y }) if id == my_id => {
                    println!("Server placed us at ({:.1}, {:.1})", x, y);
                }
                Ok(Packet::PlayerHit {
                    shooter_id,
                    target_id,
                    score,
                }) => {
                    println!(
                        "Player {} hit player {} (score now {})",
                        shooter_id, target_id, score
                    );
                }
                Ok(Packet::PillowRemoved { id }) => {
                    println!("Pillow {} removed", id);
                }
                Ok(other) => println!("Received: {:?}", other),
                Err(e) => println!("Failed to deserialize packet: {}", e),
            },
            Ok(Err(e)) => println!("Error receiving packet: {}", e),
            Err(_) => {}
        }
    }

    // Send disconnect when done
    let disconnect_data = serialize(&Packet::Disconnect)?;
    println!("Sending disconnect request");
    socket.send_to(&disconnect_data, server_addr).await?;

    println!("Test client finished");
    Ok(())
}
