use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_hall::{config::Config, Auditorium};

const DEMO_GROUP_SIZE: usize = 4;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut hall = Auditorium::from_config(&config.auditorium)?;
    info!(
        "Auditorium '{}' ready: {} rows, {} seats",
        config.auditorium.name,
        hall.row_count(),
        hall.total_seats()
    );

    // Book the first run of seats that fits a group
    match hall.get_available_seats(DEMO_GROUP_SIZE).map(|seat| seat.position()) {
        Some(start) => {
            hall.take_seats(start, DEMO_GROUP_SIZE)?;
            info!("Booked {} seats starting at {}", DEMO_GROUP_SIZE, start);
        }
        None => warn!("No run of {} free seats", DEMO_GROUP_SIZE),
    }

    info!("Free seats: {}", hall.count_available_seats());
    info!("Seat map:\n{}", hall);
    debug!("Seat map JSON: {}", serde_json::to_string(&hall)?);

    Ok(())
}
