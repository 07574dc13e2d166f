use tracing_subscriber::EnvFilter;

use match_simulator::{
    MatchBoard, MatchClient, MatchListObserver, RefreshStatus, SimulationEngine, SimulatorError,
};

struct Console;

impl MatchListObserver for Console {
    fn on_list_changed(&mut self) {
        println!("match list updated");
    }

    fn on_fetch_failed(&mut self, error: &SimulatorError) {
        eprintln!("could not load matches: {error}");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let mut board = MatchBoard::new(
        MatchClient::new(),
        SimulationEngine::from_entropy(),
        Console,
    );

    let RefreshStatus::Applied { count } = board.refresh().await else {
        return;
    };
    println!("Found {count} matches");

    board.simulate();
    for fixture in board.matches().iter() {
        let (home, visitor) = fixture.scores().unwrap_or_default();
        println!(
            "{:<20} {home} x {visitor} {:<20} @ {}",
            fixture.home_team.name, fixture.visitor_team.name, fixture.place.name
        );
    }

    if let Ok(detail) = board.detail(0) {
        println!("{}", serde_json::to_string_pretty(&detail).unwrap());
    }
}
