criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_seven_card_hand,
        simulating_preflop_equity,
        simulating_flop_equity,
        deciding_with_simulation,
        deciding_without_simulation,
}

fn evaluating_seven_card_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let ref mut rng = rand::rng();
        let hand = Deck::new().deal(7, rng);
        b.iter(|| Strength::from(hand))
    });
}

fn simulating_preflop_equity(c: &mut criterion::Criterion) {
    c.bench_function("simulate 1000 Preflop trials", |b| {
        let hole = Hole::random();
        b.iter(|| Simulation::new(hole, Board::empty()).trials(1000).run())
    });
}

fn simulating_flop_equity(c: &mut criterion::Criterion) {
    c.bench_function("simulate 1000 Flop trials vs 3", |b| {
        let hole = Hole::try_from("Jh Td").expect("valid hole");
        let board = Board::try_from("9h 8h 2c").expect("valid flop");
        b.iter(|| Simulation::new(hole, board).opponents(3).trials(1000).run())
    });
}

fn deciding_with_simulation(c: &mut criterion::Criterion) {
    let state = table();
    let output = [0.1, 0.1, 0.5, 0.1, 0.1, 0.1];
    c.bench_function("decide with 1000 trials", |b| {
        let engine = Engine::default();
        b.iter(|| engine.decide(&state, &output))
    });
}

fn deciding_without_simulation(c: &mut criterion::Criterion) {
    let state = table();
    let output = [0.1, 0.1, 0.5, 0.1, 0.1, 0.1];
    c.bench_function("decide from features only", |b| {
        let engine = Engine::from(Config {
            simulate: false,
            ..Config::default()
        });
        b.iter(|| engine.decide(&state, &output))
    });
}

fn table() -> TableState {
    TableState {
        community: vec!["Ah".into(), "7d".into(), "2c".into(), "NA".into(), "NA".into()],
        hole: vec!["Kh".into(), "Qh".into()],
        stacks: [("hero".into(), 100.), ("villain".into(), 80.)].into_iter().collect(),
        bet: 4.,
        pot: 10.,
        position: "CO".into(),
    }
}

use holdem_advisor::Arbitrary;
use holdem_advisor::Config;
use holdem_advisor::advisor::Engine;
use holdem_advisor::advisor::TableState;
use holdem_advisor::cards::Board;
use holdem_advisor::cards::Deck;
use holdem_advisor::cards::Hole;
use holdem_advisor::cards::Strength;
use holdem_advisor::equity::Simulation;
