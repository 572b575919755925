use epidemic_grid::{Control, DiseaseState, Engine, EngineConfig, GridCoord, Stepper, TickRates};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn glyph(state: DiseaseState) -> char {
    match state {
        DiseaseState::Healthy => '.',
        DiseaseState::Incubating => 'i',
        DiseaseState::Contagious => 'C',
        DiseaseState::Dead => 'x',
        DiseaseState::Immune => 'o',
    }
}

fn render(engine: &Engine) {
    for row in 0..engine.rows() {
        let line: String = (0..engine.columns())
            .filter_map(|column| engine.cell_view(GridCoord::new(column, row)).ok())
            .map(|view| glyph(view.state))
            .collect();
        println!("{line}");
    }
    let stats = engine.snapshot_stats();
    println!(
        "day {:>3}  healthy {:>3}  incubating {:>3}  contagious {:>3}  dead {:>3}  immune {:>3}\n",
        stats.day,
        stats.healthy(),
        stats.incubating(),
        stats.contagious,
        stats.dead,
        stats.immune
    );
}

fn main() {
    init_tracing();

    let config = EngineConfig {
        rows: 16,
        columns: 32,
        initial_infection_rate: 0.02,
        ..EngineConfig::default()
    };
    let engine = match Engine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            return;
        }
    };

    let mut stepper = Stepper::new(engine, TickRates::new(0.15, 0.1), 256);
    render(stepper.engine());

    // A few manual steps, then let auto-play finish the run.
    for _ in 0..3 {
        stepper.handle(Control::ContinueToNextState);
        render(stepper.engine());
    }
    stepper.set_auto_play(true);
    while stepper.poll().is_some() {
        render(stepper.engine());
    }

    let peak = stepper.history().map(|s| s.infected).max().unwrap_or(0);
    println!("epidemic over, peak of {peak} active cases");
}
