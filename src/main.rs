use log::{error, info};
use pipeline_rust::config::{init_dotenv, CONFIG};
use pipeline_rust::demo::{failing_input, power_plus_one, power_plus_one_batch, power_plus_one_direct, power_plus_one_handling_error};

fn init_logging(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Composición escrita a mano, sin pipeline.
fn run_quick_and_dirty(x: i64) {
    println!("POWER+1: {}", power_plus_one_direct(x));
    match power_plus_one_handling_error(x) {
        Ok(res) => println!("POWER+1: {res}"),
        Err(e) => println!("POWER+1 error: {e}"),
    }
    println!();
}

/// La misma composición usando el engine.
fn run_pipeline(x: i64) {
    match power_plus_one(x) {
        Ok(res) => println!("POWER+1: {res}"),
        Err(e) => {
            error!("pipeline failed for input {x}: {e}");
            println!("POWER+1 error: {}", e.report().to_json());
        }
    }
    // Una entrada negativa para mostrar el reporte de error
    if let Err(e) = power_plus_one(failing_input(x)) {
        println!("POWER+1 error: {}", e.report().to_json());
    }
    println!();
}

fn run_batch(size: usize) {
    let inputs: Vec<i64> = (0..size as i64).map(|i| if i % 4 == 3 { -i } else { i }).collect();
    for (x, res) in inputs.iter().zip(power_plus_one_batch(&inputs)) {
        match res {
            Ok(v) => println!("{x:>4} -> {v}"),
            Err(e) => println!("{x:>4} -> {e}"),
        }
    }
}

fn main() {
    // Cargar .env si existe
    init_dotenv();
    init_logging(&CONFIG.log_filter);
    info!("config: {:?}", *CONFIG);

    println!("*** Quick & dirty ***");
    run_quick_and_dirty(CONFIG.demo_input);

    println!("*** Pipeline ***");
    run_pipeline(CONFIG.demo_input);

    println!("*** Pipeline (batch) ***");
    run_batch(CONFIG.demo_batch);
}
