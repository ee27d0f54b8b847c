use barbershop::application::simulation::Simulation;
use barbershop::domain::config::ShopConfig;
use barbershop::domain::shop::Shop;
use barbershop::interfaces::console::ConsoleObserver;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of barbers on staff
    #[arg(default_value_t = 1)]
    barbers: usize,

    /// Number of waiting chairs
    #[arg(default_value_t = 3)]
    chairs: usize,

    /// Number of customers visiting over the run
    #[arg(default_value_t = 10)]
    customers: u32,

    /// Hair-cut duration, in microseconds
    #[arg(long, default_value_t = 1000)]
    service_time_us: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ShopConfig::new(cli.barbers, cli.chairs).into_diagnostic()?;
    let shop = Shop::with_observer(config, Box::new(ConsoleObserver));
    let simulation = Simulation::new(
        shop,
        cli.customers,
        Duration::from_micros(cli.service_time_us),
    );

    let dropoffs = simulation.run();
    println!("# customers who didn't receive a service = {dropoffs}");

    Ok(())
}
