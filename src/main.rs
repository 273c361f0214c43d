use std::{ path::PathBuf, process };

use clap::Parser;
use log::{ error, info, LevelFilter };
use simple_logger::SimpleLogger;

use sharp_coffee::{
    constants::DEFAULT_ORDERS_FILE,
    orders_reader::read_and_take_orders,
    statistics::Statistics,
};

#[derive(Parser, Debug)]
#[command(name = "sharp-coffee")]
#[command(about = "Takes the drink orders of a JSON file and reports which ones can be served")]
struct Cli {
    /// Archivo con los pedidos
    #[arg(default_value = DEFAULT_ORDERS_FILE)]
    orders: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    info!("[MAIN] Taking orders from {}", cli.orders.display());

    let mut statistics = Statistics::new();
    match read_and_take_orders(&cli.orders, &mut statistics) {
        Ok(orders) => {
            for order in &orders {
                println!("{}  {}", order.order_id(), order);
            }
            statistics.print_statistics();
        }
        Err(err) => {
            error!("[MAIN] {}", err);
            process::exit(1);
        }
    }
}
