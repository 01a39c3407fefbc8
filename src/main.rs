use std::{io, time::Duration};

use log::LevelFilter;
use simple_logger::SimpleLogger;

use coffee_cup::{
    coffee_loop::CoffeeLoop, constants::PAUSE_IN_MS, cup::CoffeeCup, pause::Pause,
};

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("Error initializing the logger: {}", err);
    }

    let cup = CoffeeCup::new(io::stdout());
    let mut coffee_loop = CoffeeLoop::new(cup, Pause::new(Duration::from_millis(PAUSE_IN_MS)));
    coffee_loop.run();
}
