//! Decorator demo: build up a coffee one topping at a time.
//!
//! ```text
//! cargo run --example coffee
//! ```

use clap::Parser;
use patterncraft::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "coffee", about = "Price a coffee as toppings are added")]
struct Args {
    /// Log each wrapping step
    #[arg(short, long)]
    verbose: bool,

    /// Log everything
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    let mut config = DemoConfig::new().with_name("coffee");
    if args.verbose {
        config = config.verbose();
    }
    if args.debug {
        config = config.debug();
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();
    let _demo = tracing::info_span!("demo", name = config.name()).entered();

    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    println!("{}", receipt_line(coffee.as_ref()));

    coffee = Box::new(MilkDecorator::new(coffee));
    println!("{}", receipt_line(coffee.as_ref()));

    coffee = Box::new(SugarDecorator::new(coffee));
    println!("{}", receipt_line(coffee.as_ref()));

    coffee = Box::new(CaramelDecorator::new(coffee));
    println!("{}", receipt_line(coffee.as_ref()));
}
