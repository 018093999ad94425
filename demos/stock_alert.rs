//! Observer demo: subscribers hear about the iPhone only when it comes
//! back in stock.
//!
//! ```text
//! cargo run --example stock_alert -- 10 -10 5 3
//! cargo run --example stock_alert -- --alert-buffer 1 10 -10 5
//! ```

use std::rc::Rc;

use clap::Parser;
use futures::StreamExt;
use patterncraft::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "stock_alert", about = "Replay restocks and print the alerts sent")]
struct Args {
    /// Stock deltas to apply in order (negative values sell stock)
    #[arg(allow_negative_numbers = true, default_values_t = [10, -10, 5, 3])]
    restocks: Vec<i32>,

    /// How many undelivered alerts the alert stream may hold
    #[arg(long, default_value_t = patterncraft::DEFAULT_ALERT_BUFFER)]
    alert_buffer: usize,

    /// Log notifications as they happen
    #[arg(short, long)]
    verbose: bool,

    /// Log everything
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let mut config = DemoConfig::new()
        .with_name("stock_alert")
        .with_alert_buffer(args.alert_buffer);
    if args.verbose {
        config = config.verbose();
    }
    if args.debug {
        config = config.debug();
    }
    let (config, rejected) = config.validated();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();
    let _demo = tracing::info_span!("demo", name = config.name()).entered();
    if let Some(err) = rejected {
        tracing::error!("{}; using alert buffer {}", err, config.alert_buffer);
    }

    let (sender, alerts) = alert_channel(config.alert_buffer);

    let email = Rc::new(EmailAlertObserver::new("xyz1@gmail.com", IphoneObservable::PRODUCT));
    let email2 = Rc::new(EmailAlertObserver::new("xyz2@gmail.com", IphoneObservable::PRODUCT));
    let mobile = Rc::new(MobileAlertObserver::new("xyz_username", IphoneObservable::PRODUCT));
    let feed = Rc::new(StreamAlertObserver::new(IphoneObservable::PRODUCT, sender));

    let mut iphone = IphoneObservable::new();
    iphone.add(email.clone());
    iphone.add(email2.clone());
    iphone.add(mobile.clone());
    iphone.add(feed.clone());

    for restock in &args.restocks {
        iphone.set_stock_count(*restock);
        println!("restock {:+} -> stock {}", restock, iphone.stock_count());
    }

    for message in email
        .sent()
        .into_iter()
        .chain(email2.sent())
        .chain(mobile.sent())
    {
        println!("{}", message);
    }

    let dropped = feed.dropped();
    // The sender lives in the observer; dropping it ends the stream.
    drop(iphone);
    drop(feed);
    let streamed = alerts.collect::<Vec<_>>().await.len();
    println!("{} alert(s) streamed, {} dropped", streamed, dropped);
}
