//! Demo: ejecuta un flow instrumentado de tres steps y muestra los
//! eventos de linaje emitidos (transporte de consola salvo que
//! `OPENLINEAGE_URL` apunte a un backend real).

use flowlineage_rust::{Flow, FnStep, LineageTracker};
use lineage_client::LineageClient;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .init();

    let client = LineageClient::from_env().expect("lineage client");
    let mut tracker = LineageTracker::new("DemoLineageFlow", client);

    let mut flow = Flow::new("DemoLineageFlow")
        .add_step(Box::new(FnStep::new("start", |_ctx| {
            println!("Starting the flow...");
            Ok(())
        })))
        .add_step(Box::new(FnStep::new("transform", |ctx| {
            ctx.execute_sql("INSERT INTO analytics.reports.daily \
                             SELECT user_id, COUNT(*) FROM raw.events.clicks GROUP BY user_id",
                            "snowflake")?;
            Ok(())
        })))
        .add_step(Box::new(FnStep::new("end", |_ctx| {
            println!("Flow completed.");
            Ok(())
        })));

    if let Err(e) = flow.run(&mut tracker) {
        eprintln!("flow failed: {e}");
        std::process::exit(1);
    }
}
