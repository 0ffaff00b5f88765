use admin_dashboard::{logging, App, Args, Config, DashboardError};
use bubbletea_rs::Program;
use clap::Parser;

async fn run(args: &Args) -> Result<(), DashboardError> {
    let program = Program::<App>::builder()
        .alt_screen(!args.no_alt_screen)
        .signal_handler(true)
        .build()?;
    program.run().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(&args.log_file, &args.log_level)?;
    Config::from(&args).install();
    tracing::info!(url = %args.url, "starting admin dashboard");

    if let Err(err) = run(&args).await {
        tracing::error!(error = %err, "admin dashboard failed");
        return Err(err.into());
    }
    tracing::info!("admin dashboard exited");
    Ok(())
}
