use clap::Parser;
use fare_advisor::app::FareCliArguments;

fn main() {
    env_logger::init();
    let args = FareCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running fare_advisor: {e}");
            std::process::exit(1);
        }
    }
}
