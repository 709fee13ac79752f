//! generates a lookup table of representative coordinates for every timezone
//! listed in the tzdb zone1970.tab file.
use clap::Parser;
use itertools::Itertools;
use tzcoords_gen::app::GenAppArguments;

fn main() {
    env_logger::init();
    let args = GenAppArguments::parse();
    let invocation = std::env::args().skip(1).join(" ");
    match args.run(&invocation) {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("tzcoords-gen failed: {e}");
            std::process::exit(1);
        }
    }
}
