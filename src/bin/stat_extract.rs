use clap::Parser;

use releng_tools::cli::{self, StatExtractCli};
use releng_tools::{logging, ui};

fn main() {
    logging::init_logger();
    let args = StatExtractCli::parse();

    if let Err(e) = cli::stat_extract_main(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
