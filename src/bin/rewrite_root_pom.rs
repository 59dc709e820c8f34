use releng_tools::cli::{self, RewriteCli};
use releng_tools::domain::RewriteMode;
use releng_tools::{logging, ui};

fn main() {
    logging::init_logger();
    let args = RewriteCli::parse_for("rewrite-root-pom");

    if let Err(e) = cli::rewrite_main(args, RewriteMode::Root) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
