use releng_tools::cli::{self, RewriteCli};
use releng_tools::domain::RewriteMode;
use releng_tools::{logging, ui};

fn main() {
    logging::init_logger();
    let args = RewriteCli::parse_for("rewrite-parent-pom");

    if let Err(e) = cli::rewrite_main(args, RewriteMode::Parent) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
