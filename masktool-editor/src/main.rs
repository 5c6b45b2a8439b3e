use structopt::StructOpt;

fn main() {
    let args = masktool_editor::MaskToolArgs::from_args();

    // Setup logging
    let level = if args.trace {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::default()
        .write_style(env_logger::WriteStyle::Always)
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();

    if let Err(e) = masktool_editor::run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
