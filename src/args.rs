#[derive(Debug)]
pub struct Args {
    pub dry_run: bool,
}

impl Args {
    pub fn parse() -> anyhow::Result<Self> {
        let mut args = pico_args::Arguments::from_env();

        if args.contains("-h") {
            Self::print_short_help();
            std::process::exit(0);
        }

        if args.contains("--help") {
            Self::print_long_help();
            std::process::exit(0);
        }

        if args.contains(["-v", "--version"]) {
            Self::print_version();
            std::process::exit(0);
        }

        let dry_run = args.contains(["-n", "--dry-run"]);

        let rest = args.finish();
        anyhow::ensure!(rest.is_empty(), "unexpected arguments: {:?}", rest);

        Ok(Self { dry_run })
    }

    fn print_short_help() {
        Self::print_version();
        println!();
        println!("{}", include_str!("../assets/short_help.txt"));
    }

    fn print_long_help() {
        Self::print_short_help();
        println!("{}", include_str!("../assets/long_help.txt"));
    }

    fn print_version() {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }
}
