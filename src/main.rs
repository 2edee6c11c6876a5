use c3_e2e_cleanup::{run, summary, ApiClient, Args, Config};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse()?;

    // validated before any network activity
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let api = ApiClient::new(config);
    let count = run(&api, args.dry_run)?;

    let line = summary(count);
    if args.dry_run {
        println!("(dry run) {}", line);
    } else {
        println!("{}", line);
    }

    Ok(())
}
