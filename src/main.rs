use std::io::Write;
use std::process::exit;

use rnd::cli::Opts;
use rnd::{create_rng, generate, write_samples};
use tracing::{debug, Level};

/// Exit status for anything wrong with the command line.
const PARAM_ERROR: i32 = 3;

fn run(opts: &Opts) -> anyhow::Result<()> {
    let request = opts.request()?;

    let samples = generate(&request, create_rng(opts.seed));

    let so = std::io::stdout();
    let so = so.lock();
    let mut so = std::io::BufWriter::with_capacity(32768, so);
    let written = write_samples(&mut so, samples, opts.precision)?;
    so.flush()?;
    debug!(written, "done");
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let opts = match Opts::parse(&args) {
        Ok(opts) => opts,
        Err(early) => match early.status {
            Ok(()) => {
                println!("{}", early.output);
                exit(0);
            }
            Err(()) => {
                eprintln!("{}", early.output);
                eprintln!("Run rnd --help for more information.");
                exit(PARAM_ERROR);
            }
        },
    };

    let level = if opts.verbose { Level::DEBUG } else { Level::WARN };
    if let Err(e) = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("cannot init logger: {}", e);
    }
    debug!(?opts, "starting");

    if let Err(e) = run(&opts) {
        eprintln!("Error: {:#}", e);
        exit(PARAM_ERROR);
    }
}
