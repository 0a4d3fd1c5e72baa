use std::io;

use stooge_sort_rs::{run, RunConfig};

fn main() -> stooge_sort_rs::Result<()> {
    // Diagnostics go to stderr so they don't interleave with the spinner on stdout.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    run(&RunConfig::default(), &mut io::stdout().lock())?;
    Ok(())
}
