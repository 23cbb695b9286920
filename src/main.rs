//! Write the JPEG 2000 seed corpus into `./seeds`.

use std::process::ExitCode;

use j2kseeds::{SeedRequest, Unstoppable};
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let request = SeedRequest::new();
    match request.write(Unstoppable) {
        Ok(report) => {
            println!(
                "Generated {} seed files in {}",
                report.count(),
                report.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
