use package_express::lifecycle::{console_application, setup_tracing};
use tracing::{error, info};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting quote session");

    // Rejections are a normal end of session; only I/O failures are errors.
    let outcome = console_application().run().map_err(|e| {
        error!(error = %e, "Quote session aborted");
        e.to_string()
    })?;

    info!(?outcome, "Quote session finished");
    Ok(())
}
