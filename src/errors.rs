use std::panic;

use color_eyre::{config::HookBuilder, eyre::Result};

use crate::logging::log_panic;

/// Install color-eyre panic and error hooks; panics are also written to the log file.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(true)
        .display_env_section(false)
        .into_hooks();

    // Log the panic before color-eyre prints its report
    let panic_hook = panic_hook.into_panic_hook();
    panic::set_hook(Box::new(move |panic_info| {
        log_panic(panic_info);
        panic_hook(panic_info);
    }));

    eyre_hook.install()?;

    Ok(())
}
