use color_eyre::Result;

mod app;
mod cli;
mod errors;
mod logging;

fn main() -> Result<()> {
    errors::install_hooks()?;

    let args = cli::Args::parse_args();

    if let Some(ref data_dir) = args.data_dir {
        // SAFETY: This is called at program startup before any other threads exist
        unsafe {
            std::env::set_var("ASSET_PICKER_DATA", data_dir);
        }
    }

    logging::init()?;

    let app = app::App::new(&args)?;

    app.run(&args.command)?;

    Ok(())
}
