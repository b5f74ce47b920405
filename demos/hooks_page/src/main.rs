use std::io;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use hookbook_core::RenderBackend;
use hookbook_platform::{AnsiBackend, App, DirLoader, run_terminal_session};
use hooks_page::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cli.color.apply();

    let assets = cli
        .assets
        .canonicalize()
        .with_context(|| format!("asset directory {}", cli.assets.display()))?;
    log::info!("serving assets from {}", assets.display());

    let mut app = App::new(hooks_page::page(cli.panel));
    app.set_asset_loader(Rc::new(DirLoader::new(assets)));

    let mut backend = AnsiBackend::new(io::stdout().lock());
    backend.configure_surface(cli.columns);

    if cli.interactive {
        return run_terminal_session(&mut app, &mut backend, io::stdin().lock());
    }

    app.pump().context("settling first frame")?;
    if cli.settle_ms > 0 {
        app.advance(Duration::from_millis(cli.settle_ms))
            .context("letting timers run")?;
    }
    app.render(&mut backend).context("painting page")?;
    app.unmount();
    Ok(())
}
