fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    tracing::debug!(argc = args.len(), "starting");

    let stdout = std::io::stdout();
    storefront_cli::run(&args, &mut stdout.lock())?;
    Ok(())
}
