fn main() -> anyhow::Result<()> {
    serverenv::cli::run_cli()
}
