fn main() -> anyhow::Result<()> {
    gametext::cli::run_cli()
}
