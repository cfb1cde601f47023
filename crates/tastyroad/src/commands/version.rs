pub fn run() -> anyhow::Result<()> {
    println!("tastyroad {}", env!("CARGO_PKG_VERSION"));
    println!("Local meal logging with a consent-gated launch sequence");
    Ok(())
}
