use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    credlens::run().await
}
