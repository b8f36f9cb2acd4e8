use kef_core::AppConfig;
use kef_discovery::Collector;
use kef_store::{ClientStore, OpportunityStore};

/// Collect opportunities for every stored client and replace the stored set.
pub(crate) async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let clients = ClientStore::new(&config.data_dir).list().await?;
    if clients.is_empty() {
        println!("no clients registered; nothing to search");
        return Ok(());
    }

    let collector = Collector::from_config(config)?;
    let collected = collector.collect(&clients).await;

    OpportunityStore::new(&config.data_dir)
        .replace_all(&collected)
        .await?;

    println!(
        "collected {} opportunities across {} client(s)",
        collected.len(),
        clients.len()
    );
    Ok(())
}
