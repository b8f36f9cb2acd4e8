use kef_core::AppConfig;
use kef_store::ClientStore;

pub(crate) async fn list(config: &AppConfig) -> anyhow::Result<()> {
    let clients = ClientStore::new(&config.data_dir).list().await?;
    if clients.is_empty() {
        println!("no clients registered");
        return Ok(());
    }

    for client in clients {
        println!(
            "{}  {}  {}  [{}]",
            client.id,
            client.name,
            client.website_url,
            client.keywords.join(", ")
        );
    }
    Ok(())
}
