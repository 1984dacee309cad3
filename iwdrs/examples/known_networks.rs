use iwdrs::Iwd;

#[tokio::main]
async fn main() -> iwdrs::Result<()> {
    let iwd = Iwd::new().await?;

    for known in iwd.known_networks().await? {
        println!(
            "{:32} {:6} autoconnect={} hidden={} last={}",
            known.name,
            known.network_type.to_string(),
            known.auto_connect,
            known.hidden,
            known.last_connected_time.as_deref().unwrap_or("never")
        );
    }

    iwd.close().await;
    Ok(())
}
