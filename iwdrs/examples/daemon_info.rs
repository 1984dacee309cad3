use iwdrs::Iwd;

#[tokio::main]
async fn main() -> iwdrs::Result<()> {
    let iwd = Iwd::new().await?;

    let daemon = iwd.daemon().await?;
    let info = daemon.get_info().await?;
    println!("iwd version:   {}", info.version.as_deref().unwrap_or("?"));
    println!(
        "state dir:     {}",
        info.state_directory.as_deref().unwrap_or("?")
    );
    println!(
        "netconfig:     {}",
        info.network_configuration_enabled
            .map(|enabled| enabled.to_string())
            .unwrap_or_else(|| "?".into())
    );

    for adapter in iwd.adapters().await? {
        println!(
            "adapter {}: vendor={} model={} powered={}",
            adapter.name,
            adapter.vendor.as_deref().unwrap_or("?"),
            adapter.model.as_deref().unwrap_or("?"),
            adapter.powered
        );
    }

    iwd.close().await;
    Ok(())
}
