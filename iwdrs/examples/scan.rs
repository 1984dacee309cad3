use std::time::Duration;

use iwdrs::Iwd;

#[tokio::main]
async fn main() -> iwdrs::Result<()> {
    let iwd = Iwd::new().await?;

    for station in iwd.stations().await? {
        println!("Scanning on {} ({})...", station.path.as_str(), station.state);
        station.scan().await?;
        tokio::time::sleep(Duration::from_secs(3)).await;

        for entry in station.get_ordered_networks().await? {
            println!(
                "{:32} {:7.1} dBm  {}",
                entry.network.name,
                entry.signal_strength.dbm(),
                entry.network.network_type
            );
        }
    }

    iwd.close().await;
    Ok(())
}
