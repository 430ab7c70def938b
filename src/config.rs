use std::env::VarError;

use anyhow::anyhow;

pub const REQUIRED_VARIABLES: &[&str] = &["PG_URL", "LISTEN_PORT", "ZONES_CSV", "TRIPS_CSV"];

pub struct Config {
    pub pg_url: String,
    pub listen_port: u16,
    pub zones_csv: String,
    pub trips_csv: String,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        let pg_url = env("PG_URL")?;

        let listen_port = env("LISTEN_PORT")?
            .parse()
            .map_err(|e| anyhow!("LISTEN_PORT is not a valid port number: {e}"))?;

        let zones_csv = env("ZONES_CSV")?;
        let trips_csv = env("TRIPS_CSV")?;

        Ok(Self {
            pg_url,
            listen_port,
            zones_csv,
            trips_csv,
        })
    }

    pub fn log(&self) {
        log::info!("Listen port: {}", self.listen_port);
        log::info!("Zones dataset: {}", self.zones_csv);
        log::info!("Trips dataset: {}", self.trips_csv);
    }
}

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|e| match e {
        VarError::NotPresent => anyhow!("{name} not set"),
        VarError::NotUnicode(_) => anyhow!("{name} value is not valid unicode"),
    })
}
