//! Fetches a chamber roster. Requires a ProPublica API key:
//!
//! ```sh
//! PROPUBLICA_API_KEY=... cargo run --example fetch_members
//! ```

use congress_api::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("PROPUBLICA_API_KEY")?;
    let client = Client::new(&key);

    let members = client.get_chamber_members(118, "senate").await?;
    for member in &members {
        println!(
            "{} {} {} ({})",
            member.identity.id,
            member.identity.first_name.as_deref().unwrap_or(""),
            member.identity.last_name.as_deref().unwrap_or(""),
            member.identity.party.as_deref().unwrap_or("?"),
        );
    }
    Ok(())
}
