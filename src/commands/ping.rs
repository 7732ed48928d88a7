//! Ping command reporting the live gateway latency.

use crate::types::{Context, Error};
use poise::serenity_prelude as serenity;
use std::time::Duration;

const EMBED_COLOUR: u32 = 0x00ff00;

/// Check bot latency
#[poise::command(slash_command)]
pub async fn ping(context: Context<'_>) -> Result<(), Error> {
    let heartbeat = context.ping().await;
    let latency = latency_millis(heartbeat);

    let embed = serenity::CreateEmbed::new()
        .title("🏓 Pong!")
        .description(format!("Bot latency: **{}ms**", latency))
        .colour(EMBED_COLOUR);

    context
        .send(poise::CreateReply::default().embed(embed))
        .await?;

    Ok(())
}

/// Convert a heartbeat round-trip to whole milliseconds.
///
/// Uses `f64::round`, so ties round away from zero (42.5ms displays as 43ms).
fn latency_millis(heartbeat: Duration) -> u64 {
    (heartbeat.as_secs_f64() * 1000.0).round() as u64
}
