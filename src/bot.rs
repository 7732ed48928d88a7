use crate::commands::ping;
use crate::types::{Data, Error};
use pongbot::Config;
use poise::serenity_prelude as serenity;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run() -> pongbot::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pongbot=info")),
        )
        .try_init()
        .ok();

    let config = Config::from_env()?;

    info!("Starting pongbot...");

    // Slash command interactions arrive over the gateway without any intents,
    // so the bot requests none (no message content, presence or member lists).
    let intents = serenity::GatewayIntents::empty();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![ping()],
            event_handler: |context, event, framework, data| {
                Box::pin(handle_event(context, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|_context, _ready, _framework| Box::pin(async move { Ok(Data {}) }))
        .build();

    let mut client = serenity::ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    client.start().await?;

    Ok(())
}

async fn handle_event(
    context: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Ready { data_about_bot } = event {
        info!("{} is online", data_about_bot.user.name);

        // Ready fires again after a reconnect, which re-syncs the command set.
        let commands = &framework.options().commands;
        let result = poise::builtins::register_globally(context, commands).await;
        log_sync_result(result, commands.len());
    }

    Ok(())
}

/// Report the outcome of a command sync.
///
/// A failed sync is logged and swallowed; the bot stays online and the
/// command becomes available again on the next successful sync.
fn log_sync_result(result: Result<(), serenity::Error>, count: usize) {
    match result {
        Ok(()) => info!("Synced {} command(s)", count),
        Err(e) => error!("Failed to sync commands: {}", e),
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Error during setup: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                "Error in command /{}: {error:?}",
                ctx.command().qualified_name
            );
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_sync_is_logged_not_propagated() {
        // A sync error must return normally so the event loop keeps running
        log_sync_result(Err(serenity::Error::Other("network down")), 1);
    }

    #[test]
    fn test_successful_sync_returns_normally() {
        log_sync_result(Ok(()), 1);
    }
}
