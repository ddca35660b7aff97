//! Integration tests for the bot wiring.

use bobby_bot::framework;
use bobby_bot::{Args, BotError};
use bobby_commands::{CommandRegistry, ReplyBody};
use bobby_common::BobbyError;
use bobby_config::{CommandsConfig, ConfigError};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_every_dispatcher_command_has_a_poise_command() {
    let registry = CommandRegistry::builtin(&CommandsConfig::default());
    let poise_names: Vec<String> = framework::commands()
        .into_iter()
        .map(|command| command.name)
        .collect();

    assert_eq!(poise_names.len(), registry.len());
    for descriptor in registry.iter() {
        assert!(
            poise_names.iter().any(|name| name == descriptor.name),
            "missing poise command for {}",
            descriptor.name
        );
    }
}

#[test]
fn test_framework_options_use_prefix() {
    let options = framework::options("!");
    assert_eq!(options.prefix_options.prefix.as_deref(), Some("!"));
    assert!(options.prefix_options.mention_as_prefix);
    assert_eq!(options.commands.len(), 5);
}

#[test]
fn test_command_descriptions_come_from_docs() {
    let commands = framework::commands();
    let bobby = commands.iter().find(|c| c.name == "bobby").unwrap();
    assert_eq!(
        bobby.description.as_deref(),
        Some("Display a random quote from Bobby.")
    );
}

#[test]
fn test_args_parse() {
    let args = Args::try_parse_from(["bobby-bot", "--config", "bobby.yaml", "-l", "debug"]).unwrap();
    assert_eq!(args.config, Some(PathBuf::from("bobby.yaml")));
    assert_eq!(args.log_level.as_deref(), Some("debug"));

    let args = Args::try_parse_from(["bobby-bot"]).unwrap();
    assert!(args.config.is_none());
    assert!(args.log_level.is_none());
}

#[test]
fn test_config_error_becomes_startup_error() {
    let err: BotError = ConfigError::validation("discord.token", "must not be empty").into();
    assert!(matches!(err, BotError::Startup(BobbyError::Config { .. })));
    let BotError::Startup(startup) = &err else {
        unreachable!()
    };
    let cause = std::error::Error::source(startup).unwrap();
    assert!(cause.to_string().contains("discord.token"));
}

#[test]
fn test_text_reply_renders_as_content() {
    let reply = bobby_bot::render::create_reply(&ReplyBody::Text("Logging out.".to_string()));
    assert_eq!(reply.content.as_deref(), Some("Logging out."));
    assert!(reply.embeds.is_empty());
}
