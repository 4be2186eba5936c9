//! Template rendering for the generated bot project.
//!
//! Everything here is deterministic string assembly: the option set decides
//! which blocks of the entry point are emitted and which packages end up in
//! the dependency list. No file I/O happens in this module.

use crate::args::{DbLibrary, EnvLoader};
use crate::error::Result;

/// Messaging library every generated bot depends on.
pub const BASE_DEPENDENCY: &str = "discord.js";
/// Driver package installed when the mysql option is selected.
pub const MYSQL_DEPENDENCY: &str = "mysql";
/// Loader package installed when the dotenv option is selected.
pub const DOTENV_DEPENDENCY: &str = "dotenv";

/// Computes the packages to install into the generated project.
///
/// The base messaging library is always first; driver and loader packages
/// are appended based on the options. The list never contains duplicates.
pub fn dependency_list(dblib: DbLibrary, varenv: EnvLoader) -> Vec<&'static str> {
    let mut dependencies = vec![BASE_DEPENDENCY];
    if dblib == DbLibrary::Mysql {
        dependencies.push(MYSQL_DEPENDENCY);
    }
    if varenv == EnvLoader::Dotenv {
        dependencies.push(DOTENV_DEPENDENCY);
    }
    dependencies
}

const INDEX_DOTENV_BOOTSTRAP: &str = "require('dotenv').config();\n";

const INDEX_REQUIRES: &str = "\
const fs = require('node:fs');
const path = require('node:path');
const { Client, Collection, GatewayIntentBits, Partials } = require('discord.js');
";

const INDEX_MYSQL_BLOCK: &str = "\
const mysql = require('mysql');
const connection = mysql.createConnection({
    host: process.env.DB_HOST || 'localhost',
    user: process.env.DB_USER || 'user',
    password: process.env.DB_PASSWORD || 'password',
    database: process.env.DB_NAME || 'database_name',
});

connection.connect(err => {
    if (err) throw err;
    console.log('Connected to MySQL database');
});
";

// The cooldown store lives on the client so the dispatch handler receives it
// through the context it is called with, not through module-global state.
const INDEX_BODY: &str = r#"
const client = new Client({
    intents: [GatewayIntentBits.Guilds, GatewayIntentBits.GuildMembers, GatewayIntentBits.GuildMessages, GatewayIntentBits.MessageContent, GatewayIntentBits.GuildMessageReactions, GatewayIntentBits.GuildPresences, GatewayIntentBits.GuildIntegrations, GatewayIntentBits.GuildEmojisAndStickers],
    partials: [Partials.Message, Partials.Channel, Partials.Reaction, Partials.User],
});
client.commands = new Collection();
client.cooldowns = new Map();

const commandsPath = path.join(__dirname, 'Commands');
const commandFiles = fs.readdirSync(commandsPath).filter(file => file.endsWith('.js'));
for (const file of commandFiles) {
    const filePath = path.join(commandsPath, file);
    const command = require(filePath);
    if ('data' in command && 'execute' in command) {
        client.commands.set(command.data.name, command);
    } else {
        console.log(`[WARNING] The command at ${filePath} is missing a required data or execute property.`);
    }
}

const eventsPath = path.join(__dirname, 'Events');
const eventFiles = fs.readdirSync(eventsPath).filter(file => file.endsWith('.js'));
for (const file of eventFiles) {
    const filePath = path.join(eventsPath, file);
    const event = require(filePath);
    if (event.once) {
        client.once(event.name, (...args) => event.execute(...args, client));
    } else {
        client.on(event.name, (...args) => event.execute(...args, client));
    }
}

client.login(process.env.DISCORD_TOKEN ?? '');
"#;

/// Renders the entry point of the generated bot.
///
/// Block order: the dotenv bootstrap (when selected) comes before every
/// other statement, then the base requires, then the mysql connection block
/// (when selected), then the client setup and loader logic.
pub fn render_index(dblib: DbLibrary, varenv: EnvLoader) -> String {
    let mut content = String::new();
    if varenv == EnvLoader::Dotenv {
        content.push_str(INDEX_DOTENV_BOOTSTRAP);
    }
    content.push_str(INDEX_REQUIRES);
    if dblib == DbLibrary::Mysql {
        content.push_str(INDEX_MYSQL_BLOCK);
    }
    content.push_str(INDEX_BODY);
    content
}

/// Interaction dispatch handler written to `Events/InteractionCreate.js`.
///
/// Enforces a 5 second per-user cooldown read from `client.cooldowns`,
/// reports execution errors back to the interaction, and on every executed
/// path resets the user's cooldown and schedules its clearance.
pub const INTERACTION_CREATE_EVENT: &str = r#"const { Events } = require('discord.js');

const COOLDOWN_MS = 5000;

module.exports = {
    name: Events.InteractionCreate,
    once: false,
    async execute(interaction, client) {
        const command = client.commands.get(interaction.commandName);
        if (!command || !interaction.isChatInputCommand()) { return; }
        const cooldowns = client.cooldowns;
        const expiry = cooldowns.get(interaction.user.id);
        if (expiry && expiry > Date.now()) {
            return interaction.reply({ content: 'Commands are subject to a 5 second cooldown ...', ephemeral: true });
        }
        try {
            await command.execute(interaction, client);
        } catch (error) {
            console.error(error);
            if (interaction.replied || interaction.deferred) {
                await interaction.followUp({ content: 'There was an error while executing this command.', ephemeral: true });
            } else {
                await interaction.reply({ content: 'There was an error while executing this command.', ephemeral: true });
            }
        } finally {
            cooldowns.set(interaction.user.id, Date.now() + COOLDOWN_MS);
            setTimeout(() => cooldowns.delete(interaction.user.id), COOLDOWN_MS);
        }
    },
};
"#;

/// Example command written to `Commands/hello.js`.
pub const HELLO_COMMAND: &str = r#"const { SlashCommandBuilder } = require('discord.js');

module.exports = {
    data: new SlashCommandBuilder()
        .setName('hello')
        .setDescription('Answer with world!'),
    async execute(interaction) {
        await interaction.reply('world!');
    },
};
"#;

/// Ignore rules for the generated project.
pub const GITIGNORE: &str = "node_modules/\n.env\n";

/// Renders the npm manifest of the generated project.
///
/// Written before the install step so npm records the installed packages
/// into it.
pub fn render_package_json(name: &str) -> Result<String> {
    let manifest = serde_json::json!({
        "name": name,
        "version": "0.1.0",
        "description": "A Discord bot",
        "main": "index.js",
        "scripts": {
            "start": "node index.js"
        }
    });
    let mut rendered = serde_json::to_string_pretty(&manifest)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Renders the `.env` skeleton written when the dotenv option is selected.
pub fn render_env_file(dblib: DbLibrary) -> String {
    let mut content = String::from("DISCORD_TOKEN=\n");
    if dblib == DbLibrary::Mysql {
        content.push_str("DB_HOST=localhost\n");
        content.push_str("DB_USER=user\n");
        content.push_str("DB_PASSWORD=password\n");
        content.push_str("DB_NAME=database_name\n");
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_dependency_list_base_only() {
        assert_eq!(
            dependency_list(DbLibrary::None, EnvLoader::None),
            vec!["discord.js"]
        );
    }

    #[test]
    fn test_dependency_list_full() {
        assert_eq!(
            dependency_list(DbLibrary::Mysql, EnvLoader::Dotenv),
            vec!["discord.js", "mysql", "dotenv"]
        );
    }

    #[test]
    fn test_plain_index_has_no_optional_blocks() {
        let content = render_index(DbLibrary::None, EnvLoader::None);
        assert!(!content.contains("dotenv"));
        assert!(!content.contains("mysql"));
        assert!(content.contains("new Client("));
    }

    #[test]
    fn test_mysql_index_has_fallback_defaults() {
        let content = render_index(DbLibrary::Mysql, EnvLoader::None);
        assert!(content.contains("mysql.createConnection"));
        assert!(content.contains("process.env.DB_HOST || 'localhost'"));
        assert!(content.contains("process.env.DB_USER || 'user'"));
        assert!(content.contains("process.env.DB_PASSWORD || 'password'"));
        assert!(content.contains("process.env.DB_NAME || 'database_name'"));
    }

    #[test]
    fn test_dotenv_bootstrap_comes_first() {
        let content = render_index(DbLibrary::Mysql, EnvLoader::Dotenv);
        assert!(content.starts_with("require('dotenv').config();\n"));
    }

    #[test]
    fn test_index_loaders_warn_instead_of_failing() {
        let content = render_index(DbLibrary::None, EnvLoader::None);
        assert!(content.contains("'data' in command && 'execute' in command"));
        assert!(content.contains("[WARNING]"));
        // Events register as one-shot or persistent listeners.
        assert!(content.contains("client.once(event.name"));
        assert!(content.contains("client.on(event.name"));
    }

    #[test]
    fn test_interaction_event_cooldown_contract() {
        assert!(INTERACTION_CREATE_EVENT.contains("COOLDOWN_MS = 5000"));
        assert!(INTERACTION_CREATE_EVENT.contains("client.cooldowns"));
        assert!(INTERACTION_CREATE_EVENT.contains("finally"));
        // No module-global cooldown store.
        assert!(!INTERACTION_CREATE_EVENT.contains("const cooldown = {}"));
    }

    #[test]
    fn test_package_json_round_trips() {
        let rendered = render_package_json("bot1").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["name"], "bot1");
        assert_eq!(parsed["main"], "index.js");
        assert_eq!(parsed["scripts"]["start"], "node index.js");
    }

    #[test]
    fn test_env_file_mysql_keys() {
        let plain = render_env_file(DbLibrary::None);
        assert_eq!(plain, "DISCORD_TOKEN=\n");
        let with_db = render_env_file(DbLibrary::Mysql);
        assert!(with_db.contains("DB_HOST=localhost"));
        assert!(with_db.contains("DB_NAME=database_name"));
    }

    #[test]
    fn test_fuzz_dependency_list_invariants() {
        // Run random option combinations and assert the list invariants hold.
        let mut rng = rand::rng();

        for _ in 0..1000 {
            let dblib = if rng.random_range(0..2) == 0 {
                DbLibrary::Mysql
            } else {
                DbLibrary::None
            };
            let varenv = if rng.random_range(0..2) == 0 {
                EnvLoader::Dotenv
            } else {
                EnvLoader::None
            };

            let deps = dependency_list(dblib, varenv);

            assert_eq!(
                deps.iter().filter(|d| **d == BASE_DEPENDENCY).count(),
                1,
                "base dependency must appear exactly once"
            );
            assert_eq!(
                deps.contains(&MYSQL_DEPENDENCY),
                dblib == DbLibrary::Mysql
            );
            assert_eq!(
                deps.contains(&DOTENV_DEPENDENCY),
                varenv == EnvLoader::Dotenv
            );

            let mut unique = deps.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), deps.len(), "no duplicate dependencies");
        }
    }
}
