use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use prettytable::{Table, row};
use serde::Serialize;
use weebsh_core::config::Config;
use weebsh_core::models::*;
use weebsh_core::{RandomImageQuery, TokenType, WeebClient};

mod logging;

#[derive(Parser)]
#[command(name = "weebsh", version)]
#[command(about = "CLI for the weeb.sh image API")]
struct Cli {
    /// Debug logging on stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,
    /// Overrides WEEBSH_TOKEN and the config file.
    #[arg(long, global = true)]
    token: Option<String>,
    #[arg(long, global = true, value_enum)]
    token_type: Option<TokenTypeOpt>,
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print current configuration (redacts token).
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
    /// List image types
    Types {
        #[arg(long)]
        hidden: Option<bool>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List image tags
    Tags {
        #[arg(long)]
        hidden: Option<bool>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show one image by id
    Image {
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Fetch a random image matching a type and/or tags
    Random(RandomArgs),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show effective config
    Doctor,
    /// Write the effective config (including --token, --token-type and
    /// --base-url overrides) to the config file
    Save,
}

#[derive(Parser)]
#[command(group(
    clap::ArgGroup::new("random_filter")
        .required(true)
        .multiple(true)
        .args(&["kind", "tags"])
))]
struct RandomArgs {
    #[arg(long = "type")]
    kind: Option<String>,
    /// Comma separated, e.g. `girl,cute`.
    #[arg(long)]
    tags: Option<String>,
    #[arg(long, value_enum)]
    nsfw: Option<NsfwOpt>,
    #[arg(long)]
    hidden: Option<bool>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Clone, Copy, ValueEnum)]
enum TokenTypeOpt {
    Raw,
    Bearer,
    Wolke,
}

impl TokenTypeOpt {
    fn into_model(self) -> TokenType {
        match self {
            TokenTypeOpt::Raw => TokenType::Raw,
            TokenTypeOpt::Bearer => TokenType::Bearer,
            TokenTypeOpt::Wolke => TokenType::Wolke,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NsfwOpt {
    False,
    True,
    Only,
}

impl NsfwOpt {
    fn into_model(self) -> NsfwFilter {
        match self {
            NsfwOpt::False => NsfwFilter::False,
            NsfwOpt::True => NsfwFilter::True,
            NsfwOpt::Only => NsfwFilter::Only,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs);

    let mut config = Config::load()?;
    if let Some(token) = cli.token {
        config.token = Some(token);
    }
    if let Some(token_type) = cli.token_type {
        config.token_type = token_type.into_model();
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    if let Commands::Config { cmd } = &cli.command {
        match cmd {
            ConfigCommands::Doctor => {
                println!("{}", serde_json::to_string_pretty(&config.doctor())?);
            }
            ConfigCommands::Save => {
                let path = config.save()?;
                println!("saved config to {}", path.display());
            }
        }
        return Ok(());
    }

    let client = WeebClient::from_config(&config)?;

    match cli.command {
        Commands::Config { .. } => {}
        Commands::Types { hidden, format } => {
            let listing = client.get_types(hidden).await?;
            emit_json_or_table(format, &listing, |l| {
                let mut table = Table::new();
                for kind in &l.types {
                    table.add_row(row!["type", kind]);
                }
                table
            })?;
        }
        Commands::Tags { hidden, format } => {
            let tags = client.get_tags(hidden).await?;
            emit_json_or_table(format, &tags, |items| tags_table(items))?;
        }
        Commands::Image { id, format } => {
            let image = client.get_image(&id).await?;
            emit_json_or_table(format, &image, image_table)?;
        }
        Commands::Random(args) => {
            let query = build_random_query(&args)?;
            let image = client.get_random(&query).await?;
            emit_json_or_table(args.format, &image, image_table)?;
        }
    }

    Ok(())
}

fn build_random_query(args: &RandomArgs) -> Result<RandomImageQuery> {
    let mut query = match (&args.kind, &args.tags) {
        (Some(kind), tags) => {
            let query = RandomImageQuery::by_type(kind)?;
            match tags {
                Some(tags) => query.with_tags(tags)?,
                None => query,
            }
        }
        (None, Some(tags)) => RandomImageQuery::by_tags(tags)?,
        (None, None) => return Err(anyhow!("one of --type or --tags is required")),
    };
    if let Some(nsfw) = args.nsfw {
        query = query.with_nsfw(nsfw.into_model());
    }
    if let Some(hidden) = args.hidden {
        query = query.with_hidden(hidden);
    }
    Ok(query)
}

fn emit_json_or_table<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    table_builder: impl FnOnce(&T) -> Table,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        OutputFormat::Table => {
            table_builder(value).printstd();
        }
    }
    Ok(())
}

fn image_table(image: &Image) -> Table {
    let mut table = Table::new();
    table.add_row(row!["id", image.id]);
    table.add_row(row!["type", image.kind]);
    table.add_row(row!["base_type", image.base_type]);
    table.add_row(row!["file_type", image.file_type]);
    table.add_row(row!["mime_type", image.mime_type]);
    table.add_row(row!["nsfw", image.nsfw]);
    table.add_row(row!["hidden", image.hidden]);
    table.add_row(row!["account", image.account]);
    table.add_row(row!["url", image.url]);
    if !image.tags.is_empty() {
        let names = image
            .tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(row!["tags", names]);
    }
    table
}

fn tags_table(tags: &[ImageTag]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["name", "hidden", "user"]);
    for tag in tags {
        table.add_row(row![
            &tag.name,
            tag.hidden,
            tag.user.as_deref().unwrap_or("-")
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: Option<&str>, tags: Option<&str>) -> RandomArgs {
        RandomArgs {
            kind: kind.map(str::to_string),
            tags: tags.map(str::to_string),
            nsfw: Some(NsfwOpt::Only),
            hidden: None,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn random_query_prefers_type_variant() {
        let query = build_random_query(&args(Some("hug"), Some("girl"))).unwrap();
        assert!(matches!(query, RandomImageQuery::ByType { .. }));
        assert_eq!(query.tags(), Some("girl"));
        assert_eq!(query.nsfw(), Some(NsfwFilter::Only));
    }

    #[test]
    fn random_query_from_tags_only() {
        let query = build_random_query(&args(None, Some("girl"))).unwrap();
        assert!(matches!(query, RandomImageQuery::ByTags { .. }));
    }

    #[test]
    fn random_query_rejects_blank_type() {
        assert!(build_random_query(&args(Some(" "), None)).is_err());
    }

    #[test]
    fn random_without_filter_fails_to_parse() {
        let parsed = Cli::try_parse_from(["weebsh", "random", "--nsfw", "only"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn config_save_takes_global_overrides() {
        let cli = Cli::try_parse_from([
            "weebsh",
            "config",
            "save",
            "--token",
            "tok",
            "--token-type",
            "wolke",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                cmd: ConfigCommands::Save
            }
        ));
        assert_eq!(cli.token.as_deref(), Some("tok"));
        assert!(matches!(cli.token_type, Some(TokenTypeOpt::Wolke)));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
