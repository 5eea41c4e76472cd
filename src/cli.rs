//! Command-line surface of the `melt` binary

use clap::builder::ArgPredicate;
use clap::{Parser, ValueEnum};

use crate::config::MeltConfig;
use crate::error::MeltError;

/// Discord's `<t:SECONDS:STYLE>` timestamp markup styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiscordFormat {
    #[value(alias = "d")]
    ShortDate,
    #[value(alias = "D")]
    LongDate,
    #[value(alias = "t")]
    ShortTime,
    #[value(alias = "T")]
    LongTime,
    #[value(alias = "f")]
    ShortDateTime,
    #[value(alias = "F")]
    LongDateTime,
    #[value(alias = "R")]
    Relative,
}

impl DiscordFormat {
    pub const fn template(self) -> &'static str {
        match self {
            DiscordFormat::ShortDate => "<t:%s:d>",
            DiscordFormat::LongDate => "<t:%s:D>",
            DiscordFormat::ShortTime => "<t:%s:t>",
            DiscordFormat::LongTime => "<t:%s:T>",
            DiscordFormat::ShortDateTime => "<t:%s:f>",
            DiscordFormat::LongDateTime => "<t:%s:F>",
            DiscordFormat::Relative => "<t:%s:R>",
        }
    }
}

/// Command-line arguments.
///
/// Snowflakes are taken from the positional arguments and, when standard
/// input is not a terminal, from each line piped in.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "melt",
    version,
    about = "Break snowflake IDs into their parts and print their timestamps"
)]
pub struct CliArgs {
    /// Give the timestamps in a format which, included in a Discord message,
    /// is rendered in the viewer's locale.
    ///
    /// Uses the Discord epoch unless `--epoch` says otherwise.
    #[arg(short, long, value_enum, conflicts_with_all = ["format", "human"])]
    pub discord_format: Option<DiscordFormat>,

    /// The epoch on which the snowflakes are based: `twitter`, `discord`, or
    /// a UNIX timestamp in seconds.
    ///
    /// Environment variable: `MELT_EPOCH`
    #[arg(
        short,
        long,
        env = "MELT_EPOCH",
        default_value = "twitter",
        default_value_if("discord_format", ArgPredicate::IsPresent, Some("discord"))
    )]
    pub epoch: String,

    /// Format each timestamp like this, as defined at
    /// <https://docs.rs/chrono/0.4/chrono/format/strftime/index.html>.
    ///
    /// Additionally, %^d, %^w, and %^s insert the data center, worker and
    /// sequence ID. Defaults to a UNIX timestamp with fractional part.
    #[arg(short, long, conflicts_with = "human")]
    pub format: Option<String>,

    /// Show the timestamps in a human-readable format. Short for
    /// `--format="%Y-%m-%d %H:%M:%S"`.
    #[arg(short = 'H', long)]
    pub human: bool,

    /// The timezone in which formatted timestamps are shown, e.g.
    /// `Europe/Berlin`. Defaults to UTC.
    ///
    /// Environment variable: `MELT_TIMEZONE`
    #[arg(short = 'z', long, env = "MELT_TIMEZONE")]
    pub timezone: Option<String>,

    /// Snowflakes to melt. More can be piped in, one per line.
    #[arg(allow_negative_numbers = true)]
    pub flakes: Vec<String>,
}

impl TryFrom<&CliArgs> for MeltConfig {
    type Error = MeltError;

    fn try_from(args: &CliArgs) -> Result<Self, Self::Error> {
        let mut builder = MeltConfig::builder().epoch_str(&args.epoch)?;

        if let Some(style) = args.discord_format {
            builder = builder.format(style.template());
        } else if let Some(format) = &args.format {
            builder = builder.format(format.as_str());
        } else if args.human {
            builder = builder.human();
        }

        if let Some(timezone) = &args.timezone {
            builder = builder.timezone_name(timezone)?;
        }

        Ok(builder.build())
    }
}
