// crates/cli/src/options.rs

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::str::FromStr;

use chart::{ChartConfig, DEFAULT_FRACTIONAL_BLOCKS, FULL_BLOCK, Palette};
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use logging::{LogFormat, SubscriberConfig};

/// Comma separated fractional glyphs, index 0 included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FractionGlyphs(pub Vec<String>);

impl FromStr for FractionGlyphs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<String> = s.split(',').map(str::to_string).collect();
        if glyphs.len() != DEFAULT_FRACTIONAL_BLOCKS.len() {
            return Err(format!(
                "expected {} comma separated glyphs, got {}",
                DEFAULT_FRACTIONAL_BLOCKS.len(),
                glyphs.len()
            ));
        }
        if let Some(bad) = glyphs.iter().skip(1).find(|g| g.chars().count() != 1) {
            return Err(format!("glyph '{bad}' must be a single character"));
        }
        Ok(Self(glyphs))
    }
}

fn parse_scale(s: &str) -> Result<NonZeroU32, String> {
    let n: u32 = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    NonZeroU32::new(n).ok_or_else(|| "value must be greater than 0".to_string())
}

fn parse_glyph(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("'{s}' is not a single character")),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "activity-chart",
    about = "Render per-project activity counts from a JSON file as a Markdown bar chart",
    disable_version_flag = true
)]
pub struct ChartOpts {
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "ACTIVITY_CHART_INPUT",
        default_value = chart::DEFAULT_INPUT,
        help_heading = "Input",
        help = "JSON file holding the projects mapping"
    )]
    pub input: PathBuf,
    #[arg(
        short,
        long,
        value_name = "N",
        default_value = "10",
        value_parser = parse_scale,
        help_heading = "Chart",
        help = "activities represented by one full block"
    )]
    pub scale: NonZeroU32,
    #[arg(
        short = 'w',
        long = "max-width",
        value_name = "N",
        default_value_t = chart::DEFAULT_MAX_BAR_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..),
        help_heading = "Chart",
        help = "maximum number of full blocks per bar"
    )]
    pub max_width: u32,
    #[arg(
        long = "full-glyph",
        value_name = "CHAR",
        value_parser = parse_glyph,
        help_heading = "Chart"
    )]
    pub full_glyph: Option<char>,
    #[arg(
        long = "fraction-glyphs",
        value_name = "LIST",
        help_heading = "Chart",
        help = "8 comma separated partial block glyphs, the first one unused"
    )]
    pub fraction_glyphs: Option<FractionGlyphs>,
    #[arg(
        long = "no-fractions",
        conflicts_with = "fraction_glyphs",
        help_heading = "Chart",
        help = "only draw full blocks"
    )]
    pub no_fractions: bool,
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "ACTIVITY_CHART_OUTPUT",
        help_heading = "Output",
        help = "write the chart to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
    #[arg(
        long = "log-format",
        value_name = "FMT",
        value_enum,
        default_value_t = LogFormat::Text,
        help_heading = "Logging"
    )]
    pub log_format: LogFormat,
    #[arg(long = "log-file", value_name = "FILE", help_heading = "Logging")]
    pub log_file: Option<PathBuf>,
    #[arg(
        long = "log-file-format",
        value_name = "FMT",
        value_enum,
        requires = "log_file",
        help_heading = "Logging"
    )]
    pub log_file_format: Option<LogFormat>,
    #[arg(long = "no-color", help_heading = "Logging")]
    pub no_color: bool,
    #[arg(long, help_heading = "Logging")]
    pub timestamps: bool,
    #[arg(short = 'V', long, help_heading = "Misc", help = "print version and exit")]
    pub version: bool,
}

impl ChartOpts {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        Self::from_arg_matches(matches)
    }

    pub fn palette(&self) -> Palette {
        let full = self.full_glyph.unwrap_or(FULL_BLOCK);
        if self.no_fractions {
            Palette::without_fractions(full)
        } else if let Some(FractionGlyphs(glyphs)) = &self.fraction_glyphs {
            Palette::new(full, glyphs.iter().cloned())
        } else {
            Palette::new(full, DEFAULT_FRACTIONAL_BLOCKS)
        }
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig::builder()
            .input_path(self.input.clone())
            .scale(self.scale)
            .max_bar_width(self.max_width)
            .output_path(self.output.clone())
            .palette(self.palette())
            .build()
    }

    pub fn subscriber_config(&self) -> SubscriberConfig {
        let log_file = self
            .log_file
            .clone()
            .map(|path| (path, self.log_file_format.unwrap_or(LogFormat::Text)));
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .log_file(log_file)
            .colored(!self.no_color)
            .timestamps(self.timestamps)
            .build()
    }
}

pub fn cli_command() -> clap::Command {
    ChartOpts::command()
}
