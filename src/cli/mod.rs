//! Command line front end.

use std::io::{self, Write};

use banquet::{
    coupons::InvalidDateError,
    fixtures::{Fixture, FixtureError},
};
use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;
use thiserror::Error;

use crate::cli::config::{CatalogConfig, LoggingConfig};

mod commands;
pub(crate) mod config;
pub(crate) mod logging;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog could not be loaded or a record was missing.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// A coupon date in the catalog is malformed.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "banquet", about = "Restaurant marketing companion", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) catalog: CatalogConfig,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show restaurant details
    Info,

    /// List post templates and their placeholders
    Templates,

    /// Fill in a post template
    Render(RenderArgs),

    /// List coupons and whether they are redeemable
    Coupons(CouponsArgs),

    /// List social platform connections
    Platforms,

    /// Show the analytics summary
    Analytics,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Template id
    id: u32,

    /// Placeholder value, repeatable
    #[arg(
        short = 's',
        long = "set",
        value_name = "NAME=VALUE",
        value_parser = parse_assignment
    )]
    values: Vec<(String, String)>,
}

#[derive(Debug, Args)]
struct CouponsArgs {
    /// Day to evaluate coupons on (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    today: Option<Date>,

    /// Only list published coupons redeemable on that day
    #[arg(long)]
    redeemable: bool,
}

impl Cli {
    pub(crate) fn run(self, out: &mut impl Write) -> Result<(), CliError> {
        let fixture = match &self.catalog.fixtures {
            Some(dir) => Fixture::from_dir(dir)?,
            None => Fixture::bundled()?,
        };

        match self.command {
            Command::Info => commands::info(&fixture, out),
            Command::Templates => commands::templates(&fixture, out),
            Command::Render(args) => commands::render(&fixture, args.id, args.values, out),
            Command::Coupons(args) => {
                let today = args.today.unwrap_or_else(|| jiff::Zoned::now().date());

                commands::coupons(&fixture, today, args.redeemable, out)
            }
            Command::Platforms => commands::platforms(&fixture, out),
            Command::Analytics => commands::analytics(&fixture, out),
        }
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))?;

    if name.is_empty() {
        return Err(format!("missing placeholder name in {raw:?}"));
    }

    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use super::*;

    fn run(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let argv = std::iter::once("banquet").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();

        cli.run(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn parse_assignment_splits_on_first_equals() -> TestResult {
        assert_eq!(
            parse_assignment("price=$9 = deal")?,
            ("price".to_string(), "$9 = deal".to_string())
        );
        assert_eq!(
            parse_assignment("wine_name=")?,
            ("wine_name".to_string(), String::new())
        );

        Ok(())
    }

    #[test]
    fn parse_assignment_rejects_malformed_input() {
        assert!(parse_assignment("price").is_err());
        assert!(parse_assignment("=9").is_err());
    }

    #[test]
    fn render_fills_given_values_and_keeps_the_rest() -> TestResult {
        let output = run(&[
            "render",
            "2",
            "--set",
            "dish_name=Peking Duck",
            "-s",
            "price=$28",
        ])?;

        assert!(
            output.contains("Enjoy our Peking Duck with a complimentary drink for just $28.")
        );
        assert!(output.contains("Call us at {phone_number}."));

        Ok(())
    }

    #[test]
    fn render_unknown_template_fails() {
        let result = run(&["render", "42"]);

        assert!(
            result.is_err_and(|err| err.to_string().contains("Template not found: 42"))
        );
    }

    #[test]
    fn coupons_lists_status_for_given_day() -> TestResult {
        let output = run(&["coupons", "--today", "2024-08-20"])?;

        assert!(output.contains("DRAGON10"));
        assert!(output.contains("BOGO2024"));
        assert!(output.contains("upcoming"));
        assert!(output.contains("Aug 1, 2024"));

        Ok(())
    }

    #[test]
    fn coupons_redeemable_hides_drafts_and_future_offers() -> TestResult {
        let output = run(&["coupons", "--today", "2024-08-20", "--redeemable"])?;

        assert!(output.contains("DRAGON10"));
        assert!(output.contains("NEWDRAGON30"));
        assert!(!output.contains("SWEETDRAGON"));
        assert!(!output.contains("BOGO2024"));

        Ok(())
    }

    #[test]
    fn coupons_listing_marks_malformed_rows_and_keeps_the_rest() -> TestResult {
        let dir = tempfile::tempdir()?;
        let base = dir.path();

        fs::write(base.join("restaurant.yml"), "restaurant:\n  name: Jade Garden\n")?;
        fs::write(base.join("templates.yml"), "templates: []\n")?;
        fs::write(base.join("platforms.yml"), "platforms: []\n")?;
        fs::write(
            base.join("coupons.yml"),
            "coupons:\n  - id: 1\n    title: Lunch Deal\n    valid_from: \"2024-08-01T10:00Z\"\n    valid_to: \"2024-08-31\"\n  - id: 2\n    title: Broken Deal\n    valid_from: \"2024-08-01\"\n    valid_to: \"31/08/2024\"\n",
        )?;
        fs::write(
            base.join("analytics.yml"),
            "analytics:\n  social_engagement:\n    followers: 1\n    engagement: 0.5\n    weekly_growth: 0.1\n    top_platform: WeChat\n",
        )?;

        let path = base.to_string_lossy().into_owned();
        let output = run(&["--fixtures", &path, "coupons", "--today", "2024-08-20"])?;

        assert!(output.contains("Aug 1, 2024 - Aug 31, 2024"));
        assert!(output.contains("active"));
        assert!(output.contains("31/08/2024"));
        assert!(output.contains("invalid date"));

        Ok(())
    }

    #[test]
    fn coupons_rejects_malformed_today() {
        let result = Cli::try_parse_from(["banquet", "coupons", "--today", "2024-13-01"]);

        assert!(result.is_err());
    }

    #[test]
    fn templates_lists_placeholders() -> TestResult {
        let output = run(&["templates"])?;

        assert!(output.contains("Happy Hour"));
        assert!(output.contains("days, start_time, end_time, discount, price"));

        Ok(())
    }

    #[test]
    fn platforms_and_info_and_analytics_render() -> TestResult {
        let platforms = run(&["platforms"])?;
        let info = run(&["info"])?;
        let analytics = run(&["analytics"])?;

        assert!(platforms.contains("@golden_dragon"));
        assert!(platforms.contains("disconnected"));
        assert!(info.contains("Golden Dragon Restaurant"));
        assert!(analytics.contains("12580"));
        assert!(analytics.contains("Buy One Get One Free"));

        Ok(())
    }

    #[test]
    fn fixtures_directory_overrides_bundled_catalog() -> TestResult {
        let dir = tempfile::tempdir()?;
        let bundled = Fixture::bundled()?;
        let base = dir.path();

        fs::write(
            base.join("restaurant.yml"),
            "restaurant:\n  name: Jade Garden\n",
        )?;
        fs::write(base.join("templates.yml"), "templates: []\n")?;
        fs::write(base.join("platforms.yml"), "platforms: []\n")?;
        fs::write(base.join("coupons.yml"), "coupons: []\n")?;
        fs::write(
            base.join("analytics.yml"),
            "analytics:\n  social_engagement:\n    followers: 1\n    engagement: 0.5\n    weekly_growth: 0.1\n    top_platform: WeChat\n",
        )?;

        let path = base.to_string_lossy().into_owned();
        let info = run(&["--fixtures", &path, "info"])?;

        assert!(info.contains("Jade Garden"));
        assert!(!info.contains(&bundled.restaurant().name));

        Ok(())
    }
}
