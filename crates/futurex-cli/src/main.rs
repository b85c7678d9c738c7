use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use futurex_core::docs::parse_toc;
use futurex_core::entry::masked_model_name;
use futurex_core::fixtures::{FINANCE_MD, OVERVIEW_MD};
use futurex_core::period::{self, bucket_label};
use futurex_core::table::{self, NO_MATCHES_MESSAGE};
use futurex_core::{
    Analytics, Dataset, FilterColumn, FilterConfig, LeaderboardEntry, Level, NoopAnalytics,
    PeriodType, QuestionBank, SiteConfig, SortConfig, SortDirection, SortField, TableView,
    TracingAnalytics,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "futurex")]
#[command(about = "FutureX - live future-prediction leaderboard viewer", long_about = None)]
struct Cli {
    /// Site config JSON (defaults to the bundled config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Leaderboard dataset JSON (defaults to the bundled dataset)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable buckets for a period
    Options {
        /// Period type (overall, weekly, monthly)
        #[arg(short, long, default_value = "weekly")]
        period: PeriodType,

        /// Group weekly buckets under their month
        #[arg(long)]
        tree: bool,
    },

    /// Show a leaderboard bucket
    Leaderboard {
        /// Period type (overall, weekly, monthly)
        #[arg(short, long)]
        period: Option<PeriodType>,

        /// Bucket key, e.g. 2025-08-W1 or 2025-08 (defaults to the latest)
        #[arg(short, long)]
        bucket: Option<String>,

        /// Sort column (overall, level1..level4)
        #[arg(short, long)]
        sort: Option<SortField>,

        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,

        /// Keep only these models (repeatable)
        #[arg(short, long)]
        model: Vec<String>,

        /// Keep only these agent frameworks (repeatable)
        #[arg(short, long)]
        framework: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// List sample questions for a level
    Questions {
        /// Level 1-4
        #[arg(short, long, default_value = "1")]
        level: Level,
    },

    /// Print the table of contents of a documentation page
    Toc {
        #[arg(value_enum, default_value = "overview")]
        page: DocPage,
    },

    /// Print the effective site config
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DocPage {
    Overview,
    Finance,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Some(Commands::Options { period, tree }) => print!("{}", render_options(&config, period, tree)),
        Some(Commands::Leaderboard {
            period,
            bucket,
            sort,
            asc,
            model,
            framework,
            output,
        }) => {
            let dataset = load_dataset(cli.data.as_ref())?;
            let period = period.unwrap_or(config.default_period);
            analytics_for(&config).track(&period.click_event());
            let bucket = match bucket {
                Some(b) => b,
                None => period::default_bucket(&config.window, period)
                    .with_context(|| format!("no {} buckets in the configured window", period))?,
            };
            let direction = if asc { SortDirection::Asc } else { SortDirection::Desc };
            let sort = SortConfig {
                field: sort,
                direction,
            };
            let mut filter = FilterConfig::default();
            filter.set(FilterColumn::ModelName, model);
            filter.set(FilterColumn::AgentFramework, framework);

            tracing::debug!(%period, bucket = %bucket, ?sort, "Rendering leaderboard");
            let view = TableView::build(&dataset, period, &bucket, &filter, sort);
            print!("{}", render_leaderboard(&config, period, &bucket, &view, output)?);
        }
        Some(Commands::Questions { level }) => {
            let bank = QuestionBank::bundled()?;
            print!("{}", render_questions(&bank, level));
        }
        Some(Commands::Toc { page }) => print!("{}", render_toc(page)),
        Some(Commands::Config) => println!("{}", serde_json::to_string_pretty(&config)?),
        None => display_help(),
    }

    Ok(())
}

/// Analytics events become structured log lines when enabled in config.
fn analytics_for(config: &SiteConfig) -> Box<dyn Analytics> {
    if config.analytics.enabled {
        Box::new(TracingAnalytics)
    } else {
        Box::new(NoopAnalytics)
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    match path {
        Some(p) => SiteConfig::load(p).with_context(|| format!("loading config {}", p.display())),
        None => Ok(SiteConfig::bundled()?),
    }
}

fn load_dataset(path: Option<&PathBuf>) -> Result<Dataset> {
    match path {
        Some(p) => Dataset::load(p).with_context(|| format!("loading dataset {}", p.display())),
        None => Ok(Dataset::bundled()?),
    }
}

fn display_help() {
    println!();
    println!("  FutureX Leaderboard");
    println!();
    println!("Available Commands:");
    println!("  options [-p weekly] [--tree]     List selectable buckets");
    println!("  leaderboard [-p weekly] [-b KEY] Show a leaderboard bucket");
    println!("    Options:");
    println!("      -s, --sort       overall, level1, level2, level3, level4");
    println!("      --asc            Sort ascending");
    println!("      -m, --model      Filter by model (repeatable)");
    println!("      -f, --framework  Filter by agent framework (repeatable)");
    println!("      -o, --output     table, json, csv");
    println!("  questions [-l 1]                 List sample questions");
    println!("  toc [overview|finance]           Documentation contents");
    println!("  config                           Print the effective config");
    println!();
}

fn render_options(config: &SiteConfig, period: PeriodType, tree: bool) -> String {
    let mut out = String::new();
    if tree && period == PeriodType::Weekly {
        for month in period::month_options(&config.window) {
            out.push_str(&format!("{:<12} {}\n", month.value, month.label));
            for week in month.weeks {
                out.push_str(&format!("  {:<12} {}\n", week.value, week.label));
            }
        }
        return out;
    }

    for option in period::time_options(&config.window, period) {
        out.push_str(&format!("{:<12} {}\n", option.value, option.label));
    }
    out
}

#[derive(Serialize)]
struct CsvRow<'a> {
    rank: usize,
    model: &'a str,
    agent_framework: &'a str,
    organization: &'a str,
    overall: String,
    events: u64,
    level1: f64,
    level2: f64,
    level3: f64,
    level4: f64,
}

fn render_leaderboard(
    config: &SiteConfig,
    period: PeriodType,
    bucket: &str,
    view: &TableView,
    output: OutputFormat,
) -> Result<String> {
    let rows = match view {
        TableView::NoData(empty) => {
            return Ok(format!("{}\n{}\n{}\n", empty.title, empty.message, empty.hint));
        }
        TableView::NoMatches => return Ok(format!("{}\n", NO_MATCHES_MESSAGE)),
        TableView::Rows(rows) => rows,
    };

    let mut out = String::new();
    match output {
        OutputFormat::Json => {
            let entries: Vec<LeaderboardEntry> = rows
                .iter()
                .map(|r| LeaderboardEntry {
                    model_name: r.entry.display_model_name(&config.undisclosed_models),
                    ..r.entry.clone()
                })
                .collect();
            out.push_str(&serde_json::to_string_pretty(&entries)?);
            out.push('\n');
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for r in rows {
                let e = &r.entry;
                writer.serialize(CsvRow {
                    rank: r.rank,
                    model: masked_model_name(&e.model_name, &config.undisclosed_models),
                    agent_framework: &e.agent_framework,
                    organization: &e.organization,
                    overall: format!("{:.2}", e.overall_score),
                    events: e.number_of_events,
                    level1: e.level1_score,
                    level2: e.level2_score,
                    level3: e.level3_score,
                    level4: e.level4_score,
                })?;
            }
            let bytes = writer.into_inner().context("flushing csv output")?;
            out.push_str(&String::from_utf8(bytes)?);
        }
        OutputFormat::Table => {
            out.push_str(&format!("{}\n", bucket_label(period, bucket)));
            out.push_str(&format!("{:-<118}\n", ""));
            out.push_str(&format!(
                "  {:<5} {:<22} {:<22} {:<14} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}\n",
                "#", "Model", "Agent Framework", "Organization", "Overall", "Events", "L1", "L2", "L3", "L4"
            ));
            out.push_str(&format!("{:-<118}\n", ""));
            for r in rows {
                let e = &r.entry;
                let rank = r
                    .medal
                    .map(|m| m.emoji().to_string())
                    .unwrap_or_else(|| r.rank.to_string());
                out.push_str(&format!(
                    "  {:<5} {:<22} {:<22} {:<14} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}\n",
                    rank,
                    e.display_model_name(&config.undisclosed_models),
                    e.agent_framework,
                    e.organization,
                    table::format_overall(e.overall_score),
                    table::format_count(e.number_of_events),
                    table::format_level(e.level1_score),
                    table::format_level(e.level2_score),
                    table::format_level(e.level3_score),
                    table::format_level(e.level4_score)
                ));
            }
        }
    }
    Ok(out)
}

fn render_questions(bank: &QuestionBank, level: Level) -> String {
    let questions = bank.for_level(level);
    if questions.is_empty() {
        return format!("{}\n", level.empty_message());
    }

    let mut out = String::new();
    for (i, q) in questions.iter().enumerate() {
        out.push_str(&format!("{}. [{}] {}\n", i + 1, q.level, q.question));
        if q.is_open_ended() {
            out.push_str(&format!("   {}\n", futurex_core::questions::OPEN_ENDED_LABEL));
        } else {
            out.push_str(&format!("   Options: {}\n", q.options.join(" | ")));
        }
    }
    out
}

fn render_toc(page: DocPage) -> String {
    let source = match page {
        DocPage::Overview => OVERVIEW_MD,
        DocPage::Finance => FINANCE_MD,
    };
    parse_toc(source)
        .into_iter()
        .map(|item| {
            let indent = "  ".repeat(usize::from(item.depth.saturating_sub(2)));
            format!("{}{} (#{})\n", indent, item.text, item.id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futurex_core::TimeWindow;

    fn config_with_window(window: TimeWindow) -> SiteConfig {
        SiteConfig {
            window,
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_cli_parses_leaderboard_flags() {
        let cli = Cli::try_parse_from([
            "futurex", "leaderboard", "-p", "weekly", "-b", "2025-08-W1", "-s", "level2", "--asc",
            "-m", "GPT-5", "-m", "Grok-4", "-o", "csv",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Leaderboard {
                period,
                bucket,
                sort,
                asc,
                model,
                output,
                ..
            }) => {
                assert_eq!(period, Some(PeriodType::Weekly));
                assert_eq!(bucket.as_deref(), Some("2025-08-W1"));
                assert_eq!(sort, Some(SortField::Level2Score));
                assert!(asc);
                assert_eq!(model, vec!["GPT-5", "Grok-4"]);
                assert_eq!(output, OutputFormat::Csv);
            }
            _ => panic!("expected leaderboard command"),
        }
    }

    #[test]
    fn test_invalid_period_rejected() {
        assert!(Cli::try_parse_from(["futurex", "options", "-p", "daily"]).is_err());
    }

    #[test]
    fn test_render_options_tree() {
        let config = config_with_window(TimeWindow {
            start_year: 2025,
            start_month: 7,
            start_week: 4,
            end_year: 2025,
            end_month: 8,
            end_week: 1,
        });
        let out = render_options(&config, PeriodType::Weekly, true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("2025-07"));
        assert!(lines[1].trim_start().starts_with("2025-07-W4"));
        assert!(lines[3].contains("Week 1"));
    }

    #[test]
    fn test_render_leaderboard_masks_undisclosed() {
        let dataset = Dataset::bundled().unwrap();
        let config = SiteConfig::default();
        let view = TableView::build(
            &dataset,
            PeriodType::Overall,
            "overall",
            &FilterConfig::default(),
            SortConfig::default(),
        );
        let out = render_leaderboard(&config, PeriodType::Overall, "overall", &view, OutputFormat::Csv).unwrap();
        assert!(out.starts_with("rank,model"));
        assert!(out.contains("Undisclosed"));
        assert!(!out.contains(",Manus,Manus,"));
    }

    fn entry(model: &str, framework: &str, organization: &str, overall: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            model_name: model.to_string(),
            agent_framework: framework.to_string(),
            organization: organization.to_string(),
            overall_score: overall,
            number_of_events: 10,
            test_type: None,
            level1_score: 1.0,
            level2_score: 2.0,
            level3_score: 3.0,
            level4_score: 4.0,
        }
    }

    fn overall_view(entries: Vec<LeaderboardEntry>) -> TableView {
        let dataset = Dataset {
            overall: entries,
            ..Dataset::default()
        };
        TableView::build(
            &dataset,
            PeriodType::Overall,
            "overall",
            &FilterConfig::default(),
            SortConfig::default(),
        )
    }

    #[test]
    fn test_render_leaderboard_json_masks_undisclosed() {
        let config = SiteConfig::default();
        let view = overall_view(vec![entry("Manus", "Manus", "Monica", 30.0), entry("GPT-5", "SmolAgent", "OpenAI", 20.0)]);
        let out = render_leaderboard(&config, PeriodType::Overall, "overall", &view, OutputFormat::Json).unwrap();
        let parsed: Vec<LeaderboardEntry> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0].model_name, "Undisclosed");
        assert_eq!(parsed[0].agent_framework, "Manus");
        assert_eq!(parsed[1].model_name, "GPT-5");
        assert!(!out.contains("\"modelName\": \"Manus\""));
    }

    #[test]
    fn test_render_leaderboard_csv_quotes_commas() {
        let config = SiteConfig::default();
        let view = overall_view(vec![entry("GPT-5", "SmolAgent", "OpenAI, Inc.", 20.0)]);
        let out = render_leaderboard(&config, PeriodType::Overall, "overall", &view, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "rank,model,agent_framework,organization,overall,events,level1,level2,level3,level4"
        );
        assert_eq!(lines[1], "1,GPT-5,SmolAgent,\"OpenAI, Inc.\",20.00,10,1.0,2.0,3.0,4.0");
    }

    #[test]
    fn test_render_leaderboard_empty_states() {
        let dataset = Dataset::bundled().unwrap();
        let config = SiteConfig::default();
        let view = TableView::build(
            &dataset,
            PeriodType::Monthly,
            "2025-08",
            &FilterConfig::default(),
            SortConfig::default(),
        );
        let out = render_leaderboard(&config, PeriodType::Monthly, "2025-08", &view, OutputFormat::Table).unwrap();
        assert!(out.starts_with("No Data Available"));
    }

    #[test]
    fn test_render_toc_indents_by_depth() {
        let out = render_toc(DocPage::Overview);
        assert!(out.lines().any(|l| l.starts_with("1. Why Future Prediction")));
        assert!(out.lines().any(|l| l.starts_with("  2.1 Level 1: Basic")));
    }
}
