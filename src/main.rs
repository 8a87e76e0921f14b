// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Initialize logging (stderr, so --json output stays clean)
// 3. Analyse the page
// 4. Print the result
// 5. Exit with proper code (0 = ok, 1 = inaccessible links, 2 = error)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use log::error;

use cli::Cli;
use page_analyzer::{AnalysisResult, AnalyzeError, Analyzer};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            // Typed analysis failures carry a kind an outer layer would map
            // to a status code; log it for the same purpose
            if let Some(kind) = e.downcast_ref::<AnalyzeError>().map(AnalyzeError::kind) {
                error!("Analysis failed ({:?})", kind);
            }
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = analysed, no inaccessible links observed
//   Ok(1) = analysed, at least one inaccessible link
//   Err   = the analysis failed
async fn run(cli: &Cli) -> Result<i32> {
    let analyzer = Analyzer::new(cli.analyzer_config())?;
    let result = analyzer.analyze(&cli.url).await?;

    print_result(&result, cli.json)?;

    if result.has_inaccessible_links() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn print_result(result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print_table(result);
    }
    Ok(())
}

fn print_table(result: &AnalysisResult) {
    let headings = result.heading_counts();

    println!("🔍 {}", result.url());
    println!("{}", "=".repeat(60));
    println!("{:<26} {}", "HTML version", result.html_version());
    println!("{:<26} {}", "Page title", result.page_title());
    for level in 1..=6 {
        println!(
            "{:<26} {}",
            format!("h{} headings", level),
            headings.get(level).unwrap_or_default()
        );
    }
    println!("{:<26} {}", "Links", result.link_count());
    println!("{:<26} {}", "Inaccessible links", result.inaccessible_link_count());
    println!(
        "{:<26} {}",
        "Login form",
        if result.has_login_form() { "yes" } else { "no" }
    );
    println!();

    if result.has_inaccessible_links() {
        println!(
            "❌ {} of {} link(s) failed within the collection window",
            result.inaccessible_link_count(),
            result.link_count()
        );
    } else {
        println!("✅ No inaccessible links observed");
    }
}
