use std::env;
use std::fs;
use std::path::Path;
use std::process::exit;

use report_checker::corpus::RegulationCorpus;
use report_checker::models::config::CheckerConfig;
use report_checker::processing::checker::RequirementChecker;
use report_checker::processing::embedding::FastembedEmbedder;
use report_checker::repository::fs::FsRepository;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut force_recompute = false;
    let mut as_json = false;
    let mut report_path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--force" => force_recompute = true,
            "--json" => as_json = true,
            _ => report_path = Some(arg),
        }
    }
    let Some(report_path) = report_path else {
        eprintln!("Usage: report-checker [--force] [--json] <report-file>");
        exit(2);
    };

    let config_path = env::var("CHECKER_CONFIG").unwrap_or_else(|_| "checker".to_string());
    let config = match CheckerConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            exit(1);
        }
    };

    let corpus = match RegulationCorpus::load_from_dir(&config.regulations_dir) {
        Ok(corpus) => corpus,
        Err(e) => {
            log::error!("Failed to load regulations: {e}");
            exit(1);
        }
    };
    if corpus.is_empty() {
        log::warn!(
            "No regulations loaded from {}; every requirement will be unmatched",
            config.regulations_dir.display()
        );
    }

    let report = match fs::read_to_string(&report_path) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Failed to read report {report_path}: {e}");
            exit(1);
        }
    };
    let requirements: Vec<String> = report
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    let document_id = Path::new(&report_path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("report")
        .to_string();

    let embedder = match FastembedEmbedder::try_new() {
        Ok(embedder) => embedder,
        Err(e) => {
            log::error!("{e}");
            exit(1);
        }
    };
    let repo = match FsRepository::new(&config.results_dir) {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("Failed to prepare results directory: {e}");
            exit(1);
        }
    };

    let mut checker =
        RequirementChecker::new(&corpus, embedder, repo, config.similarity_threshold);
    match checker.check(&document_id, &requirements, force_recompute) {
        Ok(result) => {
            if as_json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        log::error!("Failed to serialize result for {document_id}: {e}");
                        exit(1);
                    }
                }
            } else {
                println!("{}", result.render());
            }
        }
        Err(e) => {
            log::error!("Check failed for document {document_id}: {e}");
            exit(1);
        }
    }
}
