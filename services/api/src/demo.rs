use crate::infra::InMemoryDocumentRepository;
use chrono::{Local, NaiveDate};
use clap::Args;
use onboarding_engine::config::AppConfig;
use onboarding_engine::error::AppError;
use onboarding_engine::workflows::onboarding::{
    sample_candidate, Alert, CandidateProfile, ComplianceEngine, OnboardingService,
    ProjectedDates, RawJobDescription, StaticCandidateExtractor, TemplateContractDrafter,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const CONTRACT_PREVIEW_LINES: usize = 12;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Candidate profile JSON file (same shape as the evaluate endpoint body)
    #[arg(long)]
    pub(crate) candidate: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the processing date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { candidate, today } = args;

    let config = AppConfig::load()?;
    let engine = ComplianceEngine::new(config.compliance.load_rules()?);
    let profile = read_candidate(&candidate)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let jurisdiction = engine.jurisdiction_for(Some(profile.location_country.as_str()));
    let report = engine.evaluate_on(&profile, today);

    println!(
        "Compliance check for {} ({}) as of {}",
        profile.name, profile.role, today
    );
    println!("- Work location: {}", jurisdiction.display_name());
    render_alerts(&report.alerts);
    render_projected_dates(&report.projected_dates);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let config = AppConfig::load()?;
    let rules = config.compliance.load_rules()?;

    println!("Onboarding compliance demo");
    let documents = Arc::new(InMemoryDocumentRepository::default());
    let service = OnboardingService::new(
        Arc::new(StaticCandidateExtractor::default()),
        Arc::new(TemplateContractDrafter),
        documents.clone(),
        rules,
    );

    let notes = demo_hiring_notes(&sample_candidate());
    println!("- Hiring notes: {}", notes);

    let package = service.generate(RawJobDescription { raw_text: notes }, today)?;
    let candidate = &package.candidate;
    println!(
        "- Candidate: {} | {} | {} {:.2}",
        candidate.name, candidate.role, candidate.currency, candidate.salary
    );
    println!("- Legal framework: {}", package.jurisdiction_detected);
    let rules = service.engine().rules();
    let location = rules.normalize(Some(candidate.location_country.as_str()));
    println!(
        "- Visa lead time for {}: {} days",
        location.display_name(),
        rules.visa_lead_days(&location)
    );
    render_alerts(&package.alerts);
    render_projected_dates(&package.projected_dates);

    println!("\nGenerated documents: {}", documents.file_names().join(", "));
    for file_name in &package.generated_files {
        match service.document(file_name) {
            Ok(draft) => {
                println!("\n{} (preview)", draft.file_name);
                for line in draft.body.lines().take(CONTRACT_PREVIEW_LINES) {
                    println!("  {}", line);
                }
            }
            Err(err) => println!("  {} unavailable: {}", file_name, err),
        }
    }

    Ok(())
}

fn read_candidate(path: &Path) -> Result<CandidateProfile, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn demo_hiring_notes(candidate: &CandidateProfile) -> String {
    format!(
        "Hire {} as {} in {} at {} {} per year, starting {}.",
        candidate.name,
        candidate.role,
        candidate.location_country,
        candidate.currency,
        candidate.salary,
        candidate.start_date.as_deref().unwrap_or("TBD")
    )
}

fn render_alerts(alerts: &[Alert]) {
    if alerts.is_empty() {
        println!("\nCompliance alerts: none");
        return;
    }

    println!("\nCompliance alerts ({})", alerts.len());
    for alert in alerts {
        println!(
            "  - [{} | {}] {}",
            alert.severity.label(),
            alert.kind.label(),
            alert.message
        );
    }
}

fn render_projected_dates(dates: &ProjectedDates) {
    match dates.probation_end {
        Some(probation_end) => println!("Projected probation end: {}", probation_end),
        None => println!("Projected probation end: unavailable (no valid start date)"),
    }
}
