use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::compliance::Jurisdiction;
use super::domain::CandidateProfile;

/// Contract family chosen for the work location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalFramework {
    DifcEmploymentLaw,
    EmploymentRightsAct,
    GermanCivilCode,
    InternationalContractor,
}

impl LegalFramework {
    pub fn for_jurisdiction(jurisdiction: &Jurisdiction) -> Self {
        match jurisdiction {
            Jurisdiction::UnitedArabEmirates => Self::DifcEmploymentLaw,
            Jurisdiction::UnitedKingdom => Self::EmploymentRightsAct,
            Jurisdiction::Germany => Self::GermanCivilCode,
            Jurisdiction::Unsupported(_) | Jurisdiction::Unknown => Self::InternationalContractor,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LegalFramework::DifcEmploymentLaw => "DIFC Employment Law (UAE)",
            LegalFramework::EmploymentRightsAct => "Employment Rights Act 1996 (UK)",
            LegalFramework::GermanCivilCode => "German Civil Code (BGB)",
            LegalFramework::InternationalContractor => "General International Contractor Agreement",
        }
    }

    const fn template(self) -> &'static str {
        match self {
            LegalFramework::DifcEmploymentLaw => UAE_TEMPLATE,
            LegalFramework::EmploymentRightsAct => UK_TEMPLATE,
            LegalFramework::GermanCivilCode => GERMAN_TEMPLATE,
            LegalFramework::InternationalContractor => CONTRACTOR_TEMPLATE,
        }
    }
}

/// Inputs for a single contract draft.
#[derive(Debug, Clone)]
pub struct DraftRequest<'a> {
    pub file_name: String,
    pub candidate: &'a CandidateProfile,
    pub framework: LegalFramework,
    pub issued_on: NaiveDate,
}

/// Filled contract text ready for a human reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDraft {
    pub file_name: String,
    pub framework: LegalFramework,
    pub body: String,
}

/// Document-generation seam. Rendering to PDF or similar happens behind it.
pub trait ContractDrafter: Send + Sync {
    fn draft(&self, request: DraftRequest<'_>) -> Result<ContractDraft, ContractError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("contract rendering failed: {0}")]
    Rendering(String),
}

/// Fills the built-in plain-text template for each framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateContractDrafter;

impl ContractDrafter for TemplateContractDrafter {
    fn draft(&self, request: DraftRequest<'_>) -> Result<ContractDraft, ContractError> {
        let DraftRequest {
            file_name,
            candidate,
            framework,
            issued_on,
        } = request;

        let mut body = format!(
            "{}\nGenerated via the onboarding engine | {}\n\n",
            COMPANY_HEADER,
            framework.label()
        );
        body.push_str(&fill(framework.template(), candidate, issued_on));

        if candidate.equity_grant {
            body.push_str("\n\nADDENDUM: EQUITY GRANT\n");
            body.push_str(&fill(EQUITY_TEMPLATE, candidate, issued_on));
        }

        Ok(ContractDraft {
            file_name,
            framework,
            body,
        })
    }
}

/// `Contract_<Name>_<YYYYMMDD>_<sequence>.txt`, restricted to path-safe characters.
pub fn contract_file_name(candidate_name: &str, issued_on: NaiveDate, sequence: u64) -> String {
    let stem = candidate_name
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect::<String>()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    let stem = if stem.is_empty() { "Candidate" } else { stem.as_str() };

    format!(
        "Contract_{}_{}_{:06}.txt",
        stem,
        issued_on.format("%Y%m%d"),
        sequence
    )
}

fn fill(template: &str, candidate: &CandidateProfile, issued_on: NaiveDate) -> String {
    let citizenship = candidate
        .citizenship
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or("Not Specified");
    let start_date = candidate
        .start_date
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or("TBD");

    template
        .replace("{date}", &issued_on.format("%B %d, %Y").to_string())
        .replace("{name}", &candidate.name)
        .replace("{role}", &candidate.role)
        .replace("{job_family}", candidate.job_family.label())
        .replace("{citizenship}", citizenship)
        .replace("{start_date}", start_date)
        .replace("{currency}", &candidate.currency)
        .replace("{salary}", &format!("{:.2}", candidate.salary))
}

const COMPANY_HEADER: &str = "DERIV";

const UAE_TEMPLATE: &str = "\
EMPLOYMENT CONTRACT (DIFC)
Date: {date}

This contract is made between the Company and {name} ({citizenship}) under the DIFC Employment Law No. 2 of 2019.

1. Position: {name} is employed as {role} ({job_family}).
2. Commencement: Employment starts on {start_date}, subject to a valid UAE work permit and residence visa.
3. Remuneration: {currency} {salary} per annum, paid monthly through the Wage Protection System.
4. Probation: Six months from commencement.
5. Annual Leave: Twenty working days per year after probation.
6. Governing Law: DIFC Employment Law and the jurisdiction of the DIFC Courts.";

const UK_TEMPLATE: &str = "\
STATEMENT OF MAIN TERMS OF EMPLOYMENT
Date: {date}

Issued under section 1 of the Employment Rights Act 1996 to {name} ({citizenship}).

1. Job Title: {role} ({job_family}).
2. Start Date: {start_date}. Continuous employment begins on this date.
3. Salary: {currency} {salary} per annum, paid monthly in arrears.
4. Probation: Six months, during which one week's notice applies.
5. Holiday: 28 days per year inclusive of bank holidays.
6. Right to Work: Employment is conditional on proof of the right to work in the United Kingdom.";

const GERMAN_TEMPLATE: &str = "\
ARBEITSVERTRAG / EMPLOYMENT AGREEMENT
Date: {date}

Agreement under sections 611a et seq. of the German Civil Code (BGB) with {name} ({citizenship}).

1. Position: {role} ({job_family}).
2. Commencement: {start_date}.
3. Remuneration: {currency} {salary} gross per annum, paid in twelve monthly instalments.
4. Probation: Six months with two weeks' notice (section 622(3) BGB).
5. Vacation: Thirty working days per calendar year.
6. Residence: Employment requires a residence title permitting employment where applicable.";

const CONTRACTOR_TEMPLATE: &str = "\
INTERNATIONAL INDEPENDENT CONTRACTOR AGREEMENT
Date: {date}

Agreement between the Company and {name} ({citizenship}) as an independent contractor.

1. Services: {role} ({job_family}).
2. Effective Date: {start_date}.
3. Fees: {currency} {salary} per annum, invoiced monthly.
4. Status: The contractor is responsible for local taxes, permits and social contributions.
5. Termination: Either party may terminate with thirty days' written notice.";

const EQUITY_TEMPLATE: &str = "\
{name} is granted stock options under the Company Equity Incentive Plan, subject to board approval.
Vesting: four years with a one-year cliff, measured from {start_date}.";
