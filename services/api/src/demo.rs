use crate::infra::parse_percentage;
use clap::Args;
use healthai::catalog::medicine_suggestions;
use healthai::error::AppError;
use healthai::risk::{
    DiseaseRisk, DietQuality, ExerciseLevel, Gender, OutbreakConditions, PersonalProfile,
    PersonalRiskReport, Sanitation, Season, WaterSource,
};
use healthai::triage::{TriageEngine, TriageRequest, TriageResult};
use healthai::wellness::{calculate_bmi, BmiReport};

#[derive(Args, Debug)]
pub(crate) struct TriageArgs {
    /// Reported symptom; repeat the flag for several symptoms
    #[arg(long = "symptom", required = true)]
    pub(crate) symptoms: Vec<String>,
    /// Patient age in years
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub(crate) age: i32,
    /// Print the JSON payload the API would return
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct OutbreakArgs {
    /// Region name, echoed in the report header
    #[arg(long, default_value = "")]
    pub(crate) region: String,
    /// summer, winter, monsoon, or post-monsoon
    #[arg(long, default_value = "summer")]
    pub(crate) season: String,
    /// good, moderate, or poor
    #[arg(long, default_value = "moderate")]
    pub(crate) sanitation: String,
    /// tap, well, river, pond, or unfiltered
    #[arg(long, default_value = "tap")]
    pub(crate) water_source: String,
    /// Share of the population vaccinated, in percent
    #[arg(long, default_value = "70", value_parser = parse_percentage)]
    pub(crate) vaccination_rate: f64,
}

#[derive(Args, Debug)]
pub(crate) struct RiskArgs {
    #[arg(long, default_value_t = 30)]
    pub(crate) age: i32,
    /// male, female, or other
    #[arg(long, default_value = "male")]
    pub(crate) gender: String,
    #[arg(long)]
    pub(crate) smoking: bool,
    #[arg(long)]
    pub(crate) alcohol: bool,
    /// none, moderate, or regular
    #[arg(long, default_value = "moderate")]
    pub(crate) exercise: String,
    /// poor, moderate, or good
    #[arg(long, default_value = "moderate")]
    pub(crate) diet: String,
    #[arg(long)]
    pub(crate) bp_history: bool,
    #[arg(long)]
    pub(crate) diabetes_history: bool,
    #[arg(long)]
    pub(crate) family_history: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the BMI portion of the demo
    #[arg(long)]
    pub(crate) skip_bmi: bool,
}

impl OutbreakArgs {
    fn conditions(&self) -> OutbreakConditions {
        OutbreakConditions {
            region: self.region.clone(),
            season: Season::from(self.season.as_str()),
            sanitation: Sanitation::from(self.sanitation.as_str()),
            water_source: WaterSource::from(self.water_source.as_str()),
            vaccination_rate: self.vaccination_rate,
        }
    }
}

impl RiskArgs {
    fn profile(&self) -> PersonalProfile {
        PersonalProfile {
            age: self.age,
            gender: Gender::from(self.gender.as_str()),
            smoking: self.smoking,
            alcohol: self.alcohol,
            exercise: ExerciseLevel::from(self.exercise.as_str()),
            diet: DietQuality::from(self.diet.as_str()),
            bp_history: self.bp_history,
            diabetes_history: self.diabetes_history,
            family_history: self.family_history,
        }
    }
}

pub(crate) fn run_triage(args: TriageArgs) -> Result<(), AppError> {
    let request = TriageRequest::new(args.symptoms, args.age);
    request.validate()?;

    let result = TriageEngine::standard().assess_request(&request);
    if args.json {
        print_json(&result);
    } else {
        render_triage(&request, &result);
    }
    Ok(())
}

pub(crate) fn run_outbreak(args: OutbreakArgs) -> Result<(), AppError> {
    let conditions = args.conditions();
    render_outbreak(&conditions, &conditions.estimate());
    Ok(())
}

pub(crate) fn run_risk(args: RiskArgs) -> Result<(), AppError> {
    let profile = args.profile();
    render_personal_risk(&profile, &profile.estimate());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Community health triage demo");

    let engine = TriageEngine::standard();
    for (symptoms, age) in [
        (vec!["fever", "cough"], 34),
        (vec!["runny nose"], 3),
        (vec!["chest pain", "shortness of breath"], 58),
    ] {
        let request = TriageRequest::new(symptoms, age);
        request.validate()?;
        println!();
        render_triage(&request, &engine.assess_request(&request));
    }

    let monsoon = OutbreakConditions {
        region: "Kadapa".to_string(),
        season: Season::Monsoon,
        sanitation: Sanitation::Poor,
        water_source: WaterSource::Pond,
        vaccination_rate: 40.0,
    };
    println!();
    render_outbreak(&monsoon, &monsoon.estimate());

    let profile = PersonalProfile {
        age: 70,
        smoking: true,
        bp_history: true,
        ..PersonalProfile::default()
    };
    println!();
    render_personal_risk(&profile, &profile.estimate());

    if !args.skip_bmi {
        println!();
        render_bmi(70.0, 175.0, &calculate_bmi(70.0, 175.0)?);
    }

    Ok(())
}

pub(crate) fn render_triage(request: &TriageRequest, result: &TriageResult) {
    println!(
        "Triage for [{}] (age {})",
        request.symptoms.join(", "),
        request.age
    );
    println!("  Urgency: {} ({})", result.urgency.label(), result.urgency_color);
    println!("  Action: {}", result.action);

    if result.conditions.is_empty() {
        println!("  Possible conditions: none matched");
    } else {
        println!("  Possible conditions:");
        for condition in &result.conditions {
            println!(
                "    - {} {}% [{}] {}",
                condition.name,
                condition.likelihood,
                condition.severity.label(),
                condition.description
            );
        }
        if let Some(top) = result.conditions.first() {
            println!("  Suggested for {}:", top.name);
            for medicine in medicine_suggestions(top.name) {
                println!("    - {}", medicine);
            }
        }
    }

    println!("  First aid:");
    for tip in &result.first_aid {
        println!("    - {}", tip);
    }
    println!("  {}", result.disclaimer);
}

pub(crate) fn render_outbreak(conditions: &OutbreakConditions, risks: &[DiseaseRisk]) {
    let region = if conditions.region.is_empty() {
        "unnamed region"
    } else {
        conditions.region.as_str()
    };
    println!(
        "Outbreak outlook for {} ({:?}, {:?} sanitation, {:?} water, {:.0}% vaccinated)",
        region,
        conditions.season,
        conditions.sanitation,
        conditions.water_source,
        conditions.vaccination_rate
    );
    for risk in risks {
        println!("  - {:<8} {:>3} {}", risk.disease, risk.score, risk.level.label());
    }
}

pub(crate) fn render_personal_risk(profile: &PersonalProfile, report: &PersonalRiskReport) {
    println!(
        "Personal risk for age {} ({:?})",
        profile.age, profile.gender
    );
    for risk in &report.risks {
        println!("  - {:<16} {:>3}", risk.disease, risk.score);
    }
    println!("  Overall: {} ({})", report.overall, report.level.label());
    if report.factors.is_empty() {
        println!("  Contributing factors: none");
    } else {
        println!("  Contributing factors:");
        for factor in &report.factors {
            println!("    - {:?}", factor);
        }
    }
}

pub(crate) fn render_bmi(weight: f64, height: f64, report: &BmiReport) {
    println!("BMI for {:.0} kg at {:.0} cm", weight, height);
    println!("  BMI: {:.1} ({})", report.bmi, report.category);
    println!("  {}", report.risk);
    println!("  Ideal weight: {}", report.ideal_weight_range);
    for line in report.advice {
        println!("    - {}", line);
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("JSON payload unavailable: {}", err),
    }
}
