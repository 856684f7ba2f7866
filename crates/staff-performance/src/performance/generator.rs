use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::catalog::get_role_metrics;
use super::domain::{Role, Trend};
use super::professional::{Professional, ProfessionalId, ProfessionalProfile};

const FIRST_NAMES: [&str; 12] = [
    "Amara", "Benjamin", "Chloe", "Daniel", "Elena", "Farid", "Grace", "Hiro", "Isabel", "Jonah",
    "Keira", "Luis",
];

const LAST_NAMES: [&str; 12] = [
    "Adeyemi", "Brennan", "Castillo", "Dubois", "Eriksen", "Fischer", "Gupta", "Hoffman", "Ito",
    "Jensen", "Kowalski", "Lindqvist",
];

/// Produces mock professionals for demos and tests.
///
/// Seeded generators yield the same roster on every run.
pub struct ProfessionalGenerator {
    rng: ChaCha8Rng,
    reference_date: NaiveDate,
    sequence: u64,
}

impl ProfessionalGenerator {
    pub fn seeded(seed: u64, reference_date: NaiveDate) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            reference_date,
            sequence: 0,
        }
    }

    pub fn from_entropy(reference_date: NaiveDate) -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            reference_date,
            sequence: 0,
        }
    }

    pub fn generate(&mut self, role: Role) -> Professional {
        self.sequence += 1;
        let id = ProfessionalId(format!("pro-{:06}", self.sequence));

        let metrics = get_role_metrics(role)
            .iter()
            .map(|definition| definition.scored(self.rng.gen_range(60..=100) as f64))
            .collect();

        let (salary_floor, salary_ceiling) = salary_band(role);
        let salary = (self.rng.gen_range(salary_floor..=salary_ceiling) / 1_000 * 1_000) as f64;

        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Alex");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Morgan");
        let name = format!("{first} {last}");

        let experience_years: u8 = self.rng.gen_range(1..=25);
        let tenure_days = self.rng.gen_range(30..=i64::from(experience_years) * 365);
        let hired_on = self.reference_date - Duration::days(tenure_days);

        let profile = ProfessionalProfile {
            email: format!(
                "{}.{}@carenet.health",
                first.to_ascii_lowercase(),
                last.to_ascii_lowercase()
            ),
            phone: format!(
                "(555) {:03}-{:04}",
                self.rng.gen_range(200..1000),
                self.rng.gen_range(0..10_000)
            ),
            skills: self.pick(role_skills(role), 3),
            certifications: self.pick(role_certifications(role), 2),
            experience_years,
            hired_on: Some(hired_on),
        };

        let trend = match self.rng.gen_range(0..3) {
            0 => Trend::Up,
            1 => Trend::Down,
            _ => Trend::Stable,
        };
        let ai_usage = self.rng.gen_range(0..=100) as f64;

        Professional::new(id, name, role, role.default_department(), metrics, salary)
            .with_profile(profile)
            .with_trend(trend)
            .with_ai_usage(ai_usage)
    }

    /// Generates `size` professionals, cycling through every role in catalog order.
    pub fn generate_roster(&mut self, size: usize) -> Vec<Professional> {
        Role::ordered()
            .into_iter()
            .cycle()
            .take(size)
            .map(|role| self.generate(role))
            .collect()
    }

    fn pick(&mut self, pool: &[&str], amount: usize) -> Vec<String> {
        pool.choose_multiple(&mut self.rng, amount)
            .map(|item| item.to_string())
            .collect()
    }
}

fn salary_band(role: Role) -> (u32, u32) {
    match role {
        Role::GeneralDoctor => (180_000, 260_000),
        Role::Psychiatrist => (200_000, 290_000),
        Role::Radiologist => (300_000, 420_000),
        Role::QualityAssurance => (65_000, 95_000),
        Role::HealthcareIt => (75_000, 130_000),
        Role::LabTechnician => (45_000, 80_000),
    }
}

fn role_skills(role: Role) -> &'static [&'static str] {
    match role {
        Role::GeneralDoctor => &[
            "Chronic Disease Management",
            "Preventive Medicine",
            "Patient Education",
            "Minor Procedures",
            "Telehealth",
        ],
        Role::Psychiatrist => &[
            "Psychopharmacology",
            "Cognitive Behavioral Therapy",
            "Crisis Intervention",
            "Group Therapy",
            "Addiction Medicine",
        ],
        Role::Radiologist => &[
            "MRI Interpretation",
            "CT Imaging",
            "Interventional Radiology",
            "Mammography",
            "Ultrasound",
        ],
        Role::QualityAssurance => &[
            "Root Cause Analysis",
            "Regulatory Compliance",
            "Lean Six Sigma",
            "Risk Management",
            "Clinical Auditing",
        ],
        Role::HealthcareIt => &[
            "EHR Administration",
            "HL7 Integration",
            "Network Security",
            "Cloud Infrastructure",
            "Service Desk Operations",
        ],
        Role::LabTechnician => &[
            "Phlebotomy",
            "Hematology",
            "Microbiology",
            "Quality Control",
            "Specimen Processing",
        ],
    }
}

fn role_certifications(role: Role) -> &'static [&'static str] {
    match role {
        Role::GeneralDoctor => &["ABFM Board Certification", "ACLS", "BLS"],
        Role::Psychiatrist => &["ABPN Board Certification", "Addiction Psychiatry", "BLS"],
        Role::Radiologist => &["ABR Board Certification", "Neuroradiology", "Nuclear Medicine"],
        Role::QualityAssurance => &["CPHQ", "Six Sigma Green Belt", "ISO 9001 Lead Auditor"],
        Role::HealthcareIt => &["CISSP", "Epic Certification", "ITIL Foundation"],
        Role::LabTechnician => &["MLS (ASCP)", "MLT (ASCP)", "Phlebotomy Technician"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::compensation::calculate_compensation;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid reference date")
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let first = ProfessionalGenerator::seeded(7, reference_date()).generate_roster(6);
        let second = ProfessionalGenerator::seeded(7, reference_date()).generate_roster(6);
        assert_eq!(first, second);
    }

    #[test]
    fn roster_cycles_through_roles() {
        let roster = ProfessionalGenerator::seeded(1, reference_date()).generate_roster(8);
        let roles: Vec<Role> = roster.iter().map(|professional| professional.role).collect();
        assert_eq!(roles[..6], Role::ordered());
        assert_eq!(roles[6], Role::GeneralDoctor);
        assert_eq!(roles[7], Role::Psychiatrist);
    }

    #[test]
    fn generated_records_use_the_core_calculations() {
        let mut generator = ProfessionalGenerator::seeded(42, reference_date());
        for role in Role::ordered() {
            let professional = generator.generate(role);
            assert_eq!(professional.metrics().len(), 5);
            assert!(professional
                .metrics()
                .iter()
                .all(|metric| (60.0..=100.0).contains(&metric.score)));
            assert!((60.0..=100.0).contains(&professional.performance()));
            assert_eq!(professional.bonus(), calculate_compensation(&professional));
            assert!(professional.profile.hired_on.expect("hire date set") < reference_date());
        }
    }

    #[test]
    fn identifiers_are_sequential() {
        let roster = ProfessionalGenerator::seeded(3, reference_date()).generate_roster(3);
        let ids: Vec<&str> = roster.iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, vec!["pro-000001", "pro-000002", "pro-000003"]);
    }
}
