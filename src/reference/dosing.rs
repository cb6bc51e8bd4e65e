use crate::models::AgeGroup;

/// One dosing table row: fixed guidance for a `(drug, age group)` key.
#[derive(Debug, Clone, Copy)]
pub struct DosageProfile {
    pub standard_dosage: &'static str,
    pub max_daily: &'static str,
    pub contraindications: &'static [&'static str],
}

const DOSING: &[(&str, AgeGroup, DosageProfile)] = &[
    // aspirin
    (
        "aspirin",
        AgeGroup::Adult,
        DosageProfile {
            standard_dosage: "325-650mg every 4-6 hours",
            max_daily: "4000mg",
            contraindications: &["Active bleeding", "Peptic ulcer disease", "Aspirin allergy"],
        },
    ),
    (
        "aspirin",
        AgeGroup::Elderly,
        DosageProfile {
            standard_dosage: "325mg every 4-6 hours",
            max_daily: "2000mg",
            contraindications: &[
                "Active bleeding",
                "Peptic ulcer disease",
                "Aspirin allergy",
                "Renal impairment",
            ],
        },
    ),
    (
        "aspirin",
        AgeGroup::Pediatric,
        DosageProfile {
            standard_dosage: "10-15mg/kg every 4-6 hours",
            max_daily: "60mg/kg",
            contraindications: &["Reye syndrome risk", "Viral infections"],
        },
    ),
    // ibuprofen
    (
        "ibuprofen",
        AgeGroup::Adult,
        DosageProfile {
            standard_dosage: "200-400mg every 4-6 hours",
            max_daily: "3200mg",
            contraindications: &["Active peptic ulcer", "Renal impairment", "Heart failure"],
        },
    ),
    (
        "ibuprofen",
        AgeGroup::Elderly,
        DosageProfile {
            standard_dosage: "200mg every 6-8 hours",
            max_daily: "1600mg",
            contraindications: &[
                "Active peptic ulcer",
                "Renal impairment",
                "Heart failure",
                "Hypertension",
            ],
        },
    ),
    (
        "ibuprofen",
        AgeGroup::Pediatric,
        DosageProfile {
            standard_dosage: "5-10mg/kg every 6-8 hours",
            max_daily: "40mg/kg",
            contraindications: &["Dehydration", "Renal impairment"],
        },
    ),
    // acetaminophen
    (
        "acetaminophen",
        AgeGroup::Adult,
        DosageProfile {
            standard_dosage: "500-1000mg every 4-6 hours",
            max_daily: "4000mg",
            contraindications: &["Liver disease", "Alcohol abuse", "G6PD deficiency"],
        },
    ),
    (
        "acetaminophen",
        AgeGroup::Elderly,
        DosageProfile {
            standard_dosage: "500mg every 6 hours",
            max_daily: "3000mg",
            contraindications: &["Liver disease", "Alcohol abuse", "Renal impairment"],
        },
    ),
    (
        "acetaminophen",
        AgeGroup::Pediatric,
        DosageProfile {
            standard_dosage: "10-15mg/kg every 4-6 hours",
            max_daily: "75mg/kg",
            contraindications: &["Liver disease", "Dehydration"],
        },
    ),
    // amoxicillin
    (
        "amoxicillin",
        AgeGroup::Adult,
        DosageProfile {
            standard_dosage: "500mg three times daily",
            max_daily: "3000mg",
            contraindications: &["Penicillin allergy", "Mononucleosis"],
        },
    ),
    (
        "amoxicillin",
        AgeGroup::Elderly,
        DosageProfile {
            standard_dosage: "500mg twice daily",
            max_daily: "2000mg",
            contraindications: &["Penicillin allergy", "Renal impairment"],
        },
    ),
    (
        "amoxicillin",
        AgeGroup::Pediatric,
        DosageProfile {
            standard_dosage: "20-40mg/kg divided in 3 doses",
            max_daily: "2000mg",
            contraindications: &["Penicillin allergy", "Mononucleosis"],
        },
    ),
    // metformin
    (
        "metformin",
        AgeGroup::Adult,
        DosageProfile {
            standard_dosage: "500mg twice daily",
            max_daily: "2550mg",
            contraindications: &[
                "Severe renal impairment",
                "Metabolic acidosis",
                "Heart failure",
            ],
        },
    ),
    (
        "metformin",
        AgeGroup::Elderly,
        DosageProfile {
            standard_dosage: "500mg once daily",
            max_daily: "2000mg",
            contraindications: &[
                "Severe renal impairment",
                "Metabolic acidosis",
                "Heart failure",
            ],
        },
    ),
    (
        "metformin",
        AgeGroup::Pediatric,
        DosageProfile {
            standard_dosage: "500mg twice daily",
            max_daily: "2000mg",
            contraindications: &[
                "Severe renal impairment",
                "Metabolic acidosis",
                "Heart failure",
            ],
        },
    ),
];

/// Drug-specific advice strings appended to every recommendation for that
/// drug, after the age-tier and weight notes.
const DRUG_ADVICE: &[(&str, &[&str])] = &[
    (
        "aspirin",
        &["Monitor for bleeding", "Avoid in children with viral infections"],
    ),
    ("ibuprofen", &["Monitor renal function", "Take with food"]),
    ("acetaminophen", &["Monitor liver function", "Avoid alcohol"]),
    ("amoxicillin", &["Take on empty stomach", "Complete full course"]),
    ("metformin", &["Monitor blood glucose", "Take with meals"]),
];

/// Lookup over the bundled dosing rows.
pub struct DosingTable;

impl DosingTable {
    /// Dosing row for a drug and age group, if the drug is covered.
    pub fn profile(&self, drug: &str, age_group: AgeGroup) -> Option<&'static DosageProfile> {
        let drug = drug.to_lowercase();
        DOSING
            .iter()
            .find(|(d, g, _)| *d == drug && *g == age_group)
            .map(|(_, _, profile)| profile)
    }

    /// Fixed per-drug advice strings; empty for uncovered drugs.
    pub fn drug_advice(&self, drug: &str) -> &'static [&'static str] {
        let drug = drug.to_lowercase();
        DRUG_ADVICE
            .iter()
            .find(|(d, _)| *d == drug)
            .map(|(_, advice)| *advice)
            .unwrap_or(&[])
    }

    pub fn covers(&self, drug: &str) -> bool {
        let drug = drug.to_lowercase();
        DOSING.iter().any(|(d, _, _)| *d == drug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_covered_drug_has_all_three_age_groups() {
        let table = DosingTable;
        for drug in ["aspirin", "ibuprofen", "acetaminophen", "amoxicillin", "metformin"] {
            for group in [AgeGroup::Pediatric, AgeGroup::Adult, AgeGroup::Elderly] {
                assert!(
                    table.profile(drug, group).is_some(),
                    "missing {drug}/{}",
                    group.as_str(),
                );
            }
        }
    }

    #[test]
    fn elderly_amoxicillin_row() {
        let profile = DosingTable.profile("amoxicillin", AgeGroup::Elderly).unwrap();
        assert_eq!(profile.standard_dosage, "500mg twice daily");
        assert_eq!(profile.max_daily, "2000mg");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(DosingTable.profile("Aspirin", AgeGroup::Adult).is_some());
    }

    #[test]
    fn unknown_drug_has_no_profile() {
        let table = DosingTable;
        assert!(table.profile("zzzdrug", AgeGroup::Adult).is_none());
        assert!(!table.covers("zzzdrug"));
        assert!(table.drug_advice("zzzdrug").is_empty());
    }

    #[test]
    fn drug_advice_for_ibuprofen() {
        assert_eq!(
            DosingTable.drug_advice("ibuprofen"),
            &["Monitor renal function", "Take with food"],
        );
    }
}
