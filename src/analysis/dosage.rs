use crate::models::{AgeGroup, DosageRecommendation, RenalFunction};
use crate::reference::DosingTable;

/// Placeholder used wherever the dosing table has no answer.
const CONSULT_PROVIDER: &str = "Consult healthcare provider";

/// Contraindication added for pediatric aspirin exposure.
const REYE_WARNING: &str = "Reye syndrome risk";

/// Weight above which a dosing-adjustment note is attached (kg).
const WEIGHT_NOTE_THRESHOLD: f64 = 100.0;

const ELDERLY_ADVICE: [&str; 3] = [
    "Increased risk of adverse effects",
    "May require lower dosages",
    "Monitor renal and hepatic function",
];

const PEDIATRIC_ADVICE: [&str; 2] = [
    "Pediatric dosing based on weight/age",
    "Monitor for age-specific adverse effects",
];

const WEIGHT_ADVICE: &str = "May require weight-based dosing adjustments";

/// Build a dosage recommendation for one drug and one patient.
///
/// Unknown drugs produce the consult-provider placeholder rather than an
/// error. The renal factor is attached as advisory metadata; the dosage
/// strings always stay exactly as the table states them.
pub fn recommend(
    dosing: &DosingTable,
    drug: &str,
    age: u32,
    weight: Option<f64>,
    renal_function: RenalFunction,
) -> DosageRecommendation {
    let drug_key = drug.to_lowercase();
    let age_group = AgeGroup::for_age(age);

    let Some(profile) = dosing.profile(&drug_key, age_group) else {
        return DosageRecommendation {
            drug: drug_key,
            recommended_dosage: CONSULT_PROVIDER.to_string(),
            age_group: AgeGroup::Unknown,
            patient_age: age,
            renal_adjustment: None,
            contraindications: Vec::new(),
            max_daily: CONSULT_PROVIDER.to_string(),
            special_considerations: Vec::new(),
            alternatives: Vec::new(),
        };
    };

    // Work on a copy of the table row so repeated calls never accumulate
    // age-specific additions in shared data.
    let mut contraindications: Vec<String> = profile
        .contraindications
        .iter()
        .map(|c| c.to_string())
        .collect();

    if age < 18 && drug_key == "aspirin" && !contraindications.iter().any(|c| c == REYE_WARNING) {
        contraindications.push(REYE_WARNING.to_string());
    }

    DosageRecommendation {
        recommended_dosage: profile.standard_dosage.to_string(),
        age_group,
        patient_age: age,
        renal_adjustment: Some(renal_function.adjustment_factor()),
        contraindications,
        max_daily: profile.max_daily.to_string(),
        special_considerations: special_considerations(dosing, &drug_key, age, weight),
        alternatives: Vec::new(),
        drug: drug_key,
    }
}

/// Age-tier advice, then the weight note, then drug-specific advice.
fn special_considerations(
    dosing: &DosingTable,
    drug_key: &str,
    age: u32,
    weight: Option<f64>,
) -> Vec<String> {
    let mut considerations: Vec<String> = Vec::new();

    if age > 65 {
        considerations.extend(ELDERLY_ADVICE.iter().map(|s| s.to_string()));
    }
    if age < 18 {
        considerations.extend(PEDIATRIC_ADVICE.iter().map(|s| s.to_string()));
    }
    if weight.is_some_and(|w| w > WEIGHT_NOTE_THRESHOLD) {
        considerations.push(WEIGHT_ADVICE.to_string());
    }
    considerations.extend(dosing.drug_advice(drug_key).iter().map(|s| s.to_string()));

    considerations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elderly_severe_renal_amoxicillin() {
        let rec = recommend(&DosingTable, "amoxicillin", 70, None, RenalFunction::Severe);
        assert_eq!(rec.age_group, AgeGroup::Elderly);
        assert_eq!(rec.recommended_dosage, "500mg twice daily");
        assert_eq!(rec.max_daily, "2000mg");
        assert_eq!(rec.renal_adjustment, Some(0.25));
    }

    #[test]
    fn renal_factor_never_rewrites_dosage_text() {
        let normal = recommend(&DosingTable, "ibuprofen", 30, None, RenalFunction::Normal);
        let dialysis = recommend(&DosingTable, "ibuprofen", 30, None, RenalFunction::Dialysis);
        assert_eq!(normal.recommended_dosage, dialysis.recommended_dosage);
        assert_eq!(normal.max_daily, dialysis.max_daily);
        assert_eq!(dialysis.renal_adjustment, Some(0.1));
    }

    #[test]
    fn unknown_drug_yields_consult_placeholder() {
        let rec = recommend(&DosingTable, "zzzdrug", 30, None, RenalFunction::Normal);
        assert_eq!(rec.recommended_dosage, "Consult healthcare provider");
        assert_eq!(rec.max_daily, "Consult healthcare provider");
        assert_eq!(rec.age_group, AgeGroup::Unknown);
        assert!(rec.contraindications.is_empty());
        assert!(rec.special_considerations.is_empty());
        assert_eq!(rec.renal_adjustment, None);
    }

    #[test]
    fn age_boundaries_land_in_adult() {
        for age in [18, 65] {
            let rec = recommend(&DosingTable, "aspirin", age, None, RenalFunction::Normal);
            assert_eq!(rec.age_group, AgeGroup::Adult);
            assert_eq!(rec.recommended_dosage, "325-650mg every 4-6 hours");
        }
        assert_eq!(
            recommend(&DosingTable, "aspirin", 17, None, RenalFunction::Normal).age_group,
            AgeGroup::Pediatric,
        );
        assert_eq!(
            recommend(&DosingTable, "aspirin", 66, None, RenalFunction::Normal).age_group,
            AgeGroup::Elderly,
        );
    }

    #[test]
    fn pediatric_aspirin_lists_reye_risk_exactly_once() {
        let count = |rec: &DosageRecommendation| {
            rec.contraindications
                .iter()
                .filter(|c| c.as_str() == REYE_WARNING)
                .count()
        };

        let first = recommend(&DosingTable, "aspirin", 10, None, RenalFunction::Normal);
        assert_eq!(count(&first), 1);

        // Repeated calls must not accumulate duplicates in shared data.
        let second = recommend(&DosingTable, "aspirin", 10, None, RenalFunction::Normal);
        assert_eq!(count(&second), 1);
        assert_eq!(first.contraindications, second.contraindications);
    }

    #[test]
    fn adult_aspirin_has_no_reye_warning() {
        let rec = recommend(&DosingTable, "aspirin", 30, None, RenalFunction::Normal);
        assert!(!rec.contraindications.iter().any(|c| c == REYE_WARNING));
    }

    #[test]
    fn considerations_order_is_age_then_weight_then_drug() {
        let rec = recommend(&DosingTable, "ibuprofen", 80, Some(112.0), RenalFunction::Normal);
        let expected: Vec<String> = ELDERLY_ADVICE
            .iter()
            .map(|s| s.to_string())
            .chain([WEIGHT_ADVICE.to_string()])
            .chain(["Monitor renal function".to_string(), "Take with food".to_string()])
            .collect();
        assert_eq!(rec.special_considerations, expected);
    }

    #[test]
    fn weight_note_requires_exceeding_threshold() {
        let at = recommend(&DosingTable, "metformin", 40, Some(100.0), RenalFunction::Normal);
        assert!(!at.special_considerations.iter().any(|s| s == WEIGHT_ADVICE));

        let above = recommend(&DosingTable, "metformin", 40, Some(100.5), RenalFunction::Normal);
        assert!(above.special_considerations.iter().any(|s| s == WEIGHT_ADVICE));

        let unspecified = recommend(&DosingTable, "metformin", 40, None, RenalFunction::Normal);
        assert!(!unspecified.special_considerations.iter().any(|s| s == WEIGHT_ADVICE));
    }

    #[test]
    fn pediatric_advice_applied_for_children() {
        let rec = recommend(&DosingTable, "acetaminophen", 8, None, RenalFunction::Normal);
        assert_eq!(rec.special_considerations[0], PEDIATRIC_ADVICE[0]);
        assert_eq!(rec.special_considerations[1], PEDIATRIC_ADVICE[1]);
    }
}
