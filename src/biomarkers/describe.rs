use std::sync::LazyLock;

use regex::Regex;

pub const GENERIC_DESCRIPTION: &str = "Laboratory measurement tracked across your reports.";

/// A name pattern with the patient-facing description it selects.
struct DescriptionRule {
    pattern: Regex,
    description: &'static str,
}

fn rule(pattern: &str, description: &'static str) -> DescriptionRule {
    DescriptionRule {
        pattern: Regex::new(pattern).expect("description pattern must compile"),
        description,
    }
}

/// Evaluated in order, first match wins. Narrow names sit above the broad
/// names they contain (a1c above hemoglobin, hdl/ldl above cholesterol).
static DESCRIPTION_RULES: LazyLock<Vec<DescriptionRule>> = LazyLock::new(|| {
    vec![
        rule(
            r"a1c|glycated|glycosylated",
            "Average blood sugar over the past two to three months.",
        ),
        rule(
            r"hemoglobin|haemoglobin|\bhgb\b|\bhb\b",
            "Oxygen-carrying protein in red blood cells.",
        ),
        rule(r"hematocrit|\bhct\b", "Share of blood volume made up of red blood cells."),
        rule(r"glucose|blood sugar", "Amount of sugar in the blood at the time of the test."),
        rule(r"\bhdl\b", "\"Good\" cholesterol that carries cholesterol away from arteries."),
        rule(r"\bldl\b", "\"Bad\" cholesterol that can build up in artery walls."),
        rule(r"triglyceride", "Type of fat in the blood used for energy."),
        rule(r"cholesterol", "Waxy fat carried in the blood, linked to heart health."),
        rule(r"creatinine", "Waste product filtered by the kidneys."),
        rule(r"\begfr\b|filtration rate", "Estimate of how well the kidneys filter blood."),
        rule(r"\burea\b|\bbun\b", "Nitrogen waste cleared by the kidneys."),
        rule(r"\btsh\b|thyroid", "Marker of thyroid gland activity."),
        rule(r"vitamin\s*d|25-oh", "Vitamin needed for bone and immune health."),
        rule(r"vitamin\s*b12|cobalamin", "Vitamin needed for nerves and red blood cells."),
        rule(r"ferritin", "Protein that stores iron in the body."),
        rule(r"\biron\b", "Mineral needed to make hemoglobin."),
        rule(r"platelet", "Cells that help the blood clot."),
        rule(r"white blood|\bwbc\b|leukocyte", "Cells that fight infection."),
        rule(r"red blood|\brbc\b|erythrocyte", "Cells that carry oxygen through the body."),
        rule(r"\balt\b|\bast\b|\bsgpt\b|\bsgot\b", "Liver enzyme; raised levels can signal liver stress."),
        rule(r"sodium|potassium|chloride", "Electrolyte that balances fluids and nerve signals."),
        rule(r"\bcrp\b|c-reactive", "Marker of inflammation in the body."),
    ]
});

/// Description for a test name. Matching is done on the lower-cased name.
pub fn describe(test_name: &str) -> &'static str {
    let name = test_name.trim().to_lowercase();
    DESCRIPTION_RULES
        .iter()
        .find(|r| r.pattern.is_match(&name))
        .map(|r| r.description)
        .unwrap_or(GENERIC_DESCRIPTION)
}
