//! Parameter definitions (`p<N>_<attribute>` keys).

use std::collections::{BTreeMap, BTreeSet};

use super::bracket_list;
use crate::lint::{lazy_regex, Check, CheckId, Issue, Target};
use crate::manifest::document::{Entry, ManifestDocument};
use crate::manifest::ManifestContext;

lazy_regex!(PARAM_KEY, r"^p(\d+)_(.+)$");

const RECOMMENDED_ATTRIBUTES: [&str; 3] = ["description", "name", "optional"];
const VALID_MODES: [&str; 3] = ["IN", "OUT", ""];

/// Parameter attributes grouped by parameter number.
///
/// A repeated attribute keeps its last definition.
fn collect_parameters(doc: &ManifestDocument) -> BTreeMap<u32, BTreeMap<String, &Entry>> {
    let mut params: BTreeMap<u32, BTreeMap<String, &Entry>> = BTreeMap::new();
    for entry in doc.entries() {
        let Some(caps) = PARAM_KEY.captures(&entry.key) else {
            continue;
        };
        let Ok(number) = caps[1].parse::<u32>() else {
            continue;
        };
        params
            .entry(number)
            .or_default()
            .insert(caps[2].to_string(), entry);
    }
    params
}

/// Validates recommended attributes and `MODE` values per parameter.
pub struct ParameterAttributesCheck;

impl Check<ManifestContext> for ParameterAttributesCheck {
    fn id(&self) -> CheckId {
        CheckId::new("parameter-attributes")
    }

    fn name(&self) -> &str {
        "Parameter Attributes"
    }

    fn description(&self) -> &str {
        "Validates each parameter has name, description and optional, and a sensible MODE"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("parameter attributes") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        let mut issues = Vec::new();
        for (number, attrs) in collect_parameters(doc) {
            let missing: Vec<String> = RECOMMENDED_ATTRIBUTES
                .iter()
                .filter(|a| !attrs.contains_key(**a))
                .map(|a| format!("'{}'", a))
                .collect();
            if !missing.is_empty() {
                issues.push(Issue::warning(format!(
                    "Parameter p{} is missing recommended attribute(s): {}",
                    number,
                    bracket_list(missing)
                )));
            }

            let Some(mode) = attrs.get("MODE") else {
                continue;
            };
            if !VALID_MODES.contains(&mode.value.as_str()) {
                issues.push(
                    Issue::warning(format!(
                        "Parameter p{} has unusual MODE value '{}'. Common values are: IN, OUT, or empty",
                        number, mode.value
                    ))
                    .at_line(mode.line_no, &mode.line),
                );
            }

            let is_file = attrs
                .get("type")
                .is_some_and(|t| t.value == "java.io.File");
            if is_file && mode.value != "IN" && mode.value != "OUT" {
                issues.push(
                    Issue::warning(format!(
                        "Parameter p{} is a File type but MODE is '{}'. Expected 'IN' or 'OUT'",
                        number, mode.value
                    ))
                    .at_line(mode.line_no, &mode.line),
                );
            }
        }
        Ok(issues)
    }
}

/// Validates parameters are numbered p1, p2, ... without gaps.
pub struct ParameterNumberingCheck;

impl Check<ManifestContext> for ParameterNumberingCheck {
    fn id(&self) -> CheckId {
        CheckId::new("parameter-numbering")
    }

    fn name(&self) -> &str {
        "Parameter Numbering"
    }

    fn description(&self) -> &str {
        "Validates parameters are numbered contiguously from p1"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("parameter numbering") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        let numbers: BTreeSet<u32> = collect_parameters(doc).into_keys().collect();
        let (Some(&min), Some(&max)) = (numbers.first(), numbers.last()) else {
            return Ok(vec![]);
        };

        let mut issues = Vec::new();
        let missing: Vec<String> = (1..=max)
            .filter(|n| !numbers.contains(n))
            .map(|n| n.to_string())
            .collect();
        if !missing.is_empty() {
            issues.push(Issue::error(format!(
                "Parameters are not numbered sequentially. Missing parameter number(s): {}",
                bracket_list(missing)
            )));
        }
        if min != 1 {
            issues.push(Issue::error(format!(
                "Parameters should start from p1, but first parameter found is p{}",
                min
            )));
        }
        Ok(issues)
    }
}
