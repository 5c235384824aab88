//! Candidate-to-offense formatting.
//!
//! Turns parser candidates into canonical [`Offense`] records: severity
//! comes from the resolved config (falling back through validator and
//! department defaults inside [`EffectiveConfig`]), the offense name is
//! the family default unless the candidate carries a dynamic sub-kind,
//! and the message builder is a pure function per family.

use crate::config::EffectiveConfig;
use crate::parsers::OffenseCandidate;
use crate::registry::ValidatorDescriptor;
use crate::results::offense::Offense;

/// Format all candidates of one validator into offenses.
pub fn format_offenses(
    descriptor: &ValidatorDescriptor,
    candidates: &[OffenseCandidate],
    config: &EffectiveConfig,
) -> Vec<Offense> {
    let severity = config.severity(descriptor.name);

    candidates
        .iter()
        .map(|candidate| Offense {
            severity,
            kind: descriptor.offense.kind,
            name: candidate
                .name
                .clone()
                .unwrap_or_else(|| descriptor.offense.name.to_string()),
            message: (descriptor.offense.message)(candidate),
            location: candidate.location.clone(),
            location_line: candidate.line,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use crate::results::offense::{OffenseKind, Severity};

    fn candidate(line: u32) -> OffenseCandidate {
        OffenseCandidate {
            location: "/path/to/file.rb".into(),
            line,
            element: Some("Foo#bar".into()),
            ..Default::default()
        }
    }

    #[test]
    fn offense_carries_family_defaults() {
        let descriptor = registry::find("Documentation/UndocumentedObjects").unwrap();
        let config = EffectiveConfig::empty();

        let offenses = format_offenses(descriptor, &[candidate(10)], &config);

        assert_eq!(offenses.len(), 1);
        let offense = &offenses[0];
        assert_eq!(offense.severity, Severity::Warning);
        assert_eq!(offense.kind, OffenseKind::Line);
        assert_eq!(offense.name, "UndocumentedObject");
        assert_eq!(offense.message, "Documentation required for `Foo#bar`");
        assert_eq!(offense.location, "/path/to/file.rb");
        assert_eq!(offense.location_line, 10);
    }

    #[test]
    fn configured_severity_wins_over_default() {
        let descriptor = registry::find("Documentation/UndocumentedObjects").unwrap();
        let config = EffectiveConfig::new(
            serde_yaml::from_str("Documentation/UndocumentedObjects:\n  Severity: error\n")
                .unwrap(),
        );

        let offenses = format_offenses(descriptor, &[candidate(1)], &config);
        assert_eq!(offenses[0].severity, Severity::Error);
    }

    #[test]
    fn dynamic_candidate_name_overrides_family_name() {
        let descriptor = registry::find("Tags/ApiTags").unwrap();
        let config = EffectiveConfig::empty();
        let mut dynamic = candidate(2);
        dynamic.name = Some("MissingApiTag".into());

        let offenses = format_offenses(descriptor, &[dynamic], &config);
        assert_eq!(offenses[0].name, "MissingApiTag");
    }

    #[test]
    fn unresolved_line_stays_zero() {
        let descriptor = registry::find("Documentation/UndocumentedObjects").unwrap();
        let config = EffectiveConfig::empty();

        let offenses = format_offenses(descriptor, &[candidate(0)], &config);
        assert_eq!(offenses[0].location_line, 0);
    }
}
