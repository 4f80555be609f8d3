use semver::Version;
use smallvec::SmallVec;

use super::{VersionNumberError, VersionNumberResult};

pub const MAX_VERSION_COMPONENTS: usize = 3;

/// Parses a bare integer (`105`) or a dotted version (`1.0`, `1.0.5`) into a
/// [`Version`]. Omitted trailing components are zero.
///
/// Whitespace, signs, pre-release tags and build metadata are rejected.
#[tracing::instrument(level = "trace")]
pub fn parse_version_number(input: &str) -> VersionNumberResult<Version> {
    if input.is_empty() {
        return Err(VersionNumberError::Empty);
    }

    let count = input.split('.').count();
    if count > MAX_VERSION_COMPONENTS {
        return Err(VersionNumberError::TooManyComponents {
            input: input.to_string(),
            count,
        });
    }

    let mut components: SmallVec<[u64; MAX_VERSION_COMPONENTS]> = SmallVec::new();

    for (position, component) in input.split('.').enumerate() {
        if component.is_empty() {
            return Err(VersionNumberError::EmptyComponent {
                input: input.to_string(),
                position,
            });
        }

        // u64::from_str accepts a leading '+', so digits are checked first
        let value = if component.bytes().all(|b| b.is_ascii_digit()) {
            component.parse::<u64>().ok()
        } else {
            None
        };

        match value {
            Some(value) => components.push(value),
            None => {
                return Err(VersionNumberError::InvalidComponent {
                    input: input.to_string(),
                    component: component.to_string(),
                });
            }
        }
    }

    components.resize(MAX_VERSION_COMPONENTS, 0);

    Ok(Version::new(components[0], components[1], components[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_integer_becomes_major() {
        let version = parse_version_number("105").unwrap();
        assert_eq!(version, Version::new(105, 0, 0));
        assert_eq!(version.to_string(), "105.0.0");
    }

    #[test]
    fn missing_components_are_zero_filled() {
        assert_eq!(parse_version_number("1.2").unwrap(), Version::new(1, 2, 0));
        assert_eq!(parse_version_number("1.0.5").unwrap(), Version::new(1, 0, 5));
    }

    #[test]
    fn ordering_is_lexicographic_on_components() {
        let older = parse_version_number("1.10").unwrap();
        let newer = parse_version_number("2").unwrap();
        let patch = parse_version_number("1.10.1").unwrap();

        assert!(older < newer);
        assert!(older < patch);
        assert!(patch < newer);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_version_number(""), Err(VersionNumberError::Empty));
    }

    #[test]
    fn rejects_more_than_three_components() {
        let err = parse_version_number("1.2.3.4").unwrap_err();
        match err {
            VersionNumberError::TooManyComponents { count, .. } => assert_eq!(count, 4),
            other => panic!("expected TooManyComponents, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_components() {
        let err = parse_version_number("1..2").unwrap_err();
        match err {
            VersionNumberError::EmptyComponent { position, .. } => assert_eq!(position, 1),
            other => panic!("expected EmptyComponent, got {other:?}"),
        }
        assert!(parse_version_number("1.").is_err());
        assert!(parse_version_number(".1").is_err());
    }

    #[test]
    fn rejects_signs_whitespace_and_prerelease() {
        for input in ["+1", "-1", " 1", "1 ", "1.0.0-rc1", "1.0.0+build", "v1", "abc"] {
            match parse_version_number(input) {
                Err(VersionNumberError::InvalidComponent { .. }) => {}
                other => panic!("expected InvalidComponent for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_components_that_overflow() {
        let err = parse_version_number("18446744073709551616").unwrap_err();
        match err {
            VersionNumberError::InvalidComponent { component, .. } => {
                assert_eq!(component, "18446744073709551616");
            }
            other => panic!("expected InvalidComponent, got {other:?}"),
        }
    }
}
