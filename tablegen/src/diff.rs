/// Field-set drift report between two observation sources.
use std::fmt;

use crate::dataset::FieldSet;

/// Keys split three ways, each list sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    pub left: String,
    pub right: String,
    pub only_left: Vec<String>,
    pub only_right: Vec<String>,
    pub both: Vec<String>,
}

pub fn diff(a: &FieldSet, b: &FieldSet) -> FieldDiff {
    // BTreeSet iteration is already sorted.
    let only_left = a.keys.difference(&b.keys).cloned().collect();
    let only_right = b.keys.difference(&a.keys).cloned().collect();
    let both = a.keys.intersection(&b.keys).cloned().collect();
    FieldDiff {
        left: a.label.clone(),
        right: b.label.clone(),
        only_left,
        only_right,
        both,
    }
}

impl FieldDiff {
    /// True when both sources carry exactly the same keys.
    pub fn is_converged(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }
}

impl fmt::Display for FieldDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fields: {} vs {}", self.left, self.right)?;
        writeln!(f, "only in {}: [{}]", self.left, quoted(&self.only_left))?;
        writeln!(f, "only in {}: [{}]", self.right, quoted(&self.only_right))?;
        writeln!(f, "in both: [{}]", quoted(&self.both))?;
        let status = if self.is_converged() { "converged" } else { "drifted" };
        writeln!(f, "status: {status}")
    }
}

fn quoted(keys: &[String]) -> String {
    keys.iter()
        .map(|k| format!("'{k}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Datasets;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_three_way_split() {
        let a = FieldSet::new("a", ["z", "temp", "b"]);
        let b = FieldSet::new("b", ["temp", "icon"]);
        let d = diff(&a, &b);
        assert_eq!(d.only_left, vec!["b", "z"]);
        assert_eq!(d.only_right, vec!["icon"]);
        assert_eq!(d.both, vec!["temp"]);
        assert!(!d.is_converged());
    }

    #[test]
    fn test_identical_sets_converge() {
        let a = FieldSet::new("a", ["x", "y"]);
        let b = FieldSet::new("b", ["y", "x"]);
        let d = diff(&a, &b);
        assert!(d.is_converged());
        assert_eq!(d.both, vec!["x", "y"]);
    }

    #[test]
    fn test_report_format() {
        let a = FieldSet::new("forecast", ["maxt", "temp"]);
        let b = FieldSet::new("current", ["icon", "temp"]);
        assert_eq!(
            diff(&a, &b).to_string(),
            "fields: forecast vs current\n\
             only in forecast: ['maxt']\n\
             only in current: ['icon']\n\
             in both: ['temp']\n\
             status: drifted\n"
        );
    }

    #[test]
    fn test_report_marks_convergence() {
        let a = FieldSet::new("forecast", ["temp"]);
        let b = FieldSet::new("current", ["temp"]);
        assert!(diff(&a, &b).to_string().ends_with("in both: ['temp']\nstatus: converged\n"));
    }

    #[test]
    fn test_embedded_observation_drift() {
        let data = Datasets::embedded().unwrap();
        let d = diff(&data.forecast, &data.current);
        for k in [
            "maxt",
            "mint",
            "conditions",
            "pop",
            "snow",
            "sunshine",
            "sw_radiation",
            "lw_radiation",
        ] {
            assert!(d.only_left.iter().any(|x| x == k), "missing {k}");
        }
        for k in ["icon", "stations", "moonphase", "sunrise", "sunset"] {
            assert!(d.only_right.iter().any(|x| x == k), "missing {k}");
        }
        for k in ["temp", "wdir", "wspd", "humidity", "dew"] {
            assert!(d.both.iter().any(|x| x == k), "missing {k}");
        }
        let mut sorted = d.both.clone();
        sorted.sort();
        assert_eq!(d.both, sorted);
    }
}
