//! Wind-bearing lookup and trip-report region table, generated at build time
//! from the tablegen datasets.

/// Generated tables -- rendered by tablegen in build.rs.
#[allow(clippy::all)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/tables.rs"));
}

/// The same lookup keyed on abbreviations (`"NE"`, `"W"`).
#[allow(clippy::all)]
pub mod abbreviation {
    include!(concat!(env!("OUT_DIR"), "/abbreviations.rs"));
}

pub use generated::{wind_bearing, Region, UnknownBearingError, REGIONS};

/// Find a top-level region or a subregion by its id.
pub fn region_by_id(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find_map(|r| {
        if r.id == id {
            Some(r)
        } else {
            r.subregions.iter().find(|s| s.id == id)
        }
    })
}

/// Find a top-level region by its display name.
pub fn region_by_name(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == name)
}

/// The top-level region a subregion id belongs to.
pub fn parent_of(subregion_id: &str) -> Option<&'static Region> {
    REGIONS
        .iter()
        .find(|r| r.subregions.iter().any(|s| s.id == subregion_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bearings() {
        assert_eq!(wind_bearing("Northeast"), Ok(45.0));
        assert_eq!(wind_bearing("North"), Ok(0.0));
        assert_eq!(wind_bearing("South"), Ok(180.0));
        assert_eq!(wind_bearing("North by west"), Ok(348.75));
    }

    #[test]
    fn test_unknown_bearing() {
        let err = wind_bearing("Up").unwrap_err();
        assert_eq!(err.bearing, "Up");
        assert!(err.to_string().contains("Up"));
        assert_eq!(wind_bearing("Up").unwrap_or_default(), 0.0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(wind_bearing("north").is_err());
        assert!(wind_bearing("N").is_err());
    }

    #[test]
    fn test_abbreviation_lookup() {
        assert_eq!(abbreviation::wind_bearing("W"), Ok(270.0));
        assert_eq!(abbreviation::wind_bearing("NE"), Ok(45.0));
        assert_eq!(abbreviation::wind_bearing("NbW"), Ok(348.75));
        let err = abbreviation::wind_bearing("West").unwrap_err();
        assert_eq!(err.bearing, "West");
    }

    #[test]
    fn test_region_count() {
        assert_eq!(REGIONS.len(), 11);
        assert!(REGIONS.iter().all(|r| !r.subregions.is_empty()));
        assert!(REGIONS
            .iter()
            .flat_map(|r| r.subregions)
            .all(|s| s.subregions.is_empty()));
    }

    #[test]
    fn test_central_cascades() {
        let cc = region_by_name("Central Cascades").unwrap();
        assert_eq!(cc.id, "b4845d8a21ad6a202944425c86b6e85f");
        assert_eq!(cc.subregions.len(), 4);
        assert!(cc.subregions.iter().any(|s| s.name == "Blewett Pass"));
    }

    #[test]
    fn test_lookup_by_id() {
        let blewett = region_by_id("83c2ab06fbf236015c8848042f706d58").unwrap();
        assert_eq!(blewett.name, "Blewett Pass");
        assert_eq!(parent_of(blewett.id).unwrap().name, "Central Cascades");
        assert!(region_by_id("ffffffffffffffffffffffffffffffff").is_none());
    }
}
