/// Station and contaminant registries for the Euskadi air-quality network.
///
/// Defines the canonical list of monitoring stations and tracked pollutant
/// species this tool can query, with the numeric ids the datosHorarios
/// service assigns them. This is the single source of truth for identifiers;
/// all other modules should resolve names through here rather than
/// hardcoding ids.

use tabled::Tabled;

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// A fixed physical monitoring location in the Euskadi network.
#[derive(Debug, Tabled)]
pub struct Station {
    /// Registered station name, exactly as the upstream registry spells it.
    /// Station 81 carries a mojibake artifact ("MÂª") inherited from that
    /// registry; it is sent back verbatim in `nombreEstacion`.
    pub name: &'static str,
    /// Numeric id as understood by the datosHorarios endpoint.
    pub id: u32,
}

/// A tracked pollutant species.
#[derive(Debug, Tabled)]
pub struct Contaminant {
    /// Species name as the service spells it (also sent back in requests).
    pub name: &'static str,
    /// Numeric id as understood by the datosHorarios endpoint.
    pub id: u32,
}

/// All stations this tool knows how to query.
pub static STATION_REGISTRY: &[Station] = &[
    Station {
        name: "MAZARREDO",
        id: 60,
    },
    Station {
        name: "MÂª DIAZ HARO",
        id: 81,
    },
];

/// All contaminant species the service reports hourly values for.
pub static CONTAMINANT_REGISTRY: &[Contaminant] = &[
    Contaminant { name: "SO2", id: 1 },
    Contaminant { name: "NO2", id: 2 },
    Contaminant { name: "NO", id: 3 },
    Contaminant { name: "CO", id: 4 },
    Contaminant { name: "O3", id: 5 },
    Contaminant { name: "PM10", id: 6 },
];

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

/// Looks up a station by id. Returns `None` if not found.
pub fn find_station(id: u32) -> Option<&'static Station> {
    STATION_REGISTRY.iter().find(|s| s.id == id)
}

/// Looks up a contaminant by id. Returns `None` if not found.
pub fn find_contaminant(id: u32) -> Option<&'static Contaminant> {
    CONTAMINANT_REGISTRY.iter().find(|c| c.id == id)
}

/// Resolves requested contaminant ids against the registry, preserving
/// request order. Unknown ids are dropped; the caller decides whether an
/// empty result is an error.
pub fn resolve_contaminants(ids: &[u32]) -> Vec<&'static Contaminant> {
    ids.iter().filter_map(|&id| find_contaminant(id)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_station_ids() {
        let mut seen = std::collections::HashSet::new();
        for station in STATION_REGISTRY {
            assert!(
                seen.insert(station.id),
                "duplicate station id '{}' found in STATION_REGISTRY",
                station.id
            );
        }
    }

    #[test]
    fn test_no_duplicate_contaminant_ids() {
        let mut seen = std::collections::HashSet::new();
        for contaminant in CONTAMINANT_REGISTRY {
            assert!(
                seen.insert(contaminant.id),
                "duplicate contaminant id '{}' found in CONTAMINANT_REGISTRY",
                contaminant.id
            );
        }
    }

    #[test]
    fn test_registry_stores_registered_station_names_verbatim() {
        // Station 81's name contains a mojibake artifact inherited from the
        // upstream registry. It must survive exactly as stored; a corrected
        // spelling no longer matches what the service expects.
        let mazarredo = find_station(60).expect("station 60 should be registered");
        assert_eq!(mazarredo.name, "MAZARREDO");

        let diaz_haro = find_station(81).expect("station 81 should be registered");
        assert_eq!(diaz_haro.name, "MÂª DIAZ HARO");
    }

    #[test]
    fn test_find_station_returns_none_for_unknown_id() {
        assert!(find_station(0).is_none());
        assert!(find_station(9999).is_none());
    }

    #[test]
    fn test_contaminant_registry_matches_service_ids() {
        let expected = [
            ("SO2", 1),
            ("NO2", 2),
            ("NO", 3),
            ("CO", 4),
            ("O3", 5),
            ("PM10", 6),
        ];
        for (name, id) in expected {
            let contaminant = find_contaminant(id)
                .unwrap_or_else(|| panic!("contaminant id {} missing from registry", id));
            assert_eq!(contaminant.name, name, "wrong name for contaminant id {}", id);
        }
    }

    #[test]
    fn test_resolve_contaminants_preserves_request_order() {
        let resolved = resolve_contaminants(&[6, 1, 2]);
        let names: Vec<_> = resolved.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["PM10", "SO2", "NO2"]);
    }

    #[test]
    fn test_resolve_contaminants_drops_unknown_ids() {
        let resolved = resolve_contaminants(&[1, 42, 2]);
        let names: Vec<_> = resolved.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["SO2", "NO2"]);

        assert!(resolve_contaminants(&[42, 99]).is_empty());
        assert!(resolve_contaminants(&[]).is_empty());
    }
}
