//! Static reference table of Italian provinces grouped by region.
//!
//! Immutable data with no lifecycle: the table is sorted by region, the
//! derived region list is sorted and de-duplicated, and the only query is a
//! pure filter.

use serde::Serialize;

/// An Italian province with its two-letter code and parent region.
///
/// Serialize-only: the fields borrow from the static table, so there is
/// nothing for owned JSON input to deserialize into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Province {
    /// Two-letter province code (e.g. "FI").
    pub code: &'static str,
    /// Province name (e.g. "Firenze").
    pub name: &'static str,
    /// Parent administrative region (e.g. "Toscana").
    pub region: &'static str,
}

const fn province(code: &'static str, name: &'static str, region: &'static str) -> Province {
    Province { code, name, region }
}

/// All Italian provinces, grouped by region.
pub const ITALIAN_PROVINCES: &[Province] = &[
    // Abruzzo
    province("AQ", "L'Aquila", "Abruzzo"),
    province("CH", "Chieti", "Abruzzo"),
    province("PE", "Pescara", "Abruzzo"),
    province("TE", "Teramo", "Abruzzo"),
    // Basilicata
    province("MT", "Matera", "Basilicata"),
    province("PZ", "Potenza", "Basilicata"),
    // Calabria
    province("CZ", "Catanzaro", "Calabria"),
    province("CS", "Cosenza", "Calabria"),
    province("KR", "Crotone", "Calabria"),
    province("RC", "Reggio Calabria", "Calabria"),
    province("VV", "Vibo Valentia", "Calabria"),
    // Campania
    province("AV", "Avellino", "Campania"),
    province("BN", "Benevento", "Campania"),
    province("CE", "Caserta", "Campania"),
    province("NA", "Napoli", "Campania"),
    province("SA", "Salerno", "Campania"),
    // Emilia-Romagna
    province("BO", "Bologna", "Emilia-Romagna"),
    province("FE", "Ferrara", "Emilia-Romagna"),
    province("FC", "Forlì-Cesena", "Emilia-Romagna"),
    province("MO", "Modena", "Emilia-Romagna"),
    province("PR", "Parma", "Emilia-Romagna"),
    province("PC", "Piacenza", "Emilia-Romagna"),
    province("RA", "Ravenna", "Emilia-Romagna"),
    province("RE", "Reggio Emilia", "Emilia-Romagna"),
    province("RN", "Rimini", "Emilia-Romagna"),
    // Friuli-Venezia Giulia
    province("GO", "Gorizia", "Friuli-Venezia Giulia"),
    province("PN", "Pordenone", "Friuli-Venezia Giulia"),
    province("TS", "Trieste", "Friuli-Venezia Giulia"),
    province("UD", "Udine", "Friuli-Venezia Giulia"),
    // Lazio
    province("FR", "Frosinone", "Lazio"),
    province("LT", "Latina", "Lazio"),
    province("RI", "Rieti", "Lazio"),
    province("RM", "Roma", "Lazio"),
    province("VT", "Viterbo", "Lazio"),
    // Liguria
    province("GE", "Genova", "Liguria"),
    province("IM", "Imperia", "Liguria"),
    province("SP", "La Spezia", "Liguria"),
    province("SV", "Savona", "Liguria"),
    // Lombardia
    province("BG", "Bergamo", "Lombardia"),
    province("BS", "Brescia", "Lombardia"),
    province("CO", "Como", "Lombardia"),
    province("CR", "Cremona", "Lombardia"),
    province("LC", "Lecco", "Lombardia"),
    province("LO", "Lodi", "Lombardia"),
    province("MN", "Mantova", "Lombardia"),
    province("MI", "Milano", "Lombardia"),
    province("MB", "Monza e Brianza", "Lombardia"),
    province("PV", "Pavia", "Lombardia"),
    province("SO", "Sondrio", "Lombardia"),
    province("VA", "Varese", "Lombardia"),
    // Marche
    province("AN", "Ancona", "Marche"),
    province("AP", "Ascoli Piceno", "Marche"),
    province("FM", "Fermo", "Marche"),
    province("MC", "Macerata", "Marche"),
    province("PU", "Pesaro e Urbino", "Marche"),
    // Molise
    province("CB", "Campobasso", "Molise"),
    province("IS", "Isernia", "Molise"),
    // Piemonte
    province("AL", "Alessandria", "Piemonte"),
    province("AT", "Asti", "Piemonte"),
    province("BI", "Biella", "Piemonte"),
    province("CN", "Cuneo", "Piemonte"),
    province("NO", "Novara", "Piemonte"),
    province("TO", "Torino", "Piemonte"),
    province("VB", "Verbano-Cusio-Ossola", "Piemonte"),
    province("VC", "Vercelli", "Piemonte"),
    // Puglia
    province("BA", "Bari", "Puglia"),
    province("BT", "Barletta-Andria-Trani", "Puglia"),
    province("BR", "Brindisi", "Puglia"),
    province("FG", "Foggia", "Puglia"),
    province("LE", "Lecce", "Puglia"),
    province("TA", "Taranto", "Puglia"),
    // Sardegna
    province("CA", "Cagliari", "Sardegna"),
    province("NU", "Nuoro", "Sardegna"),
    province("OR", "Oristano", "Sardegna"),
    province("SS", "Sassari", "Sardegna"),
    province("SU", "Sud Sardegna", "Sardegna"),
    // Sicilia
    province("AG", "Agrigento", "Sicilia"),
    province("CL", "Caltanissetta", "Sicilia"),
    province("CT", "Catania", "Sicilia"),
    province("EN", "Enna", "Sicilia"),
    province("ME", "Messina", "Sicilia"),
    province("PA", "Palermo", "Sicilia"),
    province("RG", "Ragusa", "Sicilia"),
    province("SR", "Siracusa", "Sicilia"),
    province("TP", "Trapani", "Sicilia"),
    // Toscana
    province("AR", "Arezzo", "Toscana"),
    province("FI", "Firenze", "Toscana"),
    province("GR", "Grosseto", "Toscana"),
    province("LI", "Livorno", "Toscana"),
    province("LU", "Lucca", "Toscana"),
    province("MS", "Massa-Carrara", "Toscana"),
    province("PI", "Pisa", "Toscana"),
    province("PT", "Pistoia", "Toscana"),
    province("PO", "Prato", "Toscana"),
    province("SI", "Siena", "Toscana"),
    // Trentino-Alto Adige
    province("BZ", "Bolzano", "Trentino-Alto Adige"),
    province("TN", "Trento", "Trentino-Alto Adige"),
    // Umbria
    province("PG", "Perugia", "Umbria"),
    province("TR", "Terni", "Umbria"),
    // Valle d'Aosta
    province("AO", "Aosta", "Valle d'Aosta"),
    // Veneto
    province("BL", "Belluno", "Veneto"),
    province("PD", "Padova", "Veneto"),
    province("RO", "Rovigo", "Veneto"),
    province("TV", "Treviso", "Veneto"),
    province("VE", "Venezia", "Veneto"),
    province("VR", "Verona", "Veneto"),
    province("VI", "Vicenza", "Veneto"),
];

/// Alphabetically sorted, de-duplicated list of region names.
#[must_use]
pub fn regions() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ITALIAN_PROVINCES.iter().map(|p| p.region).collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// All provinces belonging to `region`, in table order.
#[must_use]
pub fn provinces_by_region(region: &str) -> Vec<&'static Province> {
    ITALIAN_PROVINCES
        .iter()
        .filter(|p| p.region == region)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_all_provinces() {
        assert_eq!(ITALIAN_PROVINCES.len(), 107);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = ITALIAN_PROVINCES.iter().map(|p| p.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(codes.len(), before);
    }

    #[test]
    fn test_regions_sorted_and_unique() {
        let names = regions();
        assert_eq!(names.len(), 20);
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"Abruzzo"));
        assert_eq!(names.last(), Some(&"Veneto"));
    }

    #[test]
    fn test_toscana_has_ten_provinces() {
        let tuscany = provinces_by_region("Toscana");
        assert_eq!(tuscany.len(), 10);
        assert!(tuscany.iter().all(|p| p.region == "Toscana"));
        let codes: Vec<&str> = tuscany.iter().map(|p| p.code).collect();
        assert_eq!(
            codes,
            ["AR", "FI", "GR", "LI", "LU", "MS", "PI", "PT", "PO", "SI"]
        );
    }

    #[test]
    fn test_unknown_region_is_empty() {
        assert!(provinces_by_region("Padania").is_empty());
    }

    #[test]
    fn test_province_serializes_as_plain_object() {
        let json = serde_json::to_value(province("FI", "Firenze", "Toscana")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "FI", "name": "Firenze", "region": "Toscana" })
        );
    }
}
