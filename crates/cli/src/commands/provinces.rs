//! Reference data commands for Italian regions and provinces.

use ecoverde_core::provinces::{ITALIAN_PROVINCES, provinces_by_region, regions as region_names};

/// Print the alphabetical region list.
pub fn regions() {
    for region in region_names() {
        tracing::info!("{region}");
    }
}

/// Print provinces, all of them or one region's worth.
pub fn list(region: Option<&str>) {
    match region {
        Some(region) => {
            let matches = provinces_by_region(region);
            if matches.is_empty() {
                tracing::warn!("No provinces found for region: {region}");
                return;
            }
            for province in matches {
                tracing::info!("{}  {}", province.code, province.name);
            }
        }
        None => {
            for province in ITALIAN_PROVINCES {
                tracing::info!("{}  {}  ({})", province.code, province.name, province.region);
            }
        }
    }
}
