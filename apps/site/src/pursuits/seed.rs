use crate::pursuits::models::{ImageRef, Pursuit, PursuitDetails};

/// The entries compiled into the site. Edit here to add projects.
pub fn seed_pursuits() -> Vec<Pursuit> {
    vec![Pursuit {
        id: "victorian-cast-iron-restoration".to_string(),
        title: "Victorian Cast Iron Restoration".to_string(),
        subtitle: Some("In progress".to_string()),
        short_description:
            "Victorian Cast Iron Plant or Fern Stand, likely dating from the 1880s to the 1890s."
                .to_string(),
        preview_image: ImageRef::new("pursuits/castIronFernTable1.jpg", "Cast Iron Fern Table"),
        details: PursuitDetails {
            overview: "More in depth description".to_string(),
            bullets: Some(vec![
                "Dated: Approximately 1880s to the 1890s".to_string(),
                "Metal: Cast Iron".to_string(),
                "Manufacturer: unknown".to_string(),
            ]),
            status: None,
            next_steps: Some(vec![
                "Strip old paint".to_string(),
                "Treat rust".to_string(),
                "Maybe paint?".to_string(),
                "Wax".to_string(),
            ]),
            links: None,
            gallery: Some(vec![ImageRef::new(
                "pursuits/castIronFernTable1.jpg",
                "Cast Iron Fern Table",
            )]),
        },
    }]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_ids_are_unique_slugs() {
        let pursuits = seed_pursuits();
        let ids: HashSet<_> = pursuits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), pursuits.len());
        for id in ids {
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{id} is not a slug"
            );
        }
    }
}
