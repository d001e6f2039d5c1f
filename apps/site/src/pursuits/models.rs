use serde::Serialize;

/// Root against which every image `src` is resolved.
pub const PUBLIC_ASSET_ROOT: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// Path relative to the public asset root, e.g. `pursuits/fern-table.jpg`.
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PursuitDetails {
    pub overview: String,
    pub bullets: Option<Vec<String>>,
    pub status: Option<String>,
    pub next_steps: Option<Vec<String>>,
    pub links: Option<Vec<Link>>,
    pub gallery: Option<Vec<ImageRef>>,
}

/// A portfolio entry: a card in the list and a panel in the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pursuit {
    /// URL-safe slug, used in `?pursuit=` links.
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub short_description: String,
    pub preview_image: ImageRef,
    pub details: PursuitDetails,
}

impl ImageRef {
    pub fn new(src: &str, alt: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}{}",
            PUBLIC_ASSET_ROOT,
            self.src.trim_start_matches('/')
        )
    }
}

impl PursuitDetails {
    /// Only non-empty lists count as present.
    pub fn bullets(&self) -> Option<&[String]> {
        non_empty(&self.bullets)
    }

    pub fn next_steps(&self) -> Option<&[String]> {
        non_empty(&self.next_steps)
    }

    pub fn links(&self) -> Option<&[Link]> {
        non_empty(&self.links)
    }

    pub fn gallery(&self) -> Option<&[ImageRef]> {
        non_empty(&self.gallery)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|items| !items.is_empty())
}

pub fn find_pursuit<'a>(items: &'a [Pursuit], id: &str) -> Option<(usize, &'a Pursuit)> {
    items.iter().enumerate().find(|(_, p)| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_is_rooted() {
        assert_eq!(
            ImageRef::new("pursuits/a.jpg", "A").url(),
            "/pursuits/a.jpg"
        );
        assert_eq!(
            ImageRef::new("/pursuits/a.jpg", "A").url(),
            "/pursuits/a.jpg"
        );
    }

    #[test]
    fn test_empty_lists_count_as_absent() {
        let details = PursuitDetails {
            overview: "x".to_string(),
            bullets: Some(vec![]),
            status: Some(String::new()),
            next_steps: None,
            links: None,
            gallery: Some(vec![ImageRef::new("a.jpg", "a")]),
        };
        assert!(details.bullets().is_none());
        assert!(details.status().is_none());
        assert!(details.next_steps().is_none());
        assert_eq!(details.gallery().map(|g| g.len()), Some(1));
    }
}
