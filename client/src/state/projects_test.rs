use std::collections::HashSet;

use super::*;

#[test]
fn project_slugs_are_unique() {
    let slugs: HashSet<_> = PROJECTS.iter().map(|p| p.slug).collect();
    assert_eq!(slugs.len(), PROJECTS.len());
}

#[test]
fn find_project_matches_slug() {
    assert_eq!(find_project("lapse").map(|p| p.name), Some("Lapse"));
    assert!(find_project("missing").is_none());
}

#[test]
fn only_released_projects_link_to_detail_page() {
    assert_eq!(find_project("lapse").and_then(Project::href).as_deref(), Some("/apps/lapse"));
    assert_eq!(find_project("today").and_then(Project::href), None);
}

#[test]
fn badge_labels_and_classes() {
    assert_eq!(Badge::New.label(), "new");
    assert_eq!(Badge::ComingSoon.label(), "coming soon");
    assert_eq!(Badge::Platform("web").label(), "web");
    assert_eq!(Badge::Platform("web").class(), "badge badge--platform");
    assert_ne!(Badge::New.class(), Badge::ComingSoon.class());
}

#[test]
fn every_site_image_exists_in_public_dir() {
    let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../public");
    let images = PROJECTS.iter().map(|p| p.image).chain([crate::app::AUTHOR_IMAGE]);
    for image in images {
        let path = public.join(image.trim_start_matches('/'));
        assert!(path.is_file(), "missing asset {}", path.display());
    }
}
