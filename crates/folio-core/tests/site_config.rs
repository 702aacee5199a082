//! The shipped site document must stay valid

use folio_core::{AnchorTarget, FormMethod, SiteConfig};

const SHIPPED: &str = include_str!("../../../assets/site.json");

#[test]
fn test_shipped_config_parses() {
    let site = SiteConfig::from_json(SHIPPED).expect("shipped site.json is valid");

    assert!(!site.projects.is_empty());
    assert!(site.projects.iter().all(|p| !p.title.is_empty()));
    assert!(site.modal_note.is_some());
}

#[test]
fn test_shipped_hero_points_at_gallery() {
    let site = SiteConfig::from_json(SHIPPED).unwrap();
    let target = AnchorTarget::parse(&site.hero.cta_href).unwrap();
    assert_eq!(target.id(), "gallery");
}

#[test]
fn test_shipped_contact_posts() {
    let site = SiteConfig::from_json(SHIPPED).unwrap();
    let endpoint = site.contact_endpoint().unwrap();
    assert_eq!(endpoint.method, FormMethod::Post);
    assert_eq!(endpoint.action.scheme(), "https");
}
