use super::*;

#[test]
fn nav_items_are_in_page_anchors() {
    for item in NAV_ITEMS {
        assert!(item.href.starts_with('#'), "{} should link within the page", item.label);
    }
}

#[test]
fn mail_link_targets_owner_email() {
    let mail = SOCIAL_LINKS
        .iter()
        .find(|link| link.kind == SocialKind::Mail)
        .expect("footer has a mail link");
    assert_eq!(mail.href, format!("mailto:{OWNER_EMAIL}"));
}

#[test]
fn tech_stack_has_no_duplicates() {
    let unique: std::collections::HashSet<_> = TECH_STACK.iter().collect();
    assert_eq!(unique.len(), TECH_STACK.len());
}

#[test]
fn linked_assets_exist_in_site_root() {
    let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../public");
    for path in [PORTRAIT_PATH, RESUME_PATH] {
        let file = public.join(path.trim_start_matches('/'));
        assert!(file.is_file(), "{path} is linked but missing from public/");
    }
}

#[test]
fn resume_is_a_pdf() {
    let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../public");
    let bytes = std::fs::read(public.join(RESUME_PATH.trim_start_matches('/'))).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}
