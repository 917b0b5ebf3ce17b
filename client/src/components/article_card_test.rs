use super::*;

fn post(published_at: &str) -> PostSummary {
    PostSummary {
        slug: "hello".to_owned(),
        title: "Hello".to_owned(),
        summary: "First post".to_owned(),
        published_at: published_at.to_owned(),
        image: None,
        tags: Some(r#"["ux"]"#.to_owned()),
    }
}

#[test]
fn article_href_points_at_blog_route() {
    assert_eq!(article_href("hello"), "/blog/hello");
}

#[test]
fn article_href_encodes_slug_segment() {
    assert_eq!(article_href("release.notes"), "/blog/release.notes");
    assert_eq!(article_href("über-uns"), "/blog/%C3%BCber-uns");
}

#[test]
fn date_label_formats_or_falls_back() {
    assert_eq!(date_label(&post("2021-10-05")), "October 05, 2021");
    assert_eq!(date_label(&post("someday")), "someday");
}
