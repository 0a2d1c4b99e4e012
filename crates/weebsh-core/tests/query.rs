use weebsh_core::{Credential, Error, NsfwFilter, RandomImageQuery, TokenType};

fn keys(query: &RandomImageQuery) -> Vec<String> {
    query.query_pairs().into_iter().map(|(k, _)| k).collect()
}

#[test]
fn type_only_query_has_single_type_param() {
    let query = RandomImageQuery::by_type("kiss").unwrap();
    assert_eq!(
        query.query_pairs(),
        vec![("type".to_string(), "kiss".to_string())]
    );
}

#[test]
fn tags_only_query_has_single_tags_param() {
    let query = RandomImageQuery::by_tags("girl,cute").unwrap();
    assert_eq!(
        query.query_pairs(),
        vec![("tags".to_string(), "girl,cute".to_string())]
    );
}

#[test]
fn full_query_follows_declaration_order() {
    let query = RandomImageQuery::by_tags("girl")
        .unwrap()
        .with_hidden(false)
        .with_nsfw(NsfwFilter::Only)
        .with_type("hug")
        .unwrap();
    assert_eq!(keys(&query), vec!["type", "tags", "nsfw", "hidden"]);
    assert_eq!(query.query_pairs()[3].1, "false");
}

#[test]
fn type_tags_and_nsfw_give_three_params() {
    let query = RandomImageQuery::by_type("hug")
        .and_then(|q| q.with_tags("girl"))
        .unwrap()
        .with_nsfw(NsfwFilter::Only);
    assert_eq!(
        query.query_pairs(),
        vec![
            ("type".to_string(), "hug".to_string()),
            ("tags".to_string(), "girl".to_string()),
            ("nsfw".to_string(), "only".to_string()),
        ]
    );
}

#[test]
fn setting_required_side_replaces_it() {
    let query = RandomImageQuery::by_type("hug")
        .and_then(|q| q.with_type("pat"))
        .unwrap();
    assert_eq!(query.kind(), Some("pat"));
    assert_eq!(query.tags(), None);

    let query = RandomImageQuery::by_tags("a")
        .and_then(|q| q.with_tags("b"))
        .unwrap();
    assert_eq!(query.tags(), Some("b"));
    assert_eq!(query.kind(), None);
}

#[test]
fn tag_lists_are_comma_joined() {
    let query = RandomImageQuery::by_tag_list(["girl", " cute ", ""]).unwrap();
    assert_eq!(query.tags(), Some("girl,cute"));

    let query = RandomImageQuery::by_type("hug")
        .and_then(|q| q.with_tag_list(vec!["a".to_string()]))
        .unwrap();
    assert_eq!(query.tags(), Some("a"));
}

#[test]
fn blank_required_filter_is_rejected() {
    assert!(matches!(
        RandomImageQuery::by_tag_list(["", "  "]),
        Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
        RandomImageQuery::by_tags(""),
        Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
        RandomImageQuery::by_type(" "),
        Err(Error::InvalidConfig(_))
    ));

    let by_tags = RandomImageQuery::by_tags("girl").unwrap();
    assert!(matches!(
        by_tags.with_tags("  "),
        Err(Error::InvalidConfig(_))
    ));
    let by_type = RandomImageQuery::by_type("hug").unwrap();
    assert!(matches!(
        by_type.with_type(""),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn blank_optional_filter_sends_nothing() {
    let query = RandomImageQuery::by_type("hug")
        .and_then(|q| q.with_tags("girl"))
        .and_then(|q| q.with_tag_list([" ", ""]))
        .unwrap();
    assert_eq!(
        query.query_pairs(),
        vec![("type".to_string(), "hug".to_string())]
    );

    let query = RandomImageQuery::by_tags("girl")
        .and_then(|q| q.with_type(""))
        .unwrap();
    assert_eq!(keys(&query), vec!["tags"]);
}

#[test]
fn header_value_depends_on_scheme() {
    assert_eq!(Credential::new("abc", TokenType::Raw).header_value(), "abc");
    assert_eq!(Credential::bearer("abc").header_value(), "Bearer abc");
    assert_eq!(
        Credential::new("abc", TokenType::Wolke).header_value(),
        "Wolke abc"
    );
}

#[test]
fn credential_debug_hides_token() {
    let credential = Credential::bearer("super-secret-token");
    let debug = format!("{credential:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("****oken"));
}
