use weebsh_core::models::*;

#[test]
fn image_parses_camel_case_fields() {
    let raw = r#"{
        "id": "Hko6RAPFx",
        "type": "hug",
        "baseType": "hug",
        "fileType": "gif",
        "mimeType": "image/gif",
        "nsfw": false,
        "account": "acc-1",
        "hidden": false,
        "url": "https://cdn.weeb.sh/images/Hko6RAPFx.gif",
        "tags": [{"name": "cute", "hidden": false, "user": "acc-2"}]
    }"#;
    let image: Image = serde_json::from_str(raw).unwrap();
    assert_eq!(image.kind, "hug");
    assert_eq!(image.base_type, "hug");
    assert_eq!(image.mime_type, "image/gif");
    assert_eq!(image.tags.len(), 1);
    assert_eq!(image.tags[0].user.as_deref(), Some("acc-2"));
}

#[test]
fn image_without_tags_defaults_to_empty() {
    let raw = r#"{"id":"x","type":"pat","baseType":"pat","fileType":"png","mimeType":"image/png",
        "nsfw":true,"account":"a","hidden":true,"url":"https://cdn.weeb.sh/images/x.png"}"#;
    let image: Image = serde_json::from_str(raw).unwrap();
    assert!(image.tags.is_empty());
    assert!(image.nsfw);
}

#[test]
fn image_serializes_type_field_name() {
    let raw = r#"{"id":"x","type":"pat","baseType":"pat","fileType":"png","mimeType":"image/png",
        "nsfw":false,"account":"a","hidden":false,"url":"u","tags":[]}"#;
    let image: Image = serde_json::from_str(raw).unwrap();
    let value = serde_json::to_value(&image).unwrap();
    assert_eq!(value["type"], "pat");
    assert_eq!(value["fileType"], "png");
    assert!(value.get("kind").is_none());
}

#[test]
fn tag_listing_accepts_bare_names_and_objects() {
    let raw = r#"{"status":200,"tags":["girl",{"name":"secret","hidden":true,"user":"acc"}]}"#;
    let listing: TagListing = serde_json::from_str(raw).unwrap();
    assert_eq!(
        listing.tags[0],
        ImageTag {
            name: "girl".into(),
            hidden: false,
            user: None,
        }
    );
    assert!(listing.tags[1].hidden);
    assert_eq!(listing.tags[1].user.as_deref(), Some("acc"));
}

#[test]
fn image_tag_without_user_skips_it_when_serialized() {
    let tag = ImageTag {
        name: "cute".into(),
        hidden: false,
        user: None,
    };
    let value = serde_json::to_value(&tag).unwrap();
    assert!(value.get("user").is_none());
}

#[test]
fn nsfw_filter_string_forms() {
    assert_eq!(NsfwFilter::Only.to_string(), "only");
    assert_eq!("FALSE".parse::<NsfwFilter>().unwrap(), NsfwFilter::False);
    assert_eq!(
        serde_json::to_string(&NsfwFilter::True).unwrap(),
        "\"true\""
    );
    assert!("maybe".parse::<NsfwFilter>().is_err());
}

#[test]
fn api_error_body_prefers_message() {
    let parsed: ApiErrorBody =
        serde_json::from_str(r#"{"status":404,"message":"Image not found"}"#).unwrap();
    assert_eq!(parsed.status, Some(404));
    assert_eq!(parsed.into_message().as_deref(), Some("Image not found"));

    let blank: ApiErrorBody = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
    assert_eq!(blank.into_message(), None);
}
