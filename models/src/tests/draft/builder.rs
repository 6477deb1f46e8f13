use crate::{BlogDraft, FeaturedImage, ModelError};

fn complete_builder() -> crate::BlogDraftBuilder {
    BlogDraft::builder()
        .with_title("Compost basics")
        .with_topic("food")
        .with_content("Start with greens and browns.")
}

/// **VALUE**: Verifies a fully populated form builds with trimmed fields.
///
/// **WHY THIS MATTERS**: The create and edit pages submit exactly what the builder returns.
///
/// **BUG THIS CATCHES**: Would catch the builder dropping or mangling a field.
#[test]
fn given_all_required_fields_when_building_then_returns_trimmed_draft() {
    // GIVEN: Fields with surrounding whitespace
    let builder = BlogDraft::builder()
        .with_title("  Compost basics ")
        .with_topic("food")
        .with_content("Start with greens and browns.");

    // WHEN: Building
    let draft = builder.build().unwrap();

    // THEN: Values are trimmed and no image is attached
    assert_eq!(draft.title(), "Compost basics");
    assert_eq!(draft.topic(), "food");
    assert!(draft.featured_image().is_none());
}

/// **VALUE**: Verifies a missing required field is rejected with a readable message.
///
/// **WHY THIS MATTERS**: The message is shown inline on the create page.
///
/// **BUG THIS CATCHES**: Would catch the required-field check being skipped.
#[test]
fn given_missing_topic_when_building_then_returns_validation_error() {
    let result = BlogDraft::builder()
        .with_title("Compost basics")
        .with_content("Body")
        .build();

    match result {
        Err(ModelError::Validation { message, .. }) => assert_eq!(message, "Topic is required"),
        Ok(_) => panic!("Draft without topic should not build"),
    }
}

#[test]
fn given_blank_content_when_building_then_returns_validation_error() {
    let result = complete_builder().with_content("   \n").build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Content cannot be empty")
        }
        Ok(_) => panic!("Blank content should not build"),
    }
}

/// **VALUE**: Verifies an empty file input does not become an image part.
///
/// **WHY THIS MATTERS**: Browsers submit an empty `featured_image` part when no file is
/// chosen; forwarding it would overwrite the stored image with nothing on update.
///
/// **BUG THIS CATCHES**: Would catch zero-byte uploads being attached.
#[test]
fn given_empty_upload_when_attaching_image_then_image_is_ignored() {
    let empty = FeaturedImage {
        file_name: String::new(),
        content_type: String::from("application/octet-stream"),
        bytes: Vec::new(),
    };
    let real = FeaturedImage {
        file_name: String::from("cover.png"),
        content_type: String::from("image/png"),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    };

    let without = complete_builder().with_featured_image(empty).build().unwrap();
    let with = complete_builder().with_featured_image(real).build().unwrap();

    assert!(without.featured_image().is_none());
    assert_eq!(with.featured_image().unwrap().file_name, "cover.png");
}
