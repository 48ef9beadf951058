use validator::ValidationErrors;

/// Picks a single human-readable message out of a set of field errors.
///
/// Fields are visited in name order so the same input always reports the
/// same message.
pub fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields
        .into_iter()
        .flat_map(|field| field_errors[field].iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use validator::{ValidationError, ValidationErrors};

    use super::first_message;

    #[test]
    fn reports_message_of_first_field_by_name() {
        let mut errors = ValidationErrors::new();

        let mut size = ValidationError::new("size");
        size.message = Some(Cow::from("size is not supported."));
        errors.add("size", size);

        let mut model = ValidationError::new("model");
        model.message = Some(Cow::from("model is not supported."));
        errors.add("model", model);

        assert_eq!(first_message(&errors), "model is not supported.");
    }

    #[test]
    fn falls_back_to_display_without_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("quantity", ValidationError::new("range"));

        assert!(first_message(&errors).contains("quantity"));
    }
}
