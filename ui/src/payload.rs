//! Submission payload builders.
//!
//! Pure helpers kept separate from the DOM wiring so they can be unit
//! tested off-browser.

use serde_json::{Map, Value};

/// Discriminator tagged onto every submission so the shared endpoint can
/// tell which form produced it.
pub const FORM_TYPE: &str = "price_calculator";

/// JSON body for a submission: every form field plus the `form_type`
/// discriminator. The discriminator is written last, so it wins over a
/// field that happens to share its name.
pub fn build(fields: &[(String, String)], form_type: &str) -> Value {
    let mut object = Map::with_capacity(fields.len() + 1);
    for (name, value) in fields {
        object.insert(name.clone(), Value::String(value.clone()));
    }
    object.insert("form_type".to_string(), Value::String(form_type.to_string()));
    Value::Object(object)
}

/// Look up a submitted field by name, empty when absent.
pub fn field<'a>(fields: &'a [(String, String)], name: &str) -> &'a str {
    fields
        .iter()
        .find(|(field_name, _)| field_name == name)
        .map_or("", |(_, value)| value.as_str())
}

/// Confirmation shown after a successful submission.
pub fn confirmation_message(fields: &[(String, String)]) -> String {
    format!(
        "Thank you, {}! Your request has been submitted. We will contact you at {} or {} shortly.",
        field(fields, "name"),
        field(fields, "phone"),
        field(fields, "email"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Vec<(String, String)> {
        vec![
            ("name".to_string(), "Ada".to_string()),
            ("phone".to_string(), "555-0100".to_string()),
            ("email".to_string(), "ada@example.com".to_string()),
            ("message".to_string(), "two floors".to_string()),
        ]
    }

    #[test]
    fn test_build_includes_all_fields_and_discriminator() {
        let body = build(&sample_fields(), FORM_TYPE);
        assert_eq!(body["name"], "Ada");
        assert_eq!(body["phone"], "555-0100");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["message"], "two floors");
        assert_eq!(body["form_type"], "price_calculator");
    }

    #[test]
    fn test_discriminator_wins_over_colliding_field() {
        let mut fields = sample_fields();
        fields.push(("form_type".to_string(), "spoofed".to_string()));
        let body = build(&fields, FORM_TYPE);
        assert_eq!(body["form_type"], "price_calculator");
    }

    #[test]
    fn test_confirmation_names_contact_details() {
        let message = confirmation_message(&sample_fields());
        assert!(message.contains("Ada"));
        assert!(message.contains("555-0100"));
        assert!(message.contains("ada@example.com"));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        assert_eq!(field(&[], "name"), "");
        let message = confirmation_message(&[]);
        assert!(message.starts_with("Thank you, !"));
    }
}
