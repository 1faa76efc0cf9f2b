use bytes::Bytes;
use serde::Serialize;

use crate::error::ApiError;

use super::repo::PhotoFields;

/// A file part pulled out of the multipart body.
#[derive(Debug)]
pub struct UploadFile {
    pub body: Bytes,
    pub content_type: String,
}

/// Response for upload and update; `photoUrl` is the public path of the
/// stored image.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSavedResponse {
    pub message: String,
    pub photo_url: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Applies one named multipart text field to the scalar field set.
/// Unknown field names are ignored; clients post extras freely.
pub fn apply_field(fields: &mut PhotoFields, name: &str, value: String) -> Result<(), ApiError> {
    match name {
        "description" => fields.description = text(value),
        "name" => fields.name = text(value),
        "place" => fields.place = text(value),
        "species_type" => fields.species_type = text(value),
        "scenic" => fields.scenic = text(value),
        "length" => fields.length = measure("length", value)?,
        "weight" => fields.weight = measure("weight", value)?,
        "lure" => fields.lure = text(value),
        "awards" => fields.awards = text(value),
        _ => {}
    }
    Ok(())
}

fn text(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn measure(field: &str, value: String) -> Result<Option<f64>, ApiError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ApiError::Validation(format!("Invalid {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fields_land_in_the_right_slots() {
        let mut fields = PhotoFields::default();
        apply_field(&mut fields, "species_type", "brown trout".into()).unwrap();
        apply_field(&mut fields, "place", "River Test".into()).unwrap();
        apply_field(&mut fields, "lure", "dry fly".into()).unwrap();
        assert_eq!(fields.species_type.as_deref(), Some("brown trout"));
        assert_eq!(fields.place.as_deref(), Some("River Test"));
        assert_eq!(fields.lure.as_deref(), Some("dry fly"));
        assert!(fields.description.is_none());
    }

    #[test]
    fn measures_parse_or_reject() {
        let mut fields = PhotoFields::default();
        apply_field(&mut fields, "length", "54.5".into()).unwrap();
        apply_field(&mut fields, "weight", "2.3".into()).unwrap();
        assert_eq!(fields.length, Some(54.5));
        assert_eq!(fields.weight, Some(2.3));

        let err = apply_field(&mut fields, "length", "big".into()).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn empty_values_stay_none() {
        let mut fields = PhotoFields::default();
        apply_field(&mut fields, "description", "".into()).unwrap();
        apply_field(&mut fields, "weight", "".into()).unwrap();
        assert!(fields.description.is_none());
        assert!(fields.weight.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut fields = PhotoFields::default();
        apply_field(&mut fields, "csrf_token", "abc".into()).unwrap();
        assert!(fields.description.is_none());
    }

    #[test]
    fn saved_response_uses_camel_case_photo_url() {
        let resp = PhotoSavedResponse {
            message: "ok".into(),
            photo_url: "/uploads/a.jpg".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"photoUrl\""));
    }
}
