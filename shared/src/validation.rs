//! Validation utilities for the Crop Advisor platform

use validator::ValidationErrors;

use crate::image::ImageError;

// ============================================================================
// Soil Analysis Validations
// ============================================================================

/// A classification needs at least one piece of evidence
pub fn validate_soil_inputs(has_image: bool, description: Option<&str>) -> Result<(), &'static str> {
    let has_description = description.is_some_and(|d| !d.trim().is_empty());
    if !has_image && !has_description {
        return Err("Provide a soil image or a soil description");
    }
    Ok(())
}

/// Validate an uploaded image against the configured size limit
pub fn validate_image_size(size: usize, limit: usize) -> Result<(), ImageError> {
    if size == 0 {
        return Err(ImageError::Empty);
    }
    if size > limit {
        return Err(ImageError::TooLarge { size, limit });
    }
    Ok(())
}

/// Validate text submitted for translation
pub fn validate_translation_text(text: &str) -> Result<(), &'static str> {
    if text.trim().is_empty() {
        return Err("Text to translate cannot be empty");
    }
    Ok(())
}

// ============================================================================
// Error Reporting
// ============================================================================

/// Pick the first failing field and its message, sorted by field name
///
/// `validator` stores errors in a hash map, so sorting keeps responses stable.
pub fn first_validation_error(errors: &ValidationErrors) -> Option<(String, String)> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by_key(|(field, _)| **field);

    fields.into_iter().find_map(|(field, errs)| {
        errs.first().map(|err| {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            (field.to_string(), message)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FarmParameters;
    use validator::Validate;

    #[test]
    fn test_soil_inputs_require_evidence() {
        assert!(validate_soil_inputs(true, None).is_ok());
        assert!(validate_soil_inputs(false, Some("Texture: sticky plastic clay")).is_ok());
        assert!(validate_soil_inputs(false, Some("  ")).is_err());
        assert!(validate_soil_inputs(false, None).is_err());
    }

    #[test]
    fn test_image_size_limit() {
        assert!(validate_image_size(1024, 2048).is_ok());
        assert_eq!(validate_image_size(0, 2048), Err(ImageError::Empty));
        assert_eq!(
            validate_image_size(4096, 2048),
            Err(ImageError::TooLarge {
                size: 4096,
                limit: 2048
            })
        );
    }

    #[test]
    fn test_first_validation_error_is_stable() {
        let params = FarmParameters {
            temperature: 80.0,
            area: 0.0,
            ..FarmParameters::default()
        };
        let errors = params.validate().unwrap_err();
        let (field, message) = first_validation_error(&errors).unwrap();
        assert_eq!(field, "area");
        assert_eq!(message, "Area must be at least 0.1 acres");
    }
}
