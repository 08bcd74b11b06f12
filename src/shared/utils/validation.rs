use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_item_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Item name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Item name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_item_id(id: &str) -> Result<(), AppError> {
        if id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Item id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_price(price: f64) -> Result<(), AppError> {
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::ValidationError(
                "Price must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}
