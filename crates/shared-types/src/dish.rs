use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use validator::{Validate, ValidationErrors};

use crate::error::SubmitError;
use crate::mask::{check_preparation_time, format_diameter, format_preparation_time};
use crate::time::PreparationTime;

pub const NAME_MIN_LENGTH: u64 = 3;
pub const MAX_SLICES: u32 = 16;
pub const MAX_SPICINESS: u32 = 10;

const TYPE_MESSAGE: &str = "Dish type is required";
const SLICES_MESSAGE: &str = "Number of slices must be between 1 and 16";
const DIAMETER_MESSAGE: &str = "Diameter must be a number";
const SPICINESS_MESSAGE: &str = "Spiciness must be between 1 and 10";
const BREAD_MESSAGE: &str = "Slices of bread must be a whole number";

// ---------------------------------------------------------------------------
// Dish type and form fields
// ---------------------------------------------------------------------------

/// The kind of dish being described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishType {
    Pizza,
    Soup,
    Sandwich,
}

/// All dish types in display order.
pub const ALL_DISH_TYPES: &[DishType] = &[DishType::Pizza, DishType::Soup, DishType::Sandwich];

impl DishType {
    /// Wire value and select option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DishType::Pizza => "pizza",
            DishType::Soup => "soup",
            DishType::Sandwich => "sandwich",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DishType::Pizza => "Pizza",
            DishType::Soup => "Soup",
            DishType::Sandwich => "Sandwich",
        }
    }

    /// Parse a select value. Anything unrecognised (including `""`) is unset.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "pizza" => Some(DishType::Pizza),
            "soup" => Some(DishType::Soup),
            "sandwich" => Some(DishType::Sandwich),
            _ => None,
        }
    }

    /// The inputs that belong to this type.
    pub fn fields(&self) -> &'static [DishField] {
        match self {
            DishType::Pizza => &[DishField::NoOfSlices, DishField::Diameter],
            DishType::Soup => &[DishField::SpicinessScale],
            DishType::Sandwich => &[DishField::SlicesOfBread],
        }
    }
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input of the dish form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DishField {
    Name,
    PreparationTime,
    Type,
    NoOfSlices,
    Diameter,
    SpicinessScale,
    SlicesOfBread,
}

impl DishField {
    /// The `name`/`id` attribute of the rendered input.
    pub fn form_name(&self) -> &'static str {
        match self {
            DishField::Name => "name",
            DishField::PreparationTime => "preparationTime",
            DishField::Type => "type",
            DishField::NoOfSlices => "noOfSlices",
            DishField::Diameter => "diameter",
            DishField::SpicinessScale => "spicinessScale",
            DishField::SlicesOfBread => "slicesOfBread",
        }
    }

    /// The key this field is sent under, also used for `field_errors`.
    pub fn payload_key(&self) -> &'static str {
        match self {
            DishField::Name => "name",
            DishField::PreparationTime => "preparation_time",
            DishField::Type => "type",
            DishField::NoOfSlices => "no_of_slices",
            DishField::Diameter => "diameter",
            DishField::SpicinessScale => "spiciness_scale",
            DishField::SlicesOfBread => "slices_of_bread",
        }
    }

    pub fn from_form_name(s: &str) -> Option<Self> {
        match s {
            "name" => Some(DishField::Name),
            "preparationTime" => Some(DishField::PreparationTime),
            "type" => Some(DishField::Type),
            "noOfSlices" => Some(DishField::NoOfSlices),
            "diameter" => Some(DishField::Diameter),
            "spicinessScale" => Some(DishField::SpicinessScale),
            "slicesOfBread" => Some(DishField::SlicesOfBread),
            _ => None,
        }
    }

    /// Whether the field only applies to some dish types.
    pub fn is_type_specific(&self) -> bool {
        !matches!(
            self,
            DishField::Name | DishField::PreparationTime | DishField::Type
        )
    }
}

// ---------------------------------------------------------------------------
// Submission payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PizzaDetails {
    #[validate(range(min = 1, max = 16, message = "Number of slices must be between 1 and 16"))]
    pub no_of_slices: u32,
    #[validate(range(min = 0.0, message = "Diameter must be non-negative"))]
    pub diameter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SoupDetails {
    #[validate(range(min = 1, max = 10, message = "Spiciness must be between 1 and 10"))]
    pub spiciness_scale: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SandwichDetails {
    pub slices_of_bread: u32,
}

/// Type-specific data, tagged on the wire by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DishDetails {
    Pizza(PizzaDetails),
    Soup(SoupDetails),
    Sandwich(SandwichDetails),
}

impl DishDetails {
    pub fn dish_type(&self) -> DishType {
        match self {
            DishDetails::Pizza(_) => DishType::Pizza,
            DishDetails::Soup(_) => DishType::Soup,
            DishDetails::Sandwich(_) => DishType::Sandwich,
        }
    }
}

impl Validate for DishDetails {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            DishDetails::Pizza(d) => d.validate(),
            DishDetails::Soup(d) => d.validate(),
            DishDetails::Sandwich(d) => d.validate(),
        }
    }
}

/// The JSON body POSTed for one dish.
///
/// Keys that do not belong to the dish type are absent, never `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub preparation_time: PreparationTime,
    #[serde(flatten)]
    pub details: DishDetails,
}

impl SubmissionPayload {
    pub fn dish_type(&self) -> DishType {
        self.details.dish_type()
    }

    /// Re-run the form constraints, e.g. on a payload that was deserialized.
    pub fn check(&self) -> Result<(), SubmitError> {
        let mut field_errors = HashMap::new();
        merge(&mut field_errors, DishName { name: self.name.clone() }.validate());
        merge(&mut field_errors, self.details.validate());
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::validation("Validation failed", field_errors))
        }
    }
}

#[derive(Validate)]
struct DishName {
    #[validate(length(min = 3, message = "Dish name must be at least 3 characters"))]
    name: String,
}

fn merge(field_errors: &mut HashMap<String, String>, result: Result<(), ValidationErrors>) {
    if let Err(errors) = result {
        field_errors.extend(SubmitError::from(errors).field_errors);
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The form's in-progress values, exactly as displayed.
///
/// Type-specific values survive type switches; only the ones matching
/// `dish_type` are rendered and submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftDish {
    pub name: String,
    pub preparation_time: String,
    pub dish_type: Option<DishType>,
    pub no_of_slices: String,
    pub diameter: String,
    pub spiciness_scale: String,
    pub slices_of_bread: String,
    /// Inline error for the preparation time, refreshed on every edit.
    pub preparation_time_error: Option<String>,
}

impl DraftDish {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one change event: mask the raw value and store it.
    pub fn apply_input(&mut self, field: DishField, raw: &str) {
        match field {
            DishField::Name => self.name = raw.to_string(),
            DishField::PreparationTime => {
                let masked = format_preparation_time(raw);
                self.preparation_time_error = check_preparation_time(&masked).map(str::to_string);
                self.preparation_time = masked;
            }
            DishField::Type => self.dish_type = DishType::from_key(raw),
            DishField::NoOfSlices => self.no_of_slices = raw.to_string(),
            DishField::Diameter => self.diameter = format_diameter(raw),
            DishField::SpicinessScale => self.spiciness_scale = raw.to_string(),
            DishField::SlicesOfBread => self.slices_of_bread = raw.to_string(),
        }
    }

    /// Current display text of a field.
    pub fn value(&self, field: DishField) -> &str {
        match field {
            DishField::Name => &self.name,
            DishField::PreparationTime => &self.preparation_time,
            DishField::Type => self.dish_type.map(|t| t.as_str()).unwrap_or(""),
            DishField::NoOfSlices => &self.no_of_slices,
            DishField::Diameter => &self.diameter,
            DishField::SpicinessScale => &self.spiciness_scale,
            DishField::SlicesOfBread => &self.slices_of_bread,
        }
    }

    /// Whether the field is rendered for the current dish type.
    pub fn is_visible(&self, field: DishField) -> bool {
        if !field.is_type_specific() {
            return true;
        }
        self.dish_type
            .map(|t| t.fields().contains(&field))
            .unwrap_or(false)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the payload for the current type, or report every failing field.
    pub fn to_payload(&self) -> Result<SubmissionPayload, SubmitError> {
        let mut field_errors = HashMap::new();

        merge(&mut field_errors, DishName { name: self.name.clone() }.validate());

        let preparation_time = match PreparationTime::parse(&self.preparation_time) {
            Ok(t) => Some(t),
            Err(e) => {
                field_errors.insert(DishField::PreparationTime.payload_key().to_string(), e.to_string());
                None
            }
        };

        let details = match self.dish_type {
            Some(dish_type) => self.details_for(dish_type, &mut field_errors),
            None => {
                field_errors.insert(DishField::Type.payload_key().to_string(), TYPE_MESSAGE.to_string());
                None
            }
        };

        match (preparation_time, details) {
            (Some(preparation_time), Some(details)) if field_errors.is_empty() => {
                Ok(SubmissionPayload {
                    name: self.name.clone(),
                    preparation_time,
                    details,
                })
            }
            _ => Err(SubmitError::validation("Validation failed", field_errors)),
        }
    }

    fn details_for(
        &self,
        dish_type: DishType,
        field_errors: &mut HashMap<String, String>,
    ) -> Option<DishDetails> {
        let details = match dish_type {
            DishType::Pizza => {
                let slices = parse_field(&self.no_of_slices, DishField::NoOfSlices, SLICES_MESSAGE, field_errors);
                let diameter = parse_field(&self.diameter, DishField::Diameter, DIAMETER_MESSAGE, field_errors);
                DishDetails::Pizza(PizzaDetails {
                    no_of_slices: slices?,
                    diameter: diameter?,
                })
            }
            DishType::Soup => DishDetails::Soup(SoupDetails {
                spiciness_scale: parse_field(
                    &self.spiciness_scale,
                    DishField::SpicinessScale,
                    SPICINESS_MESSAGE,
                    field_errors,
                )?,
            }),
            DishType::Sandwich => DishDetails::Sandwich(SandwichDetails {
                slices_of_bread: parse_field(
                    &self.slices_of_bread,
                    DishField::SlicesOfBread,
                    BREAD_MESSAGE,
                    field_errors,
                )?,
            }),
        };
        merge(field_errors, details.validate());
        Some(details)
    }
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    field: DishField,
    message: &str,
    field_errors: &mut HashMap<String, String>,
) -> Option<T> {
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            field_errors.insert(field.payload_key().to_string(), message.to_string());
            None
        }
    }
}
