// src/domain/sponsor.rs

use crate::errors::{RegistryError, RegistryResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranked sponsor category. The ranking is a display convention only;
/// nothing orders sponsors by tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl SponsorTier {
    pub const ALL: [SponsorTier; 4] = [
        SponsorTier::Platinum,
        SponsorTier::Gold,
        SponsorTier::Silver,
        SponsorTier::Bronze,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SponsorTier::Platinum => "platinum",
            SponsorTier::Gold => "gold",
            SponsorTier::Silver => "silver",
            SponsorTier::Bronze => "bronze",
        }
    }
}

impl fmt::Display for SponsorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SponsorTier {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SponsorTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| RegistryError::Validation(format!("unknown sponsor tier '{s}'")))
    }
}

/// A sponsor as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub tier: SponsorTier,
    pub area: String,
    pub city: String,
    pub website: String,
    pub description: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Whole rupees.
    pub contribution: i64,
    pub is_active: bool,
    pub created_at: NaiveDate,
}

impl Sponsor {
    /// Builds a new record from validated form fields.
    pub(crate) fn from_form(
        id: String,
        fields: SponsorFormData,
        is_active: bool,
        created_at: NaiveDate,
    ) -> Self {
        Sponsor {
            id,
            name: fields.name,
            logo: fields.logo,
            tier: fields.tier,
            area: fields.area,
            city: fields.city,
            website: fields.website,
            description: fields.description,
            contact_email: fields.contact_email,
            contact_phone: fields.contact_phone,
            contribution: fields.contribution,
            is_active,
            created_at,
        }
    }

    /// Replaces every mutable field. `id` and `created_at` are left alone.
    pub(crate) fn apply_form(&mut self, fields: SponsorFormData, is_active: bool) {
        self.name = fields.name;
        self.logo = fields.logo;
        self.tier = fields.tier;
        self.area = fields.area;
        self.city = fields.city;
        self.website = fields.website;
        self.description = fields.description;
        self.contact_email = fields.contact_email;
        self.contact_phone = fields.contact_phone;
        self.contribution = fields.contribution;
        self.is_active = is_active;
    }

    /// The editable fields of this record, e.g. to pre-fill an edit form.
    pub fn form_data(&self) -> SponsorFormData {
        SponsorFormData {
            name: self.name.clone(),
            logo: self.logo.clone(),
            tier: self.tier,
            area: self.area.clone(),
            city: self.city.clone(),
            website: self.website.clone(),
            description: self.description.clone(),
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            contribution: self.contribution,
        }
    }
}

/// Fields supplied by the presentation layer on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorFormData {
    pub name: String,
    pub logo: String,
    pub tier: SponsorTier,
    pub area: String,
    pub city: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contribution: i64,
}

impl SponsorFormData {
    /// Checks required-field presence and the contribution sign.
    /// `website` and `description` may be empty.
    pub fn validate(&self) -> RegistryResult<()> {
        let required = [
            ("name", &self.name),
            ("logo", &self.logo),
            ("city", &self.city),
            ("area", &self.area),
            ("contactEmail", &self.contact_email),
            ("contactPhone", &self.contact_phone),
        ];

        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(RegistryError::Validation(format!(
                "{field} is required"
            )));
        }

        if self.contribution < 0 {
            return Err(RegistryError::Validation(format!(
                "contribution must not be negative (got {})",
                self.contribution
            )));
        }

        Ok(())
    }
}
