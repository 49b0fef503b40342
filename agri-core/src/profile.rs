//! Farmer profile, its partial update, and the persisted snapshot schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Know-your-customer verification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KycStatus {
    #[default]
    Pending,
    Verified,
}

/// Identity and attributes of a farmer.
///
/// Serialized with camelCase keys; this is the format persisted in browser
/// storage under `farmerData_<account>`.
///
/// Invariant: `nft_created` implies `registration_date.is_some()` and
/// `kyc_status == KycStatus::Verified`. [`ProfilePatch`] cannot touch those
/// fields; only [`FarmerProfile::mark_registered`] and
/// [`FarmerProfile::from_snapshot`] set them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfile {
    pub name: String,
    pub location: String,
    pub farm_size: String,
    pub crop_type: String,
    pub farming_method: String,
    pub years_of_experience: String,
    pub email: String,
    pub phone: String,
    pub kyc_status: KycStatus,
    pub nft_created: bool,
    pub registration_date: Option<DateTime<Utc>>,
    pub crop_image: Option<String>,
    pub profile_image: Option<String>,
    pub join_date: DateTime<Utc>,
}

impl FarmerProfile {
    /// Empty, unregistered profile joined at `join_date`.
    pub fn new(join_date: DateTime<Utc>) -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            farm_size: String::new(),
            crop_type: String::new(),
            farming_method: String::new(),
            years_of_experience: String::new(),
            email: String::new(),
            phone: String::new(),
            kyc_status: KycStatus::Pending,
            nft_created: false,
            registration_date: None,
            crop_image: None,
            profile_image: None,
            join_date,
        }
    }

    /// Shallow merge: every field present in `patch` overwrites ours.
    pub fn apply(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            name,
            location,
            farm_size,
            crop_type,
            farming_method,
            years_of_experience,
            email,
            phone,
            crop_image,
            profile_image,
        } = patch;

        overwrite(&mut self.name, name);
        overwrite(&mut self.location, location);
        overwrite(&mut self.farm_size, farm_size);
        overwrite(&mut self.crop_type, crop_type);
        overwrite(&mut self.farming_method, farming_method);
        overwrite(&mut self.years_of_experience, years_of_experience);
        overwrite(&mut self.email, email);
        overwrite(&mut self.phone, phone);
        overwrite(&mut self.crop_image, crop_image);
        overwrite(&mut self.profile_image, profile_image);
    }

    /// Flag the profile as registered: NFT minted, KYC verified, dated `at`.
    pub fn mark_registered(&mut self, at: DateTime<Utc>) {
        self.nft_created = true;
        self.kyc_status = KycStatus::Verified;
        self.registration_date = Some(at);
    }

    /// Overlay a persisted snapshot on a fresh default profile.
    ///
    /// Fields missing from the snapshot keep their defaults. A snapshot that
    /// claims `nftCreated` but lacks a verified status or registration date
    /// is completed (`now` for the date) so the registration invariant holds.
    pub fn from_snapshot(snapshot: ProfileSnapshot, now: DateTime<Utc>) -> Self {
        let ProfileSnapshot {
            name,
            location,
            farm_size,
            crop_type,
            farming_method,
            years_of_experience,
            email,
            phone,
            kyc_status,
            nft_created,
            registration_date,
            crop_image,
            profile_image,
            join_date,
        } = snapshot;

        let mut profile = Self::new(join_date.unwrap_or(now));
        profile.apply(ProfilePatch {
            name,
            location,
            farm_size,
            crop_type,
            farming_method,
            years_of_experience,
            email,
            phone,
            crop_image,
            profile_image,
        });
        overwrite(&mut profile.kyc_status, kyc_status);
        overwrite(&mut profile.nft_created, nft_created);
        overwrite(&mut profile.registration_date, registration_date);

        if profile.nft_created {
            if profile.kyc_status != KycStatus::Verified {
                log::debug!("Snapshot has nftCreated without Verified KYC; normalising");
            }
            let at = profile.registration_date.unwrap_or(now);
            profile.mark_registered(at);
        }
        profile
    }

    /// Whether the registration invariant holds.
    pub fn is_consistent(&self) -> bool {
        !self.nft_created
            || (self.registration_date.is_some() && self.kyc_status == KycStatus::Verified)
    }
}

impl Default for FarmerProfile {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Partial update of the editable profile fields.
///
/// `crop_image` and `profile_image` are doubly optional: `Some(None)`
/// clears the image, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub farm_size: Option<String>,
    pub crop_type: Option<String>,
    pub farming_method: Option<String>,
    pub years_of_experience: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub crop_image: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub profile_image: Option<Option<String>>,
}

/// Schema of the persisted profile snapshot.
///
/// Every field is optional so older or partial snapshots load, but present
/// fields must have the right type and unknown keys are rejected. Callers
/// treat a snapshot that fails to parse as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProfileSnapshot {
    pub name: Option<String>,
    pub location: Option<String>,
    pub farm_size: Option<String>,
    pub crop_type: Option<String>,
    pub farming_method: Option<String>,
    pub years_of_experience: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub kyc_status: Option<KycStatus>,
    pub nft_created: Option<bool>,
    #[serde(deserialize_with = "double_option")]
    pub registration_date: Option<Option<DateTime<Utc>>>,
    #[serde(deserialize_with = "double_option")]
    pub crop_image: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub profile_image: Option<Option<String>>,
    pub join_date: Option<DateTime<Utc>>,
}

impl ProfileSnapshot {
    /// Parse a snapshot from its stored JSON text.
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from a missing key (`None`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
